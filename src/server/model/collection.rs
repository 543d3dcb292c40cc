use crate::{
    model::collection::{CollectionDto, CreateCollectionDto, UpdateCollectionDto},
    server::{model::product::ProductWithImages, util::slug::slugify},
};

/// A collection with its assigned products in position order.
#[derive(Debug, Clone)]
pub struct CollectionWithProducts {
    pub collection: entity::collection::Model,
    pub products: Vec<ProductWithImages>,
}

impl CollectionWithProducts {
    pub fn into_dto(self) -> CollectionDto {
        CollectionDto {
            id: self.collection.id,
            name: self.collection.name,
            slug: self.collection.slug,
            description: self.collection.description,
            cover_image: self.collection.cover_image,
            is_active: self.collection.is_active,
            products: self
                .products
                .into_iter()
                .map(ProductWithImages::into_dto)
                .collect(),
            created_at: self.collection.created_at,
            updated_at: self.collection.updated_at,
        }
    }
}

/// Parameters for creating a collection. The slug is already resolved.
pub struct CreateCollectionParams {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub is_active: bool,
}

impl CreateCollectionParams {
    /// Converts the wire DTO, generating the slug from the name when absent.
    pub fn from_dto(dto: CreateCollectionDto) -> Self {
        let slug = dto.slug.unwrap_or_else(|| slugify(&dto.name));

        Self {
            name: dto.name,
            slug,
            description: dto.description,
            cover_image: dto.cover_image,
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

/// Parameters for updating a collection. `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateCollectionParams {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCollectionParams {
    /// Converts the wire DTO. The slug changes only when explicitly provided.
    pub fn from_dto(dto: UpdateCollectionDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            cover_image: dto.cover_image,
            is_active: dto.is_active,
        }
    }
}
