use crate::{
    model::product::{
        CreateProductDto, ProductDto, ProductImageDto, ProductSummaryDto, UpdateProductDto,
    },
    server::{service::pricing, util::slug::slugify},
};

/// A product together with its image gallery, in position order.
#[derive(Debug, Clone)]
pub struct ProductWithImages {
    pub product: entity::product::Model,
    pub images: Vec<entity::product_image::Model>,
}

impl ProductWithImages {
    pub fn into_dto(self) -> ProductDto {
        let discounted = pricing::discounted_price_cents(
            self.product.price_cents,
            self.product.discount_percent,
        );

        ProductDto {
            id: self.product.id,
            sku: self.product.sku,
            name: self.product.name,
            slug: self.product.slug,
            description: self.product.description,
            price_cents: self.product.price_cents,
            discount_percent: self.product.discount_percent,
            discounted_price_cents: discounted,
            stock: self.product.stock,
            is_active: self.product.is_active,
            metadata: self.product.metadata,
            images: self.images.into_iter().map(image_to_dto).collect(),
            created_at: self.product.created_at,
            updated_at: self.product.updated_at,
        }
    }
}

pub fn image_to_dto(model: entity::product_image::Model) -> ProductImageDto {
    ProductImageDto {
        id: model.id,
        filename: model.filename,
        url: model.url,
        position: model.position,
    }
}

/// Compact product view embedded in cart lines.
pub fn to_summary_dto(model: entity::product::Model) -> ProductSummaryDto {
    let discounted = pricing::discounted_price_cents(model.price_cents, model.discount_percent);

    ProductSummaryDto {
        id: model.id,
        name: model.name,
        slug: model.slug,
        price_cents: model.price_cents,
        discounted_price_cents: discounted,
        stock: model.stock,
        is_active: model.is_active,
    }
}

/// Parameters for creating a catalog product. The slug is already resolved
/// (caller-provided or generated from the name).
pub struct CreateProductParams {
    pub sku: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub discount_percent: Option<i16>,
    pub stock: i32,
    pub is_active: bool,
    pub metadata: Option<serde_json::Value>,
}

impl CreateProductParams {
    /// Converts the wire DTO, generating the slug from the name when absent.
    pub fn from_dto(dto: CreateProductDto) -> Self {
        let slug = dto.slug.unwrap_or_else(|| slugify(&dto.name));

        Self {
            sku: dto.sku,
            name: dto.name,
            slug,
            description: dto.description,
            price_cents: dto.price_cents,
            discount_percent: dto.discount_percent,
            stock: dto.stock.unwrap_or(0),
            is_active: dto.is_active.unwrap_or(true),
            metadata: dto.metadata,
        }
    }
}

/// Parameters for updating a product. `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateProductParams {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i32>,
    pub discount_percent: Option<i16>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub metadata: Option<serde_json::Value>,
}

impl UpdateProductParams {
    /// Converts the wire DTO. The slug changes only when explicitly provided.
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            sku: dto.sku,
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            price_cents: dto.price_cents,
            discount_percent: dto.discount_percent,
            stock: dto.stock,
            is_active: dto.is_active,
            metadata: dto.metadata,
        }
    }
}

/// Catalog listing filter.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive match against name, description, or SKU.
    pub search: Option<String>,
    /// Restrict to products assigned to this collection.
    pub collection_id: Option<i32>,
    /// Only products with stock > 0.
    pub in_stock: bool,
    /// Include deactivated products. Only honored for staff callers; the
    /// controller decides and sets this flag.
    pub include_inactive: bool,
}

/// Parameters for attaching an image record to a product.
pub struct AddProductImageParams {
    pub product_id: i32,
    pub filename: String,
    pub url: String,
    pub position: i32,
}
