//! Product catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{
        AddProductImageParams, CreateProductParams, ProductFilter, ProductWithImages,
        UpdateProductParams,
    },
};

/// Service handling catalog product management.
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists products matching the filter, with image galleries.
    pub async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductWithImages>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.list(filter).await?)
    }

    /// Loads a product with its image gallery.
    pub async fn get(&self, id: i32) -> Result<Option<ProductWithImages>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_with_images(id).await?)
    }

    /// Creates a catalog product.
    pub async fn create(&self, params: CreateProductParams) -> Result<ProductWithImages, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = repo.create(params).await?;

        Ok(ProductWithImages {
            product,
            images: Vec::new(),
        })
    }

    /// Updates a product's fields.
    ///
    /// # Returns
    /// - `Ok(Some(ProductWithImages))` - The updated product with its gallery
    /// - `Ok(None)` - No product with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<ProductWithImages>, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        repo.update(id, params).await?;

        Ok(repo.get_with_images(id).await?)
    }

    /// Deactivates a product. Existing cart lines keep referencing it, but it
    /// can no longer be added to carts or listed publicly.
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.set_active(id, false).await?)
    }

    /// Restores a deactivated product into the catalog.
    pub async fn restore(&self, id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.set_active(id, true).await?)
    }

    /// Attaches an image record to a product.
    ///
    /// The position defaults to the end of the current gallery, and the
    /// filename to the URL's final path segment.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The created image record
    /// - `Ok(None)` - No product with this id
    pub async fn add_image(
        &self,
        product_id: i32,
        filename: Option<String>,
        url: String,
        position: Option<i32>,
    ) -> Result<Option<entity::product_image::Model>, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_by_id(product_id).await?.is_none() {
            return Ok(None);
        }

        let position = match position {
            Some(position) => position,
            None => {
                let galleries = repo.images_for(&[product_id]).await?;
                galleries.get(&product_id).map(Vec::len).unwrap_or(0) as i32
            }
        };

        let filename = filename.unwrap_or_else(|| {
            url.rsplit('/')
                .next()
                .map(str::to_string)
                .unwrap_or_default()
        });

        Ok(Some(
            repo.add_image(AddProductImageParams {
                product_id,
                filename,
                url,
                position,
            })
            .await?,
        ))
    }

    /// Removes an image record from a product's gallery.
    pub async fn delete_image(&self, product_id: i32, image_id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.delete_image(product_id, image_id).await?)
    }
}
