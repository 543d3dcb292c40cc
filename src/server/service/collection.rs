//! Collection service: curated product groupings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{collection::CollectionRepository, product::ProductRepository},
    error::AppError,
    model::{
        collection::{CollectionWithProducts, CreateCollectionParams, UpdateCollectionParams},
        product::ProductWithImages,
    },
};

/// Service handling collection management and product assignment.
pub struct CollectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists collections with their assigned products in position order.
    pub async fn list(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<CollectionWithProducts>, AppError> {
        let repo = CollectionRepository::new(self.db);

        let collections = repo.list(include_inactive).await?;

        let mut result = Vec::with_capacity(collections.len());
        for collection in collections {
            let products = self.products_with_images(&repo, collection.id).await?;
            result.push(CollectionWithProducts {
                collection,
                products,
            });
        }

        Ok(result)
    }

    /// Loads one collection with its assigned products.
    pub async fn get(&self, id: i32) -> Result<Option<CollectionWithProducts>, AppError> {
        let repo = CollectionRepository::new(self.db);

        let Some(collection) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let products = self.products_with_images(&repo, collection.id).await?;

        Ok(Some(CollectionWithProducts {
            collection,
            products,
        }))
    }

    /// Creates a collection.
    pub async fn create(
        &self,
        params: CreateCollectionParams,
    ) -> Result<CollectionWithProducts, AppError> {
        let repo = CollectionRepository::new(self.db);

        let collection = repo.create(params).await?;

        Ok(CollectionWithProducts {
            collection,
            products: Vec::new(),
        })
    }

    /// Updates a collection's fields.
    ///
    /// # Returns
    /// - `Ok(Some(CollectionWithProducts))` - The updated collection
    /// - `Ok(None)` - No collection with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCollectionParams,
    ) -> Result<Option<CollectionWithProducts>, AppError> {
        let repo = CollectionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        repo.update(id, params).await?;

        self.get(id).await
    }

    /// Deactivates a collection.
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let repo = CollectionRepository::new(self.db);

        Ok(repo.set_active(id, false).await?)
    }

    /// Restores a deactivated collection.
    pub async fn restore(&self, id: i32) -> Result<bool, AppError> {
        let repo = CollectionRepository::new(self.db);

        Ok(repo.set_active(id, true).await?)
    }

    /// Replaces the collection's product list; positions follow list order.
    ///
    /// # Returns
    /// - `Ok(Some(CollectionWithProducts))` - The collection after reassignment
    /// - `Ok(None)` - No collection with this id
    /// - `Err(AppError::BadRequest)` - A referenced product does not exist
    pub async fn assign_products(
        &self,
        id: i32,
        product_ids: &[i32],
    ) -> Result<Option<CollectionWithProducts>, AppError> {
        let repo = CollectionRepository::new(self.db);
        let product_repo = ProductRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        for product_id in product_ids {
            if product_repo.find_by_id(*product_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Product {} does not exist",
                    product_id
                )));
            }
        }

        repo.replace_products(id, product_ids).await?;

        self.get(id).await
    }

    /// Removes one product from the collection.
    pub async fn remove_product(
        &self,
        collection_id: i32,
        product_id: i32,
    ) -> Result<bool, AppError> {
        let repo = CollectionRepository::new(self.db);

        Ok(repo.remove_product(collection_id, product_id).await?)
    }

    async fn products_with_images(
        &self,
        repo: &CollectionRepository<'_, DatabaseConnection>,
        collection_id: i32,
    ) -> Result<Vec<ProductWithImages>, AppError> {
        let product_repo = ProductRepository::new(self.db);

        let products = repo.assigned_products(collection_id).await?;
        let ids: Vec<i32> = products.iter().map(|product| product.id).collect();
        let mut galleries = product_repo.images_for(&ids).await?;

        Ok(products
            .into_iter()
            .map(|product| {
                let images = galleries.remove(&product.id).unwrap_or_default();
                ProductWithImages { product, images }
            })
            .collect())
    }
}
