//! Homepage banner service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::banner::BannerRepository,
    error::AppError,
    model::banner::{CreateBannerParams, UpdateBannerParams},
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists banners in position order, optionally restricted to active ones.
    pub async fn list(&self, active_only: bool) -> Result<Vec<entity::banner::Model>, AppError> {
        let repo = BannerRepository::new(self.db);

        Ok(repo.list(active_only).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::banner::Model>, AppError> {
        let repo = BannerRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn create(
        &self,
        params: CreateBannerParams,
    ) -> Result<entity::banner::Model, AppError> {
        let repo = BannerRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateBannerParams,
    ) -> Result<Option<entity::banner::Model>, AppError> {
        let repo = BannerRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = BannerRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
