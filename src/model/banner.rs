use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BannerDto {
    pub id: i32,
    pub title: String,
    pub tagline: Option<String>,
    pub image: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBannerDto {
    pub title: String,
    pub tagline: Option<String>,
    pub image: String,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBannerDto {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub image: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}
