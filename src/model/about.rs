use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutDto {
    pub content: String,
    pub milestones: Option<serde_json::Value>,
    pub updated_by_user_id: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAboutDto {
    pub content: String,
    pub milestones: Option<serde_json::Value>,
}
