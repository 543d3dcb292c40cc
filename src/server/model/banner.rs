use crate::model::banner::BannerDto;

/// Parameters for creating a banner.
pub struct CreateBannerParams {
    pub title: String,
    pub tagline: Option<String>,
    pub image: String,
    pub position: i32,
    pub is_active: bool,
}

/// Parameters for updating a banner. `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateBannerParams {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub image: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

pub fn to_dto(model: entity::banner::Model) -> BannerDto {
    BannerDto {
        id: model.id,
        title: model.title,
        tagline: model.tagline,
        image: model.image,
        position: model.position,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
