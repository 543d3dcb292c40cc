use crate::model::about::AboutDto;

/// Converts the singleton about row to its DTO. `None` yields an empty page,
/// matching first-run deployments where nothing has been published yet.
pub fn to_dto(model: Option<entity::about::Model>) -> AboutDto {
    match model {
        Some(about) => AboutDto {
            content: about.content,
            milestones: about.milestones,
            updated_by_user_id: Some(about.updated_by_user_id),
            updated_at: Some(about.updated_at),
        },
        None => AboutDto {
            content: String::new(),
            milestones: None,
            updated_by_user_id: None,
            updated_at: None,
        },
    }
}
