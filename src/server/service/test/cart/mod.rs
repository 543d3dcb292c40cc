use crate::server::{
    error::{cart::CartError, AppError},
    model::cart::{CartConfig, OwnerKey},
    service::cart::CartService,
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_item;
mod clear;
mod get_or_create;
mod remove_item;
mod totals;
mod update_item;

/// Changes a product's base price out from under existing cart lines.
async fn reprice_product(
    db: &sea_orm::DatabaseConnection,
    product: entity::product::Model,
    price_cents: i32,
) -> Result<(), sea_orm::DbErr> {
    let mut active_model: entity::product::ActiveModel = product.into();
    active_model.price_cents = ActiveValue::Set(price_cents);
    active_model.update(db).await?;

    Ok(())
}
