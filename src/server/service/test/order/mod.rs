use crate::server::{
    error::{cart::CartError, AppError},
    model::{
        cart::{CartConfig, OwnerKey},
        order::{OrderLine, PlaceOrderParams},
    },
    service::{cart::CartService, order::OrderService},
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use entity::cart::CartStatus;
use entity::order::OrderStatus;

mod cancel;
mod place;

/// Checkout params with no overrides; contact details come from the user.
fn no_overrides() -> PlaceOrderParams {
    PlaceOrderParams {
        customer_name: None,
        customer_email: None,
        shipping_address: None,
    }
}

/// Sets a product's stock directly, simulating a concurrent depletion.
async fn set_stock(
    db: &sea_orm::DatabaseConnection,
    product_id: i32,
    stock: i32,
) -> Result<(), sea_orm::DbErr> {
    let product = entity::prelude::Product::find_by_id(product_id)
        .one(db)
        .await?
        .unwrap();

    let mut active_model: entity::product::ActiveModel = product.into();
    active_model.stock = ActiveValue::Set(stock);
    active_model.update(db).await?;

    Ok(())
}
