use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Cart domain failures.
///
/// All variants are recoverable by the caller: stock failures by lowering the
/// quantity, missing lines by re-fetching the cart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity (plus any quantity already in the cart for the
    /// same product) exceeds the product's current stock.
    ///
    /// The stock figure is advisory: nothing is reserved, and it may already
    /// be stale by the time the caller retries.
    #[error("Insufficient stock available")]
    InsufficientStock {
        available_stock: i32,
        /// Set when the failure came from merging into an existing line.
        current_in_cart: Option<i32>,
    },

    /// The referenced cart line does not exist or belongs to another cart.
    #[error("Cart item not found")]
    ItemNotFound,

    /// Quantity outside the allowed `1..=max` range.
    #[error("Quantity must be between 1 and {max}")]
    InvalidQuantity { max: i32 },

    /// Order placement was attempted on a cart with no lines.
    #[error("Cart is empty")]
    EmptyCart,
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        match self {
            Self::InsufficientStock {
                available_stock,
                current_in_cart,
            } => {
                let (message, data) = match current_in_cart {
                    Some(in_cart) => (
                        "Cannot add more items. Insufficient stock available",
                        json!({
                            "current_in_cart": in_cart,
                            "available_stock": available_stock,
                        }),
                    ),
                    None => (
                        "Insufficient stock available",
                        json!({ "available_stock": available_stock }),
                    ),
                };

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::with_data(message, data)),
                )
                    .into_response()
            }
            Self::ItemNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("Cart item not found")),
            )
                .into_response(),
            err @ Self::InvalidQuantity { .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            Self::EmptyCart => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("Cart is empty"))).into_response()
            }
        }
    }
}
