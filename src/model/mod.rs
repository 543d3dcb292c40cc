//! Wire-level data transfer objects shared by the API surface.
//!
//! Every endpoint responds with the uniform [`api::ApiResponse`] envelope;
//! the structs here are the `data` payloads and request bodies it carries.

pub mod about;
pub mod api;
pub mod banner;
pub mod cart;
pub mod collection;
pub mod dashboard;
pub mod message;
pub mod order;
pub mod product;
pub mod user;
