//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity or domain models to the service layer. Every repository is generic over
//! `ConnectionTrait`, so the same data-access code runs against the pooled connection or
//! inside an open transaction.

pub mod about;
pub mod banner;
pub mod cart;
pub mod collection;
pub mod message;
pub mod order;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
