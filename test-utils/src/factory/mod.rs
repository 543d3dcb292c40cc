//! Factories for creating test entities with sensible defaults.
//!
//! Each factory offers a builder for customizing fields plus a shorthand
//! `create_*` function for the common case. Identifiers embed a process-wide
//! counter so repeated calls never collide on unique columns.

pub mod banner;
pub mod collection;
pub mod helpers;
pub mod message;
pub mod order;
pub mod product;
pub mod user;
