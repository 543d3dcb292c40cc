//! Shared test infrastructure for the storefront workspace.
//!
//! Provides an in-memory SQLite test context, a schema builder that creates
//! tables straight from the entity definitions, and factories for seeding
//! test data with sensible defaults.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
