//! Sextant Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the catalog tables
//! - SQL null-type helpers for mapping optional scalars to nullable columns
//! - The storage-repository capability trait consumed by the service layer

pub mod entity;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

// Re-export persistence traits
pub use traits::ApiDefinitionPersistence;
