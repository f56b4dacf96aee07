//! Sextant Catalog - Domain model and conversion core
//!
//! This crate provides:
//! - Domain model types for the API Definition resource of a registered
//!   application
//! - The conversion pipeline between the wire representation, the domain
//!   model, and the storage entity
//!
//! The orchestrating converter is the only component that touches all three
//! representations; nested value objects are delegated to sub-converters
//! injected at construction time.

pub mod convert;
pub mod model;

// Re-export the converter core
pub use convert::{
    ApiDefinitionConverter, AuthConverter, DefaultAuthConverter, DefaultFetchRequestConverter,
    DefaultVersionConverter, FetchRequestConverter, VersionConverter,
};

// Re-export model types
pub use model::{
    ApiDefinition, ApiDefinitionInput, ApiRuntimeAuth, ApiSpec, ApiSpecInput, Auth,
    BasicCredential, Credential, FetchMode, FetchRequest, OauthCredential, SpecFormat, SpecType,
    Version,
};
