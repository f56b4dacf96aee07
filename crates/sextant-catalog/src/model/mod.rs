//! Domain model types for the catalog
//!
//! These types are the internal representation of the API Definition
//! resource, decoupled from both the wire DTOs and the storage entity.

pub mod api_definition;
pub mod auth;
pub mod fetch_request;
pub mod version;

pub use api_definition::{
    ApiDefinition, ApiDefinitionInput, ApiRuntimeAuth, ApiSpec, ApiSpecInput, SpecFormat, SpecType,
};
pub use auth::{Auth, BasicCredential, Credential, OauthCredential};
pub use fetch_request::{FetchMode, FetchRequest};
pub use version::Version;
