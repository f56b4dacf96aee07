//! Conversion pipeline between wire, domain, and storage representations
//!
//! Nested value objects are handled by narrowly-scoped sub-converters
//! behind capability traits. The orchestrating [`ApiDefinitionConverter`]
//! receives them at construction time and never encodes their internal
//! shape; tests substitute recording fakes.

use sextant_api::catalog::model as graphql;
use sextant_common::SextantError;
use sextant_persistence::entity::api_definition::VersionColumns;

use crate::model::{Auth, FetchRequest, Version};

pub mod api_definition;
pub mod auth;
pub mod fetch_request;
pub mod version;

pub use api_definition::ApiDefinitionConverter;
pub use auth::DefaultAuthConverter;
pub use fetch_request::DefaultFetchRequestConverter;
pub use version::DefaultVersionConverter;

/// Conversion capabilities for the auth value object, including the opaque
/// blob codec used by the storage representation
pub trait AuthConverter: Send + Sync {
    /// Map a domain auth to its wire representation; `None` in, `None` out
    fn to_graphql(&self, auth: Option<&Auth>) -> Option<graphql::Auth>;

    /// Map a wire auth to its domain representation; `None` in, `None` out
    fn input_from_graphql(&self, input: Option<&graphql::Auth>) -> Option<Auth>;

    /// Serialize an auth into the storage blob
    fn encode(&self, auth: Option<&Auth>) -> Result<Option<String>, SextantError>;

    /// Parse a stored blob back into an auth
    fn decode(&self, blob: Option<&str>) -> Result<Option<Auth>, SextantError>;
}

/// Conversion capabilities for the fetch request value object
pub trait FetchRequestConverter: Send + Sync {
    fn to_graphql(&self, fetch_request: Option<&FetchRequest>) -> Option<graphql::FetchRequest>;

    fn input_from_graphql(&self, input: Option<&graphql::FetchRequest>) -> Option<FetchRequest>;
}

/// Conversion capabilities for the version value object, including its
/// flattened storage columns
pub trait VersionConverter: Send + Sync {
    fn to_graphql(&self, version: Option<&Version>) -> Option<graphql::Version>;

    fn input_from_graphql(&self, input: Option<&graphql::Version>) -> Option<Version>;

    /// Flatten a version into its column group; `None` leaves every column
    /// NULL
    fn to_entity(&self, version: Option<&Version>) -> VersionColumns;

    /// Rebuild a version from its column group; an all-NULL group yields
    /// `None`
    fn from_entity(&self, columns: &VersionColumns) -> Option<Version>;
}
