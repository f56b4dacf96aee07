//! Fetch request value object

use sextant_api::catalog::model as graphql;

use super::auth::Auth;

/// Instruction for fetching a spec document from a remote location
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    pub url: String,
    pub auth: Option<Auth>,
    pub mode: FetchMode,
    pub filter: Option<String>,
}

/// Granularity of a fetch request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Fetch a single spec document
    #[default]
    Single,
    /// Fetch a package containing multiple documents
    Package,
    /// Fetch an index document pointing at the real specs
    Index,
}

impl From<FetchMode> for graphql::FetchMode {
    fn from(value: FetchMode) -> Self {
        match value {
            FetchMode::Single => graphql::FetchMode::Single,
            FetchMode::Package => graphql::FetchMode::Package,
            FetchMode::Index => graphql::FetchMode::Index,
        }
    }
}

impl From<graphql::FetchMode> for FetchMode {
    fn from(value: graphql::FetchMode) -> Self {
        match value {
            graphql::FetchMode::Single => FetchMode::Single,
            graphql::FetchMode::Package => FetchMode::Package,
            graphql::FetchMode::Index => FetchMode::Index,
        }
    }
}
