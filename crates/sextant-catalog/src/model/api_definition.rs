//! API Definition domain model
//!
//! The internal representation of a registered application's API Definition.
//! `ApiDefinitionInput` is the identity-less variant produced from create and
//! update requests; `to_api_definition` is the only place identity is bound
//! to an input, and it performs no validation beyond structural assembly.

use std::str::FromStr;

use sextant_api::catalog::model as graphql;

use super::auth::Auth;
use super::fetch_request::FetchRequest;
use super::version::Version;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiDefinition {
    pub id: String,
    pub tenant_id: String,
    pub application_id: String,
    pub name: String,
    pub description: Option<String>,
    pub group: Option<String>,
    pub target_url: String,
    pub spec: Option<ApiSpec>,
    pub default_auth: Option<Auth>,
    pub version: Option<Version>,
    pub auths: Vec<ApiRuntimeAuth>,
}

/// API specification document attached to an API Definition
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiSpec {
    pub data: Option<String>,
    pub format: SpecFormat,
    pub spec_type: SpecType,
    pub fetch_request: Option<FetchRequest>,
}

/// Auth assigned to a specific runtime
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiRuntimeAuth {
    pub runtime_id: String,
    pub auth: Option<Auth>,
}

/// Identity-less input variant of [`ApiDefinition`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiDefinitionInput {
    pub name: String,
    pub description: Option<String>,
    pub target_url: String,
    pub group: Option<String>,
    pub spec: Option<ApiSpecInput>,
    pub version: Option<Version>,
    pub default_auth: Option<Auth>,
}

/// Identity-less input variant of [`ApiSpec`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiSpecInput {
    pub data: Option<String>,
    pub format: SpecFormat,
    pub spec_type: SpecType,
    pub fetch_request: Option<FetchRequest>,
}

impl ApiDefinitionInput {
    /// Bind externally supplied identity to this input, producing a
    /// persistable domain model. The tenant is assigned later by the
    /// service layer.
    pub fn to_api_definition(self, id: &str, application_id: &str) -> ApiDefinition {
        ApiDefinition {
            id: id.to_string(),
            tenant_id: String::new(),
            application_id: application_id.to_string(),
            name: self.name,
            description: self.description,
            group: self.group,
            target_url: self.target_url,
            spec: self.spec.map(ApiSpecInput::to_api_spec),
            default_auth: self.default_auth,
            version: self.version,
            auths: Vec::new(),
        }
    }
}

impl ApiSpecInput {
    pub fn to_api_spec(self) -> ApiSpec {
        ApiSpec {
            data: self.data,
            format: self.format,
            spec_type: self.spec_type,
            fetch_request: self.fetch_request,
        }
    }
}

/// Serialization format of a spec document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecFormat {
    #[default]
    Yaml,
    Json,
    Xml,
}

impl SpecFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecFormat::Yaml => "YAML",
            SpecFormat::Json => "JSON",
            SpecFormat::Xml => "XML",
        }
    }
}

impl FromStr for SpecFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YAML" => Ok(SpecFormat::Yaml),
            "JSON" => Ok(SpecFormat::Json),
            "XML" => Ok(SpecFormat::Xml),
            _ => Err(format!("invalid spec format: {}", s)),
        }
    }
}

/// Kind of API contract carried by a spec document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecType {
    #[default]
    OpenApi,
    Odata,
}

impl SpecType {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecType::OpenApi => "OPEN_API",
            SpecType::Odata => "ODATA",
        }
    }
}

impl FromStr for SpecType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN_API" => Ok(SpecType::OpenApi),
            "ODATA" => Ok(SpecType::Odata),
            _ => Err(format!("invalid spec type: {}", s)),
        }
    }
}

impl From<SpecFormat> for graphql::SpecFormat {
    fn from(value: SpecFormat) -> Self {
        match value {
            SpecFormat::Yaml => graphql::SpecFormat::Yaml,
            SpecFormat::Json => graphql::SpecFormat::Json,
            SpecFormat::Xml => graphql::SpecFormat::Xml,
        }
    }
}

impl From<graphql::SpecFormat> for SpecFormat {
    fn from(value: graphql::SpecFormat) -> Self {
        match value {
            graphql::SpecFormat::Yaml => SpecFormat::Yaml,
            graphql::SpecFormat::Json => SpecFormat::Json,
            graphql::SpecFormat::Xml => SpecFormat::Xml,
        }
    }
}

impl From<SpecType> for graphql::SpecType {
    fn from(value: SpecType) -> Self {
        match value {
            SpecType::OpenApi => graphql::SpecType::OpenApi,
            SpecType::Odata => graphql::SpecType::Odata,
        }
    }
}

impl From<graphql::SpecType> for SpecType {
    fn from(value: graphql::SpecType) -> Self {
        match value {
            graphql::SpecType::OpenApi => SpecType::OpenApi,
            graphql::SpecType::Odata => SpecType::Odata,
        }
    }
}
