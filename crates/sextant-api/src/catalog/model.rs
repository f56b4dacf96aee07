//! Catalog API models
//!
//! This module defines the wire representations of the API Definition
//! resource and its nested value objects. Every optional field is an
//! explicit `Option`; the input variants lack identity fields and are
//! materialized into domain models by the converter core.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Multi-valued request parameters (headers or query params) attached to an auth
pub type ParamValues = HashMap<String, Vec<String>>;

/// API Definition resource as exposed at the API boundary
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinition {
    pub id: String,

    /// Owning application
    pub application_id: String,

    pub name: String,

    pub description: Option<String>,

    /// Logical grouping of API definitions within an application
    pub group: Option<String>,

    pub target_url: String,

    pub spec: Option<ApiSpec>,

    /// Auth used for every runtime without an explicit per-runtime auth
    pub default_auth: Option<Auth>,

    pub version: Option<Version>,

    /// Per-runtime auth overrides
    #[serde(default)]
    pub auths: Vec<RuntimeAuth>,
}

/// Input variant of [`ApiDefinition`], lacking identity fields
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinitionInput {
    pub name: String,
    pub description: Option<String>,
    pub target_url: String,
    pub group: Option<String>,
    pub spec: Option<ApiSpecInput>,
    pub version: Option<Version>,
    pub default_auth: Option<Auth>,
}

/// API specification document attached to an API Definition
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpec {
    /// Raw spec document; absent when the spec has not been fetched yet
    pub data: Option<String>,

    pub format: SpecFormat,

    #[serde(rename = "type")]
    pub spec_type: SpecType,

    pub fetch_request: Option<FetchRequest>,
}

/// Input variant of [`ApiSpec`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpecInput {
    pub data: Option<String>,

    pub format: SpecFormat,

    #[serde(rename = "type")]
    pub spec_type: SpecType,

    pub fetch_request: Option<FetchRequest>,
}

/// Serialization format of a spec document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecFormat {
    #[default]
    Yaml,
    Json,
    Xml,
}

/// Kind of API contract carried by a spec document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecType {
    #[default]
    OpenApi,
    Odata,
}

/// Credentials and request decoration used to call a target API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    pub credential: Credential,

    pub additional_headers: Option<ParamValues>,

    pub additional_query_params: Option<ParamValues>,
}

/// Credential data of an [`Auth`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Credential {
    #[serde(rename_all = "camelCase")]
    Basic { username: String, password: String },
    #[serde(rename_all = "camelCase")]
    Oauth {
        client_id: String,
        client_secret: String,
        url: String,
    },
}

/// Auth assigned to a specific runtime
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeAuth {
    pub runtime_id: String,
    pub auth: Option<Auth>,
}

/// Versioning metadata of an API Definition
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub value: String,
    pub deprecated: Option<bool>,
    pub deprecated_since: Option<String>,
    pub for_removal: Option<bool>,
}

/// Instruction for fetching a spec document from a remote location
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub url: String,
    pub auth: Option<Auth>,
    pub mode: FetchMode,
    pub filter: Option<String>,
}

/// Granularity of a fetch request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchMode {
    #[default]
    Single,
    Package,
    Index,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_definition_serialization() {
        let definition = ApiDefinition {
            id: "c9f2e1d0".to_string(),
            application_id: "app-1".to_string(),
            name: "orders".to_string(),
            target_url: "https://orders.example.com".to_string(),
            spec: Some(ApiSpec {
                data: Some("openapi: 3.0.0".to_string()),
                format: SpecFormat::Yaml,
                spec_type: SpecType::OpenApi,
                fetch_request: None,
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&definition).unwrap();
        assert!(json.contains("applicationId"));
        assert!(json.contains("targetUrl"));
        assert!(json.contains("\"format\":\"YAML\""));
        assert!(json.contains("\"type\":\"OPEN_API\""));
    }

    #[test]
    fn test_api_definition_roundtrip() {
        let definition = ApiDefinition {
            id: "c9f2e1d0".to_string(),
            application_id: "app-1".to_string(),
            name: "orders".to_string(),
            description: Some("order management".to_string()),
            target_url: "https://orders.example.com".to_string(),
            default_auth: Some(Auth {
                credential: Credential::Basic {
                    username: "svc".to_string(),
                    password: "secret".to_string(),
                },
                additional_headers: None,
                additional_query_params: None,
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&definition).unwrap();
        let back: ApiDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(definition, back);
    }

    #[test]
    fn test_auths_default_to_empty() {
        let json = r#"{"id":"1","applicationId":"a","name":"n","targetUrl":"u"}"#;
        let definition: ApiDefinition = serde_json::from_str(json).unwrap();
        assert!(definition.auths.is_empty());
        assert!(definition.spec.is_none());
    }

    #[test]
    fn test_fetch_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&FetchMode::Package).unwrap(),
            "\"PACKAGE\""
        );
        assert_eq!(
            serde_json::from_str::<FetchMode>("\"INDEX\"").unwrap(),
            FetchMode::Index
        );
    }
}
