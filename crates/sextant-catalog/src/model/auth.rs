//! Auth value object
//!
//! Credentials and request decoration used when calling a target API. The
//! whole object is serializable because the storage layer persists it as an
//! opaque JSON blob.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Multi-valued request parameters attached to an auth
pub type ParamValues = HashMap<String, Vec<String>>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    pub credential: Credential,
    pub additional_headers: Option<ParamValues>,
    pub additional_query_params: Option<ParamValues>,
}

/// Credential data of an [`Auth`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Credential {
    Basic(BasicCredential),
    Oauth(OauthCredential),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasicCredential {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OauthCredential {
    pub client_id: String,
    pub client_secret: String,
    pub url: String,
}
