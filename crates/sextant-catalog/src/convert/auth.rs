//! Auth sub-converter
//!
//! Field-by-field mapping between the domain auth and its wire
//! representation, plus the JSON blob codec used by the storage layer. The
//! blob format is private to this converter; the orchestrator only sees the
//! encode/decode capabilities.

use sextant_api::catalog::model as graphql;
use sextant_common::SextantError;

use crate::model::{Auth, BasicCredential, Credential, OauthCredential};

use super::AuthConverter;

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAuthConverter;

impl DefaultAuthConverter {
    pub fn new() -> Self {
        Self
    }
}

impl AuthConverter for DefaultAuthConverter {
    fn to_graphql(&self, auth: Option<&Auth>) -> Option<graphql::Auth> {
        let auth = auth?;
        Some(graphql::Auth {
            credential: match &auth.credential {
                Credential::Basic(basic) => graphql::Credential::Basic {
                    username: basic.username.clone(),
                    password: basic.password.clone(),
                },
                Credential::Oauth(oauth) => graphql::Credential::Oauth {
                    client_id: oauth.client_id.clone(),
                    client_secret: oauth.client_secret.clone(),
                    url: oauth.url.clone(),
                },
            },
            additional_headers: auth.additional_headers.clone(),
            additional_query_params: auth.additional_query_params.clone(),
        })
    }

    fn input_from_graphql(&self, input: Option<&graphql::Auth>) -> Option<Auth> {
        let input = input?;
        Some(Auth {
            credential: match &input.credential {
                graphql::Credential::Basic { username, password } => {
                    Credential::Basic(BasicCredential {
                        username: username.clone(),
                        password: password.clone(),
                    })
                }
                graphql::Credential::Oauth {
                    client_id,
                    client_secret,
                    url,
                } => Credential::Oauth(OauthCredential {
                    client_id: client_id.clone(),
                    client_secret: client_secret.clone(),
                    url: url.clone(),
                }),
            },
            additional_headers: input.additional_headers.clone(),
            additional_query_params: input.additional_query_params.clone(),
        })
    }

    fn encode(&self, auth: Option<&Auth>) -> Result<Option<String>, SextantError> {
        auth.map(|auth| {
            serde_json::to_string(auth).map_err(|err| SextantError::Encoding(err.to_string()))
        })
        .transpose()
    }

    fn decode(&self, blob: Option<&str>) -> Result<Option<Auth>, SextantError> {
        blob.filter(|blob| !blob.is_empty())
            .map(|blob| {
                serde_json::from_str(blob).map_err(|err| SextantError::Decoding(err.to_string()))
            })
            .transpose()
    }
}
