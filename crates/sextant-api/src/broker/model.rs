//! Service-broker API models
//!
//! Response bodies for the Open Service Broker surface. Only the error
//! payload is needed today: binding retrieval is a stub that always answers
//! "not supported".

use serde::{Deserialize, Serialize};

/// Error payload returned by broker endpoints
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerErrorResponse {
    /// Machine-readable error identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable description surfaced to the platform operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BrokerErrorResponse {
    /// Payload for operations the broker does not implement
    pub fn not_supported() -> Self {
        Self {
            error: Some("NotSupported".to_string()),
            description: Some("not supported".to_string()),
        }
    }
}
