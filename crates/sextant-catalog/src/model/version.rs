//! Version value object

/// Versioning metadata of an API Definition
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Version {
    /// Version value, e.g. "4.6"
    pub value: String,
    pub deprecated: Option<bool>,
    pub deprecated_since: Option<String>,
    pub for_removal: Option<bool>,
}
