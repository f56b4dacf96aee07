//! Error types for Sextant
//!
//! This module defines `SextantError`, the application-specific error enum.
//! Conversions between representations surface exactly two error kinds:
//! `Encoding` when a nested value object cannot be serialized into its
//! storage representation, and `Decoding` when a stored representation
//! cannot be parsed back. Everything else (absent optional fields, empty
//! nested objects) is not an error.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum SextantError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),
}

impl SextantError {
    /// True for errors raised while serializing into the storage shape
    pub fn is_encoding(&self) -> bool {
        matches!(self, SextantError::Encoding(_))
    }

    /// True for errors raised while parsing a stored representation
    pub fn is_decoding(&self) -> bool {
        matches!(self, SextantError::Decoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sextant_error_display() {
        let err = SextantError::Encoding("default auth is not serializable".to_string());
        assert_eq!(
            format!("{}", err),
            "encoding error: default auth is not serializable"
        );

        let err = SextantError::Decoding("stored auth blob is malformed".to_string());
        assert_eq!(
            format!("{}", err),
            "decoding error: stored auth blob is malformed"
        );
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(SextantError::Encoding(String::new()).is_encoding());
        assert!(!SextantError::Encoding(String::new()).is_decoding());
        assert!(SextantError::Decoding(String::new()).is_decoding());
        assert!(!SextantError::Decoding(String::new()).is_encoding());
    }
}
