//! SQL null-type helpers
//!
//! Conversions between the domain model's optional scalars and the nullable
//! columns of a persisted row. The storage layer only distinguishes "has
//! value" from "no value", so both directions are total and never fail.

/// Map an optional domain string to a nullable column value
pub fn nullable_string(text: Option<&str>) -> Option<String> {
    text.map(str::to_owned)
}

/// Map an optional domain bool to a nullable column value
pub fn nullable_bool(value: Option<bool>) -> Option<bool> {
    value
}

/// Map a nullable column value back to an optional domain string
pub fn string_from_nullable(column: Option<&String>) -> Option<String> {
    column.cloned()
}

/// Map a nullable column value back to an optional domain bool
pub fn bool_from_nullable(column: Option<bool>) -> Option<bool> {
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_string_present() {
        assert_eq!(nullable_string(Some("lorem")), Some("lorem".to_string()));
        // an empty string is a value, not NULL
        assert_eq!(nullable_string(Some("")), Some(String::new()));
    }

    #[test]
    fn test_nullable_string_absent() {
        assert_eq!(nullable_string(None), None);
    }

    #[test]
    fn test_string_from_nullable() {
        let column = Some("lorem".to_string());
        assert_eq!(string_from_nullable(column.as_ref()), column);
        assert_eq!(string_from_nullable(None), None);
    }

    #[test]
    fn test_nullable_bool_both_directions() {
        assert_eq!(nullable_bool(Some(false)), Some(false));
        assert_eq!(nullable_bool(None), None);
        assert_eq!(bool_from_nullable(Some(true)), Some(true));
        assert_eq!(bool_from_nullable(None), None);
    }
}
