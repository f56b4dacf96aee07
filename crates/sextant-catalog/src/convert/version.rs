//! Version sub-converter
//!
//! Maps the version value object to its wire representation and to the
//! flattened columns of the storage row. A version is considered present in
//! storage when its value column holds a value; the optional flags alone
//! never resurrect a version.

use sextant_api::catalog::model as graphql;
use sextant_persistence::entity::api_definition::VersionColumns;
use sextant_persistence::sql::{
    bool_from_nullable, nullable_bool, nullable_string, string_from_nullable,
};

use crate::model::Version;

use super::VersionConverter;

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultVersionConverter;

impl DefaultVersionConverter {
    pub fn new() -> Self {
        Self
    }
}

impl VersionConverter for DefaultVersionConverter {
    fn to_graphql(&self, version: Option<&Version>) -> Option<graphql::Version> {
        let version = version?;
        Some(graphql::Version {
            value: version.value.clone(),
            deprecated: version.deprecated,
            deprecated_since: version.deprecated_since.clone(),
            for_removal: version.for_removal,
        })
    }

    fn input_from_graphql(&self, input: Option<&graphql::Version>) -> Option<Version> {
        let input = input?;
        Some(Version {
            value: input.value.clone(),
            deprecated: input.deprecated,
            deprecated_since: input.deprecated_since.clone(),
            for_removal: input.for_removal,
        })
    }

    fn to_entity(&self, version: Option<&Version>) -> VersionColumns {
        match version {
            None => VersionColumns::default(),
            Some(version) => VersionColumns {
                version: nullable_string(Some(version.value.as_str())),
                version_deprecated: nullable_bool(version.deprecated),
                version_deprecated_since: nullable_string(version.deprecated_since.as_deref()),
                version_for_removal: nullable_bool(version.for_removal),
            },
        }
    }

    fn from_entity(&self, columns: &VersionColumns) -> Option<Version> {
        let value = string_from_nullable(columns.version.as_ref())?;
        Some(Version {
            value,
            deprecated: bool_from_nullable(columns.version_deprecated),
            deprecated_since: string_from_nullable(columns.version_deprecated_since.as_ref()),
            for_removal: bool_from_nullable(columns.version_for_removal),
        })
    }
}
