//! `SeaORM` Entity for api_definition table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "api_definition")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tenant_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub app_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub group_name: Option<String>,
    pub target_url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub spec_data: Option<String>,
    pub spec_format: Option<String>,
    pub spec_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub default_auth: Option<String>,
    pub version: Option<String>,
    pub version_deprecated: Option<bool>,
    pub version_deprecated_since: Option<String>,
    pub version_for_removal: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Flattened version columns of an `api_definition` row, grouped so the
/// version converter can fill and read them without seeing the whole row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VersionColumns {
    pub version: Option<String>,
    pub version_deprecated: Option<bool>,
    pub version_deprecated_since: Option<String>,
    pub version_for_removal: Option<bool>,
}

impl Model {
    /// Version column group of this row
    pub fn version_columns(&self) -> VersionColumns {
        VersionColumns {
            version: self.version.clone(),
            version_deprecated: self.version_deprecated,
            version_deprecated_since: self.version_deprecated_since.clone(),
            version_for_removal: self.version_for_removal,
        }
    }

    /// True when any spec column of this row holds a value
    pub fn has_spec(&self) -> bool {
        self.spec_data.is_some() || self.spec_format.is_some() || self.spec_type.is_some()
    }
}
