//! API Definition converter
//!
//! The orchestrating converter between the three representations of an API
//! Definition: wire DTO, domain model, and storage row. Nested value objects
//! go through the injected sub-converters; this type never encodes their
//! internal shape.
//!
//! All operations are pure and synchronous. The only error conditions are
//! auth encoding on the way into storage and blob/discriminator decoding on
//! the way out; nil propagation and absent optional fields never raise.

use std::sync::Arc;

use sextant_api::catalog::model as graphql;
use sextant_common::SextantError;
use sextant_persistence::entity::api_definition as entity;
use sextant_persistence::sql::{nullable_string, string_from_nullable};

use crate::model::{ApiDefinition, ApiDefinitionInput, ApiSpec, ApiSpecInput};

use super::{AuthConverter, FetchRequestConverter, VersionConverter};

pub struct ApiDefinitionConverter {
    auth: Arc<dyn AuthConverter>,
    fetch_request: Arc<dyn FetchRequestConverter>,
    version: Arc<dyn VersionConverter>,
}

impl ApiDefinitionConverter {
    pub fn new(
        auth: Arc<dyn AuthConverter>,
        fetch_request: Arc<dyn FetchRequestConverter>,
        version: Arc<dyn VersionConverter>,
    ) -> Self {
        Self {
            auth,
            fetch_request,
            version,
        }
    }

    /// Map a domain model to its wire representation; `None` in, `None` out.
    /// The fetch-request sub-converter only runs when the model carries a
    /// spec.
    pub fn to_graphql(&self, model: Option<&ApiDefinition>) -> Option<graphql::ApiDefinition> {
        let model = model?;
        Some(graphql::ApiDefinition {
            id: model.id.clone(),
            application_id: model.application_id.clone(),
            name: model.name.clone(),
            description: model.description.clone(),
            group: model.group.clone(),
            target_url: model.target_url.clone(),
            spec: model.spec.as_ref().map(|spec| self.spec_to_graphql(spec)),
            default_auth: self.auth.to_graphql(model.default_auth.as_ref()),
            version: self.version.to_graphql(model.version.as_ref()),
            auths: model
                .auths
                .iter()
                .map(|runtime_auth| graphql::RuntimeAuth {
                    runtime_id: runtime_auth.runtime_id.clone(),
                    auth: self.auth.to_graphql(runtime_auth.auth.as_ref()),
                })
                .collect(),
        })
    }

    /// Map a wire input to the domain input; `None` in, `None` out
    pub fn input_from_graphql(
        &self,
        input: Option<&graphql::ApiDefinitionInput>,
    ) -> Option<ApiDefinitionInput> {
        let input = input?;
        Some(ApiDefinitionInput {
            name: input.name.clone(),
            description: input.description.clone(),
            target_url: input.target_url.clone(),
            group: input.group.clone(),
            spec: input
                .spec
                .as_ref()
                .map(|spec| self.spec_input_from_graphql(spec)),
            version: self.version.input_from_graphql(input.version.as_ref()),
            default_auth: self.auth.input_from_graphql(input.default_auth.as_ref()),
        })
    }

    /// Lift [`Self::to_graphql`] over an ordered collection. `None` elements
    /// are skipped, so the output is shorter than the input whenever the
    /// input contains them; an empty result is reported as `None`, not an
    /// empty vec. Downstream callers rely on the shortened-list semantics.
    pub fn multiple_to_graphql(
        &self,
        models: &[Option<ApiDefinition>],
    ) -> Option<Vec<graphql::ApiDefinition>> {
        let converted: Vec<_> = models
            .iter()
            .filter_map(|model| self.to_graphql(model.as_ref()))
            .collect();
        if converted.is_empty() {
            None
        } else {
            Some(converted)
        }
    }

    /// Lift [`Self::input_from_graphql`] over an ordered collection, with
    /// the same skip-`None` policy as [`Self::multiple_to_graphql`]
    pub fn multiple_input_from_graphql(
        &self,
        inputs: &[Option<graphql::ApiDefinitionInput>],
    ) -> Option<Vec<ApiDefinitionInput>> {
        let converted: Vec<_> = inputs
            .iter()
            .filter_map(|input| self.input_from_graphql(input.as_ref()))
            .collect();
        if converted.is_empty() {
            None
        } else {
            Some(converted)
        }
    }

    /// Flatten a domain model into a storage row. Fails only when the
    /// default auth cannot be encoded. Spec fetch requests and runtime auths
    /// are not column-backed on this row and are left to their own
    /// repositories.
    pub fn to_entity(&self, model: &ApiDefinition) -> Result<entity::Model, SextantError> {
        let default_auth = self.auth.encode(model.default_auth.as_ref())?;
        let version = self.version.to_entity(model.version.as_ref());
        let (spec_data, spec_format, spec_type) = match &model.spec {
            None => (None, None, None),
            Some(spec) => (
                nullable_string(spec.data.as_deref()),
                nullable_string(Some(spec.format.as_str())),
                nullable_string(Some(spec.spec_type.as_str())),
            ),
        };

        Ok(entity::Model {
            tenant_id: model.tenant_id.clone(),
            id: model.id.clone(),
            app_id: model.application_id.clone(),
            name: model.name.clone(),
            description: nullable_string(model.description.as_deref()),
            group_name: nullable_string(model.group.as_deref()),
            target_url: model.target_url.clone(),
            spec_data,
            spec_format,
            spec_type,
            default_auth,
            version: version.version,
            version_deprecated: version.version_deprecated,
            version_deprecated_since: version.version_deprecated_since,
            version_for_removal: version.version_for_removal,
        })
    }

    /// Rebuild a domain model from a storage row. Fails when the stored auth
    /// blob or a spec discriminator column cannot be parsed back.
    pub fn from_entity(&self, row: &entity::Model) -> Result<ApiDefinition, SextantError> {
        let default_auth = self.auth.decode(row.default_auth.as_deref())?;
        let spec = if row.has_spec() {
            Some(self.spec_from_entity(row)?)
        } else {
            None
        };

        Ok(ApiDefinition {
            id: row.id.clone(),
            tenant_id: row.tenant_id.clone(),
            application_id: row.app_id.clone(),
            name: row.name.clone(),
            description: string_from_nullable(row.description.as_ref()),
            group: string_from_nullable(row.group_name.as_ref()),
            target_url: row.target_url.clone(),
            spec,
            default_auth,
            version: self.version.from_entity(&row.version_columns()),
            auths: Vec::new(),
        })
    }

    fn spec_to_graphql(&self, spec: &ApiSpec) -> graphql::ApiSpec {
        graphql::ApiSpec {
            data: spec.data.clone(),
            format: spec.format.into(),
            spec_type: spec.spec_type.into(),
            fetch_request: self.fetch_request.to_graphql(spec.fetch_request.as_ref()),
        }
    }

    fn spec_input_from_graphql(&self, spec: &graphql::ApiSpecInput) -> ApiSpecInput {
        ApiSpecInput {
            data: spec.data.clone(),
            format: spec.format.into(),
            spec_type: spec.spec_type.into(),
            fetch_request: self
                .fetch_request
                .input_from_graphql(spec.fetch_request.as_ref()),
        }
    }

    fn spec_from_entity(&self, row: &entity::Model) -> Result<ApiSpec, SextantError> {
        let format = row
            .spec_format
            .as_deref()
            .ok_or_else(|| {
                SextantError::Decoding("spec format column is NULL for a stored spec".to_string())
            })?
            .parse()
            .map_err(SextantError::Decoding)?;
        let spec_type = row
            .spec_type
            .as_deref()
            .ok_or_else(|| {
                SextantError::Decoding("spec type column is NULL for a stored spec".to_string())
            })?
            .parse()
            .map_err(SextantError::Decoding)?;

        Ok(ApiSpec {
            data: string_from_nullable(row.spec_data.as_ref()),
            format,
            spec_type,
            fetch_request: None,
        })
    }
}
