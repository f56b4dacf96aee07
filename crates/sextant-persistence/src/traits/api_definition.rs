//! API Definition persistence trait
//!
//! Defines the interface for API Definition row storage. Rows are keyed by
//! `(tenant_id, id)`; backends perform no transformation of the values they
//! are given.

use async_trait::async_trait;

use crate::entity::api_definition;

/// Storage operations for API Definition rows
#[async_trait]
pub trait ApiDefinitionPersistence: Send + Sync {
    /// Find a row by its tenant-scoped identity
    async fn find_by_id(
        &self,
        tenant_id: &str,
        id: &str,
    ) -> anyhow::Result<Option<api_definition::Model>>;

    /// List all rows belonging to an application
    async fn list_for_application(
        &self,
        tenant_id: &str,
        application_id: &str,
    ) -> anyhow::Result<Vec<api_definition::Model>>;

    /// Insert or replace a row
    async fn save(&self, row: api_definition::Model) -> anyhow::Result<()>;

    /// Delete a row, returning whether it existed
    async fn delete(&self, tenant_id: &str, id: &str) -> anyhow::Result<bool>;
}
