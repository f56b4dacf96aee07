//! Persistence trait abstractions
//!
//! Capability traits implemented by storage backends. The converter core and
//! the service layer depend only on these interfaces.

pub mod api_definition;

pub use api_definition::ApiDefinitionPersistence;
