//! Sextant Server - HTTP surface of the application registry
//!
//! Exposes the service-broker API surface and owns server startup concerns
//! (configuration, logging).

pub mod api; // API handlers and routes
pub mod model; // Configuration model
pub mod startup; // Application startup utilities
