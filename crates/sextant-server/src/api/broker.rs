//! Service-broker API handlers
//!
//! Binding lifecycle is not implemented: platforms polling for a binding get
//! a logged request and a "not supported" answer.

use actix_web::{HttpResponse, web};
use tracing::info;

use sextant_api::broker::model::BrokerErrorResponse;

/// GET /v2/service_instances/{instance_id}/service_bindings/{binding_id}
/// Fetch an existing service binding
pub async fn get_binding(path: web::Path<(String, String)>) -> HttpResponse {
    let (instance_id, binding_id) = path.into_inner();
    info!(
        "get binding requested, instance_id: {}, binding_id: {}",
        instance_id, binding_id
    );

    HttpResponse::NotImplemented().json(BrokerErrorResponse::not_supported())
}

/// Configure service-broker API routes
pub fn broker_routes() -> actix_web::Scope {
    web::scope("/v2").route(
        "/service_instances/{instance_id}/service_bindings/{binding_id}",
        web::get().to(get_binding),
    )
}
