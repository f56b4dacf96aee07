//! Main entry point for the Sextant server.
//!
//! Parses configuration, installs logging, and starts the HTTP server with
//! the service-broker surface.

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::Parser;
use tracing::info;

use sextant_server::api::broker;
use sextant_server::model::Configuration;
use sextant_server::startup;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let configuration = Configuration::parse();
    let _logging_guard = startup::init_logging(configuration.log_dir.as_deref());

    info!(
        "starting sextant server on {}:{}",
        configuration.address, configuration.port
    );

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .service(broker::broker_routes())
    })
    .bind((configuration.address.as_str(), configuration.port))?
    .run()
    .await
}
