//! Server configuration model

use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration of the Sextant server
#[derive(Parser, Clone, Debug)]
#[command(name = "sextant-server", about = "Sextant application-registry server")]
pub struct Configuration {
    /// Address the HTTP server binds to
    #[arg(long, env = "SEXTANT_ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// Port the HTTP server binds to
    #[arg(long, env = "SEXTANT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory for rolling log files; stdout-only when unset
    #[arg(long, env = "SEXTANT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
