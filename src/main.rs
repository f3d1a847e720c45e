//! # MinHTTP - Entry Point
//! src/main.rs
//!
//! Levanta el servidor con el router de ejemplo.

use minhttp::commands::example_router;
use minhttp::config::Config;
use minhttp::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minhttp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Crear configuración (CLI + variables de entorno)
    let config = Config::new();
    config.log_summary();

    let server = match Server::bind(config, example_router()) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "no se pudo iniciar el servidor");
            std::process::exit(1);
        }
    };

    // Bloquea el thread hasta que el servidor se detenga
    if let Err(e) = server.serve() {
        tracing::error!(error = %e, "error fatal");
        std::process::exit(1);
    }
}
