//! # Scratch HTTP - Entry Point
//! src/main.rs
//!
//! Parsea la configuración (CLI + entorno), inicializa el logging y
//! arranca el servidor. El nivel de log se controla con `RUST_LOG`.

use scratch_http::config::Config;
use scratch_http::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scratch_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new();

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "configuración inválida");
        std::process::exit(1);
    }

    tracing::info!(
        address = %config.address(),
        files_dir = %config.files_dir.display(),
        buffer_size = config.buffer_size,
        "configuración cargada"
    );

    let mut server = Server::new(config);

    // Bloquea el thread principal
    if let Err(e) = server.run() {
        tracing::error!(error = %e, "error fatal");
        std::process::exit(1);
    }
}
