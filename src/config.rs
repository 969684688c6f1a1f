//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración explícita que se pasa a `Server::new`, con soporte para
//! argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./scratch_http --port 4221 --files-dir /tmp/files
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 FILES_DIR=/tmp/files ./scratch_http
//! ```

use crate::error::{self, ServerError};
use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "scratch_http")]
#[command(about = "Servidor HTTP/1.1 minimo sobre TCP")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha (todas las interfaces por defecto)
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Directorio donde `/files/<nombre>` lee y escribe `<nombre>.txt`
    #[arg(long = "files-dir", default_value = "../temp", env = "FILES_DIR")]
    pub files_dir: PathBuf,

    /// Bytes que se leen de cada conexión (una sola lectura)
    #[arg(long = "buffer-size", default_value = "1024", env = "BUFFER_SIZE")]
    pub buffer_size: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use scratch_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// El puerto 0 se acepta: el sistema asigna uno libre.
    pub fn validate(&self) -> error::Result<()> {
        if self.buffer_size == 0 {
            return Err(ServerError::InvalidConfig(
                "buffer size must be >= 1".to_string(),
            ));
        }
        if self.files_dir.as_os_str().is_empty() {
            return Err(ServerError::InvalidConfig(
                "files dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            files_dir: PathBuf::from("../temp"),
            buffer_size: 1024,
        }
    }
}
