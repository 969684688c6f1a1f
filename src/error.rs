//! # Errores del Servidor
//! src/error.rs

use thiserror::Error;

/// Errores que pueden ocurrir en el servidor
#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo abrir el puerto
    #[error("no se pudo escuchar en {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Error de E/S en el socket o en el sistema de archivos
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// Falló el encoder gzip
    #[error("error de compresión: {0}")]
    Compression(#[source] std::io::Error),

    /// La configuración no pasó la validación
    #[error("configuración inválida: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
