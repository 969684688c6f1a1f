//! # Scratch HTTP
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo sobre TCP, con el protocolo parseado a mano.
//! Cada conexión se lee una vez, se atiende una vez y se cierra.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → Request::parse → Router → handler → Response::to_bytes → socket
//! ```
//!
//! - `http`: Codec de cable (parseo del request, serialización de la respuesta)
//! - `router`: Tabla de rutas evaluada en orden de prioridad
//! - `handlers`: Comportamientos de cada ruta
//! - `files`: Lectura/escritura de `<nombre>.txt` para `/files/`
//! - `compression`: gzip para `Accept-Encoding`
//! - `server`: Listener TCP y manejo de conexiones
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use scratch_http::config::Config;
//! use scratch_http::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod compression;
pub mod config;
pub mod error;
pub mod files;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
