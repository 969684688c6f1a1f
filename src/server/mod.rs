//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes, un thread por conexión
//! 3. Lee un único buffer y parsea el request
//! 4. Envía la respuesta y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
