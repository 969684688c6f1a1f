//! # Módulo HTTP
//!
//! Codec de cable del servidor, escrito a mano sin librerías HTTP:
//!
//! - Parsing de requests HTTP/1.1 desde un único buffer
//! - Construcción y serialización de responses
//! - Códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! <body>
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola
//! ```
//!
//! No hay conexiones persistentes ni chunked transfer encoding: cada
//! conexión lleva un request y una respuesta.

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
