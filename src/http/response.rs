//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas HTTP/1.1 y convertirlas a bytes.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use scratch_http::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("hello");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\nhello"));
//! ```

use super::StatusCode;

/// Body fijo de las respuestas 404
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Body fijo de las respuestas 400
pub const BAD_REQUEST_BODY: &str = "400 bad request";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers en orden de inserción, así dos respuestas iguales
    /// se serializan a los mismos bytes
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe en su posición original.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing_value)) => *existing_value = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el cuerpo desde un string
    ///
    /// `Content-Length` se calcula en bytes, no en caracteres.
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo desde bytes (archivos, gzip, etc.)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let length = self.body.len().to_string();
        self.add_header("Content-Length", &length);
        self
    }

    /// Respuesta 200 `text/plain`
    pub fn text(body: &str) -> Self {
        Self::text_bytes(body.as_bytes().to_vec())
    }

    /// Respuesta 200 `text/plain` desde bytes crudos
    pub fn text_bytes(body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body_bytes(body)
    }

    /// Respuesta 200 `application/octet-stream`
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(body)
    }

    /// Respuesta de error en texto plano
    ///
    /// ```
    /// use scratch_http::http::{Response, StatusCode};
    ///
    /// let response = Response::error(StatusCode::NotFound, "404 page not found");
    /// assert_eq!(response.body(), b"404 page not found");
    /// ```
    pub fn error(status: StatusCode, message: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(message)
    }

    /// El 404 estándar del servidor
    pub fn not_found() -> Self {
        Self::error(StatusCode::NotFound, NOT_FOUND_BODY)
    }

    /// El 400 para paths con segmentos faltantes
    pub fn bad_request() -> Self {
        Self::error(StatusCode::BadRequest, BAD_REQUEST_BODY)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Busca un header por nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene los headers en orden
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header_overwrites_in_place() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("X-Custom", "value")
            .with_header("Content-Type", "application/octet-stream");

        assert_eq!(response.headers().len(), 2);
        assert_eq!(response.headers()[0].0, "Content-Type");
        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.header("X-Custom"), Some("value"));
    }

    #[test]
    fn test_with_body() {
        let response = Response::new(StatusCode::Ok).with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.header("Content-Length"), Some("11"));
    }

    #[test]
    fn test_content_length_counts_bytes() {
        // "ñandú" son 5 caracteres pero 7 bytes
        let response = Response::text("ñandú");

        assert_eq!(response.header("Content-Length"), Some("7"));
    }

    #[test]
    fn test_to_bytes_exact() {
        let response = Response::text("Test");
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert_eq!(
            text,
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\nTest"
        );
    }

    #[test]
    fn test_not_found() {
        let response = Response::not_found();
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Length: 18\r\n"));
        assert!(text.ends_with("\r\n\r\n404 page not found"));
    }

    #[test]
    fn test_empty_body_response() {
        let response = Response::new(StatusCode::Ok).with_body("");
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.contains("Content-Length: 0\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_octet_stream_binary() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::octet_stream(binary_data.clone());

        assert_eq!(response.body(), &binary_data[..]);
        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.header("Content-Length"), Some("4"));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let build = || {
            Response::new(StatusCode::Ok)
                .with_header("Content-Encoding", "gzip")
                .with_header("Content-Type", "text/plain")
                .with_body("same")
        };

        assert_eq!(build().to_bytes(), build().to_bytes());
    }
}
