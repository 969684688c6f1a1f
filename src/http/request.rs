//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser HTTP/1.1 escrito a mano sobre el buffer que se leyó del socket.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/report HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path HTTP/1.1`, separados por un espacio
//! 2. **Headers**: Pares `Name: Value` hasta la primera línea vacía
//! 3. **Body**: Todo lo que sigue a `\r\n\r\n`, recortado a `Content-Length`
//!
//! El parser nunca falla: un request malformado produce campos vacíos.
//! Tampoco valida el método ni la versión, y el path se guarda tal cual
//! (la query string no se separa).

use std::collections::HashMap;

/// Header que define cuántos bytes del body se toman
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Header que pide una codificación de la respuesta
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// Header reflejado por `/user-agent`
pub const USER_AGENT: &str = "User-Agent";

/// Separador entre la cabecera y el body
const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Representa un request HTTP parseado
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Método HTTP sin validar (ej: "GET", "POST")
    method: String,

    /// Request-target crudo (ej: "/echo/hola?x=1")
    path: String,

    /// Versión HTTP, se lee pero no se valida
    version: String,

    /// Headers HTTP; los nombres se comparan respetando mayúsculas
    headers: HashMap<String, String>,

    /// Body recortado a `Content-Length`
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request desde los bytes leídos del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use scratch_http::http::Request;
    ///
    /// let raw = b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcdef";
    /// let request = Request::parse(raw);
    ///
    /// assert_eq!(request.method(), "POST");
    /// assert_eq!(request.body(), b"abc");
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        let (head, rest) = match find_subsequence(buffer, HEAD_TERMINATOR) {
            Some(pos) => (&buffer[..pos], &buffer[pos + HEAD_TERMINATOR.len()..]),
            None => (buffer, &buffer[buffer.len()..]),
        };

        let head = String::from_utf8_lossy(head);
        let mut lines = head.split("\r\n");

        // 1. Request line
        let (method, path, version) = Self::parse_request_line(lines.next().unwrap_or(""));

        // 2. Headers
        let headers = Self::parse_headers(lines);

        // 3. Body, nunca más largo de lo que realmente llegó
        let content_length = headers
            .get(CONTENT_LENGTH)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let body = rest[..content_length.min(rest.len())].to_vec();

        Request {
            method,
            path,
            version,
            headers,
            body,
        }
    }

    /// Formato: `GET /path HTTP/1.1`. Los tokens que falten quedan vacíos.
    fn parse_request_line(line: &str) -> (String, String, String) {
        let mut parts = line.split(' ');
        let mut next = || parts.next().unwrap_or("").to_string();

        let method = next();
        let path = next();
        let version = next();
        (method, path, version)
    }

    /// Cada header se corta en la primera aparición de `": "`.
    /// Una línea sin separador queda como nombre con valor vacío.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.is_empty() {
                continue;
            }

            let (name, value) = line.split_once(": ").unwrap_or((line, ""));
            headers.insert(name.to_string(), value.to_string());
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Compara el método sin distinguir mayúsculas
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el segmento `index` del path separado por `/`
    ///
    /// El segmento 0 es la cadena vacía antes de la primera barra, así que
    /// en `/echo/hola` el segmento 2 es `hola`. Un segmento vacío cuenta
    /// como ausente.
    ///
    /// ```
    /// use scratch_http::http::Request;
    ///
    /// let request = Request::parse(b"GET /echo/hola HTTP/1.1\r\n\r\n");
    /// assert_eq!(request.path_segment(2), Some("hola"));
    /// assert_eq!(request.path_segment(3), None);
    /// ```
    pub fn path_segment(&self, index: usize) -> Option<&str> {
        self.path
            .split('/')
            .nth(index)
            .filter(|segment| !segment.is_empty())
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (sensible a mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
