//! # Handlers de Rutas
//! src/handlers/mod.rs
//!
//! Comportamientos fijos del servidor:
//! - `/`: Devuelve el body del request
//! - `/echo/{texto}`: Devuelve el segundo segmento del path
//! - `/user-agent`: Refleja el header `User-Agent`
//! - `/files/{nombre}` (GET): Lee `{nombre}.txt`
//! - `/files/{nombre}` (POST): Escribe `{nombre}.txt`, con gzip opcional
//! - Cualquier otra cosa: 404

use crate::compression;
use crate::error::{Result, ServerError};
use crate::files::FileStore;
use crate::http::request::{ACCEPT_ENCODING, USER_AGENT};
use crate::http::{Request, Response};

/// Handler para `/`
///
/// Devuelve el body recibido tal cual, como `text/plain`.
pub fn root_handler(req: &Request, _files: &FileStore) -> Result<Response> {
    Ok(Response::text_bytes(req.body().to_vec()))
}

/// Handler para `/echo/{texto}`
///
/// `/echo/hola` → `hola`. Sin segundo segmento responde 400.
pub fn echo_handler(req: &Request, _files: &FileStore) -> Result<Response> {
    match req.path_segment(2) {
        Some(text) => Ok(Response::text(text)),
        None => Ok(Response::bad_request()),
    }
}

/// Handler para `/user-agent`
///
/// Sin header responde un body vacío.
pub fn user_agent_handler(req: &Request, _files: &FileStore) -> Result<Response> {
    Ok(Response::text(req.header(USER_AGENT).unwrap_or("")))
}

/// Handler para `GET /files/{nombre}`
///
/// # Respuestas
/// - 200 `application/octet-stream` con el contenido
/// - 404 si `{nombre}.txt` no existe
/// - 400 si falta el nombre
pub fn file_get_handler(req: &Request, files: &FileStore) -> Result<Response> {
    let name = match file_name(req) {
        Some(name) => name,
        None => return Ok(Response::bad_request()),
    };

    match files.read(name)? {
        Some(content) => Ok(Response::octet_stream(content)),
        None => {
            tracing::debug!(file = %files.path_for(name).display(), "archivo no encontrado");
            Ok(Response::not_found())
        }
    }
}

/// Handler para `POST /files/{nombre}`
///
/// Guarda los `Content-Length` bytes del body en `{nombre}.txt`
/// (creando o truncando). Si `Accept-Encoding` acepta gzip, la
/// respuesta lleva el payload subido comprimido.
pub fn file_post_handler(req: &Request, files: &FileStore) -> Result<Response> {
    let name = match file_name(req) {
        Some(name) => name,
        None => return Ok(Response::bad_request()),
    };

    files.write(name, req.body())?;
    tracing::info!(
        file = %files.path_for(name).display(),
        bytes = req.body().len(),
        "archivo escrito"
    );

    let wants_gzip = req
        .header(ACCEPT_ENCODING)
        .is_some_and(compression::accepts_gzip);

    if !wants_gzip {
        return Ok(Response::text(""));
    }

    let encoded = compression::gzip(req.body()).map_err(ServerError::Compression)?;
    Ok(Response::text_bytes(encoded).with_header("Content-Encoding", compression::GZIP))
}

/// Respuesta para cualquier ruta no registrada
pub fn not_found_handler(_req: &Request, _files: &FileStore) -> Result<Response> {
    Ok(Response::not_found())
}

fn file_name(req: &Request) -> Option<&str> {
    req.path_segment(2).filter(|name| FileStore::is_valid_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_root_echoes_body() {
        let (_dir, files) = store();
        let req = Request::parse(b"POST / HTTP/1.1\r\nContent-Length: 4\r\n\r\nping");
        let response = root_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("4"));
        assert_eq!(response.body(), b"ping");
    }

    #[test]
    fn test_root_without_body() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET / HTTP/1.1\r\n\r\n");
        let response = root_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_echo() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /echo/hello HTTP/1.1\r\n\r\n");
        let response = echo_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_echo_takes_only_second_segment() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /echo/a/b HTTP/1.1\r\n\r\n");
        let response = echo_handler(&req, &files).unwrap();

        assert_eq!(response.body(), b"a");
    }

    #[test]
    fn test_echo_missing_segment_is_bad_request() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /echo/ HTTP/1.1\r\n\r\n");
        let response = echo_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert_eq!(response.body(), b"400 bad request");
    }

    #[test]
    fn test_user_agent() {
        let (_dir, files) = store();
        let req = Request::parse(
            b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\nUser-Agent: foobar/1.2.3\r\n\r\n",
        );
        let response = user_agent_handler(&req, &files).unwrap();

        assert_eq!(response.body(), b"foobar/1.2.3");
        assert_eq!(response.header("Content-Length"), Some("12"));
    }

    #[test]
    fn test_user_agent_missing_header() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /user-agent HTTP/1.1\r\n\r\n");
        let response = user_agent_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("0"));
    }

    #[test]
    fn test_file_get_existing() {
        let (_dir, files) = store();
        files.write("report", b"hello world").unwrap();

        let req = Request::parse(b"GET /files/report HTTP/1.1\r\n\r\n");
        let response = file_get_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.header("Content-Length"), Some("11"));
        assert_eq!(response.body(), b"hello world");
    }

    #[test]
    fn test_file_get_missing_is_not_found() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /files/missing HTTP/1.1\r\n\r\n");
        let response = file_get_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"404 page not found");
    }

    #[test]
    fn test_file_get_without_name() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /files/ HTTP/1.1\r\n\r\n");
        let response = file_get_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_file_post_writes_content_length_bytes() {
        let (dir, files) = store();
        let req = Request::parse(
            b"POST /files/upload HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello there",
        );
        let response = file_post_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(std::fs::read(dir.path().join("upload.txt")).unwrap(), b"hello");
    }

    #[test]
    fn test_file_post_gzip_compresses_uploaded_body() {
        let (_dir, files) = store();
        let req = Request::parse(
            b"POST /files/zipped HTTP/1.1\r\nContent-Length: 5\r\nAccept-Encoding: gzip\r\n\r\nhello",
        );
        let response = file_post_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
        assert_eq!(
            response.header("Content-Length"),
            Some(response.body().len().to_string().as_str())
        );

        let mut decoded = Vec::new();
        GzDecoder::new(response.body()).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"hello");
        assert_eq!(files.read("zipped").unwrap(), Some(b"hello".to_vec()));
    }

    #[test]
    fn test_file_post_unsupported_encoding_is_plain() {
        let (_dir, files) = store();
        let req = Request::parse(
            b"POST /files/plain HTTP/1.1\r\nContent-Length: 2\r\nAccept-Encoding: br\r\n\r\nhi",
        );
        let response = file_post_handler(&req, &files).unwrap();

        assert_eq!(response.header("Content-Encoding"), None);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_not_found_handler() {
        let (_dir, files) = store();
        let req = Request::parse(b"GET /nope HTTP/1.1\r\n\r\n");
        let response = not_found_handler(&req, &files).unwrap();

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"404 page not found");
    }
}
