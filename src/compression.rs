//! # Compresión gzip
//! src/compression.rs

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Codificación soportada en `Accept-Encoding`
pub const GZIP: &str = "gzip";

/// Indica si un valor de `Accept-Encoding` acepta gzip
///
/// El valor es una lista separada por comas, y cada entrada puede
/// traer parámetros (`gzip;q=0.8`).
pub fn accepts_gzip(accept_encoding: &str) -> bool {
    accept_encoding
        .split(',')
        .map(|entry| entry.split(';').next().unwrap_or("").trim())
        .any(|encoding| encoding.eq_ignore_ascii_case(GZIP))
}

/// Comprime `data` con gzip en memoria
pub fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
