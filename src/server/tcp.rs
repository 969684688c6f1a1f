//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Cada conexión aceptada se procesa en su propio thread. No hay límite de
//! threads ni cola de admisión: bajo carga crece un thread por conexión.
//!
//! Por conexión: una sola lectura de hasta `buffer_size` bytes, parseo,
//! routing, escritura de la respuesta y cierre. Lo que no entre en el
//! buffer se descarta sin avisar.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::files::FileStore;
use crate::http::Request;
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.1, un thread por conexión
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let files = FileStore::new(config.files_dir.clone());
        let router = Router::with_default_routes(files);

        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Abre el puerto sin empezar a aceptar conexiones
    ///
    /// Retorna la dirección real (útil con puerto 0).
    pub fn bind(&mut self) -> Result<SocketAddr> {
        let listener = self.open_listener()?;
        let local_addr = listener.local_addr()?;
        self.listener = Some(listener);
        Ok(local_addr)
    }

    fn open_listener(&self) -> Result<TcpListener> {
        let address = self.config.address();
        TcpListener::bind(&address).map_err(|source| ServerError::Bind { address, source })
    }

    /// Acepta conexiones para siempre
    ///
    /// Un error al aceptar se registra y el loop sigue.
    pub fn run(&mut self) -> Result<()> {
        let listener = match self.listener.take() {
            Some(listener) => listener,
            None => self.open_listener()?,
        };

        tracing::info!(
            address = %listener.local_addr()?,
            files_dir = %self.config.files_dir.display(),
            "servidor escuchando"
        );

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let buffer_size = self.config.buffer_size;

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    tracing::debug!(peer = %peer_addr, "nueva conexión");

                    let spawned = thread::Builder::new()
                        .name("connection".to_string())
                        .spawn(move || {
                            if let Err(e) = Self::handle_connection(stream, &router, buffer_size) {
                                tracing::error!(peer = %peer_addr, error = %e, "error en la conexión");
                            }
                        });

                    if let Err(e) = spawned {
                        tracing::error!(error = %e, "no se pudo crear el thread");
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión: lee, enruta, responde
    ///
    /// El stream se cierra al salir (drop). Si el peer no manda nada no
    /// se escribe respuesta.
    pub fn handle_connection<S: Read + Write>(
        mut stream: S,
        router: &Router,
        buffer_size: usize,
    ) -> io::Result<()> {
        let start = Instant::now();

        let mut buffer = vec![0u8; buffer_size];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            tracing::debug!("conexión cerrada sin datos");
            return Ok(());
        }

        let request = Request::parse(&buffer[..bytes_read]);
        tracing::debug!(
            method = request.method(),
            path = request.path(),
            bytes = bytes_read,
            "request recibido"
        );

        let response = router.route(&request);
        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        tracing::info!(
            method = request.method(),
            path = request.path(),
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "respuesta enviada"
        );

        Ok(())
    }
}
