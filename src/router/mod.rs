//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Tabla declarativa de rutas evaluada en orden de prioridad.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → (PathMatch, MethodMatch, Handler) → Response
//! ```
//!
//! Gana la primera entrada cuyo path y método coinciden. Si ninguna
//! coincide, la respuesta es 404. Cada request ejecuta como mucho un handler.

use crate::error::Result;
use crate::files::FileStore;
use crate::handlers;
use crate::http::{Request, Response, StatusCode};

/// Tipo de función handler
///
/// Un handler recibe el Request y el directorio de archivos
pub type Handler = fn(&Request, &FileStore) -> Result<Response>;

/// Cómo se compara el path del request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch {
    /// El path debe ser exactamente este
    Exact(&'static str),

    /// El path debe empezar con este prefijo
    Prefix(&'static str),
}

impl PathMatch {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatch::Exact(expected) => path == *expected,
            PathMatch::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

/// Restricción de método de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodMatch {
    Any,
    Only(&'static str),
}

impl MethodMatch {
    pub fn matches(&self, method: &str) -> bool {
        match self {
            MethodMatch::Any => true,
            MethodMatch::Only(expected) => method.eq_ignore_ascii_case(expected),
        }
    }
}

/// Una entrada de la tabla de rutas
#[derive(Clone, Copy)]
pub struct Route {
    pub path: PathMatch,
    pub method: MethodMatch,
    pub handler: Handler,
}

impl Route {
    pub fn matches(&self, request: &Request) -> bool {
        self.path.matches(request.path()) && self.method.matches(request.method())
    }
}

/// Router que mapea requests a handlers
pub struct Router {
    routes: Vec<Route>,
    files: FileStore,
}

impl Router {
    /// Crea un router vacío
    pub fn new(files: FileStore) -> Self {
        Self {
            routes: Vec::new(),
            files,
        }
    }

    /// Router con las rutas del servidor, en orden de prioridad
    pub fn with_default_routes(files: FileStore) -> Self {
        let mut router = Self::new(files);

        router.register(PathMatch::Exact("/"), MethodMatch::Any, handlers::root_handler);
        router.register(PathMatch::Prefix("/echo/"), MethodMatch::Any, handlers::echo_handler);
        router.register(PathMatch::Exact("/user-agent"), MethodMatch::Any, handlers::user_agent_handler);
        router.register(PathMatch::Prefix("/files/"), MethodMatch::Only("GET"), handlers::file_get_handler);
        router.register(PathMatch::Prefix("/files/"), MethodMatch::Only("POST"), handlers::file_post_handler);

        router
    }

    /// Registra una ruta al final de la tabla
    ///
    /// # Ejemplo
    /// ```
    /// use scratch_http::files::FileStore;
    /// use scratch_http::http::{Request, Response};
    /// use scratch_http::router::{MethodMatch, PathMatch, Router};
    ///
    /// fn hello(_req: &Request, _files: &FileStore) -> scratch_http::error::Result<Response> {
    ///     Ok(Response::text("hello"))
    /// }
    ///
    /// let mut router = Router::new(FileStore::new("/tmp"));
    /// router.register(PathMatch::Exact("/hello"), MethodMatch::Any, hello);
    ///
    /// let request = Request::parse(b"GET /hello HTTP/1.1\r\n\r\n");
    /// assert_eq!(router.route(&request).body(), b"hello");
    /// ```
    pub fn register(&mut self, path: PathMatch, method: MethodMatch, handler: Handler) {
        self.routes.push(Route {
            path,
            method,
            handler,
        });
    }

    /// Primera ruta que acepta el request
    pub fn find(&self, request: &Request) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(request))
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Un error del handler se registra y se convierte en 500 para esta
    /// conexión; el servidor sigue funcionando.
    pub fn route(&self, request: &Request) -> Response {
        let handler = self
            .find(request)
            .map(|route| route.handler)
            .unwrap_or(handlers::not_found_handler);

        match handler(request, &self.files) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    method = request.method(),
                    path = request.path(),
                    error = %e,
                    "handler falló"
                );
                Response::error(StatusCode::InternalServerError, "500 internal server error")
            }
        }
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
