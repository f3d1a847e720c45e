//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Handler de ejemplo: mapea paths exactos a funciones de ruta.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Route → Outcome
//! ```
//!
//! El codec entrega el target sin procesar; separar el path del query string
//! es trabajo del router. Si no hay ruta para el path, retorna 404.

use crate::handler::{Handler, Outcome};
use crate::http::{Request, Response, StatusCode};

/// Función de ruta
///
/// Recibe el Request y retorna una respuesta o la supresión.
pub type Route = fn(&Request) -> Outcome;

const NOT_FOUND_BODY: &str = "Sorry, can't find that (404).";

/// Router que mapea paths a rutas
pub struct Router {
    /// Lista de path → ruta, en orden de registro
    routes: Vec<(String, Route)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta
    ///
    /// # Ejemplo
    /// ```
    /// use minhttp::handler::Outcome;
    /// use minhttp::http::{Request, Response};
    /// use minhttp::router::Router;
    ///
    /// fn hello(_req: &Request) -> Outcome {
    ///     Response::html("<h1>Hello</h1>").into()
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register("/hello", hello);
    /// ```
    pub fn register(&mut self, path: &str, route: Route) {
        self.routes.push((path.to_string(), route));
    }

    /// Encuentra y ejecuta la ruta apropiada para un request
    pub fn route(&self, request: &Request) -> Outcome {
        let path = path_of(request.target());

        for (route_path, route) in &self.routes {
            if route_path == path {
                return route(request);
            }
        }

        Response::from_status(StatusCode::NotFound)
            .with_body(NOT_FOUND_BODY)
            .into()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for Router {
    fn handle(&self, request: &Request) -> Outcome {
        self.route(request)
    }
}

/// Parte del target antes del `?`
fn path_of(target: &str) -> &str {
    match target.split_once('?') {
        Some((path, _query)) => path,
        None => target,
    }
}
