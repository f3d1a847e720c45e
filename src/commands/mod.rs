//! # Rutas del Servidor de Ejemplo
//!
//! El núcleo del servidor no sabe nada de rutas: estas funciones solo las
//! usa el binario para armar un [`Router`](crate::router::Router) de ejemplo.

pub mod basic;

pub use basic::*;

use crate::router::Router;

/// Router con todas las rutas de ejemplo registradas
pub fn example_router() -> Router {
    let mut router = Router::new();
    router.register("/", index_handler);
    router.register("/index.html", index_handler);
    router.register("/request", request_echo_handler);
    router.register("/favicon.ico", favicon_handler);
    router
}
