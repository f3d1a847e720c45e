//! # MinHTTP
//! src/lib.rs
//!
//! Servidor HTTP/1.x mínimo implementado desde cero: acepta conexiones TCP,
//! lee hasta el fin de headers, parsea el request, lo entrega a un handler
//! enchufable y escribe la respuesta antes de cerrar la conexión.
//!
//! Una petición a la vez, sin keep-alive, sin bodies, sin TLS.
//!
//! ## Arquitectura
//!
//! - `http`: Framing HTTP (lectura, parsing, serialización, headers)
//! - `handler`: Interfaz del handler de la aplicación
//! - `server`: Loop de accept y ciclo de cada conexión
//! - `config`: Configuración por CLI y variables de entorno
//! - `router` / `commands`: Handler de ejemplo basado en rutas
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use minhttp::config::Config;
//! use minhttp::handler::Outcome;
//! use minhttp::http::{Request, Response};
//! use minhttp::server::Server;
//!
//! fn hello(_req: &Request) -> Outcome {
//!     Response::html("<h1>Hello World!</h1>").into()
//! }
//!
//! let server = Server::bind(Config::default(), hello).expect("bind");
//! server.serve().expect("Error en el servidor");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod router;
pub mod server;

pub use error::{ConnectionError, ServerError};
