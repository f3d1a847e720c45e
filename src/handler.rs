//! # Interfaz del Handler
//! src/handler.rs
//!
//! La aplicación que embebe el servidor registra un único handler antes de
//! arrancar. El handler recibe el [`Request`] parseado y decide:
//!
//! - `Outcome::Respond(response)` → se serializa y se envía
//! - `Outcome::Suppress` → se cierra la conexión sin escribir nada
//!
//! Cualquier closure `Fn(&Request) -> Outcome` sirve como handler.
//!
//! ```
//! use minhttp::handler::{Handler, Outcome};
//! use minhttp::http::{Request, Response};
//!
//! let hello = |req: &Request| {
//!     if req.target() == "/" {
//!         Outcome::Respond(Response::html("<h1>Hello World!</h1>"))
//!     } else {
//!         Outcome::Suppress
//!     }
//! };
//!
//! let req = Request::new("GET", "/", &[], "127.0.0.1:9000".parse().unwrap());
//! assert!(matches!(hello.handle(&req), Outcome::Respond(_)));
//! ```

use crate::http::{Request, Response};

/// Resultado de un handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Enviar esta respuesta
    Respond(Response),

    /// Cerrar la conexión sin responder
    Suppress,
}

impl From<Response> for Outcome {
    fn from(response: Response) -> Self {
        Outcome::Respond(response)
    }
}

/// Lógica de aplicación enchufable
pub trait Handler {
    fn handle(&self, request: &Request) -> Outcome;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Outcome,
{
    fn handle(&self, request: &Request) -> Outcome {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppress_all(_req: &Request) -> Outcome {
        Outcome::Suppress
    }

    #[test]
    fn test_fn_pointer_is_handler() {
        let req = Request::new("GET", "/", &[], "127.0.0.1:1".parse().unwrap());
        assert_eq!(suppress_all.handle(&req), Outcome::Suppress);
    }

    #[test]
    fn test_response_into_outcome() {
        let outcome: Outcome = Response::new(204).into();
        assert_eq!(outcome, Outcome::Respond(Response::new(204)));
    }
}
