//! # Rutas de Ejemplo
//! src/commands/basic.rs
//!
//! Rutas que registra el binario de ejemplo:
//! - `/` y `/index.html`: página "Hello World!"
//! - `/request`: eco del request parseado en JSON
//! - `/favicon.ico`: se suprime (se cierra sin responder)

use crate::handler::Outcome;
use crate::http::{Request, Response, StatusCode};

const INDEX_BODY: &str = "<h1>Hello World!</h1>";

/// Handler para `/` y `/index.html`
pub fn index_handler(_req: &Request) -> Outcome {
    Response::html(INDEX_BODY).into()
}

/// Handler para /request
///
/// Devuelve el request tal como lo vio el servidor.
///
/// # Ejemplo de response
/// ```json
/// {
///   "method": "GET",
///   "target": "/request?x=1",
///   "headers": {"host": "localhost:8080"},
///   "client_addr": "127.0.0.1:53422"
/// }
/// ```
pub fn request_echo_handler(req: &Request) -> Outcome {
    match serde_json::to_string_pretty(req) {
        Ok(body) => Response::from_status(StatusCode::Ok)
            .with_header("Content-Type", "application/json")
            .with_body(&body)
            .into(),
        Err(e) => Response::from_status(StatusCode::InternalServerError)
            .with_header("Content-Type", "text/plain")
            .with_body(&format!("could not encode request: {}", e))
            .into(),
    }
}

/// Handler para /favicon.ico: no hay ícono, se cierra sin responder
pub fn favicon_handler(_req: &Request) -> Outcome {
    Outcome::Suppress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(target: &str) -> Request {
        Request::new(
            "GET",
            target,
            &[("Host", "localhost:8080")],
            "127.0.0.1:53422".parse().unwrap(),
        )
    }

    fn expect_response(outcome: Outcome) -> Response {
        match outcome {
            Outcome::Respond(response) => response,
            Outcome::Suppress => panic!("expected a response"),
        }
    }

    #[test]
    fn test_index_handler() {
        let response = expect_response(index_handler(&make_request("/")));

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"<h1>Hello World!</h1>");
    }

    #[test]
    fn test_request_echo_handler() {
        let response = expect_response(request_echo_handler(&make_request("/request?x=1")));
        assert_eq!(response.headers().get("content-type"), Some("application/json"));

        let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["target"], "/request?x=1");
        assert_eq!(json["headers"]["host"], "localhost:8080");
        assert_eq!(json["client_addr"], "127.0.0.1:53422");
    }

    #[test]
    fn test_favicon_suppressed() {
        assert_eq!(favicon_handler(&make_request("/favicon.ico")), Outcome::Suppress);
    }
}
