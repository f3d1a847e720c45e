//! # Ciclo de una Conexión
//! src/server/connection.rs
//!
//! Orquesta un único request/response sobre un stream ya aceptado:
//!
//! ```text
//! OPEN → READING → (PARSED | EMPTY | MALFORMED)
//!                    PARSED → (RESPONDED | SUPPRESSED) → CLOSED
//! ```
//!
//! La función es genérica sobre `Read + Write`, así que se prueba con
//! buffers en memoria. Cerrar el socket es responsabilidad del llamador;
//! esta función nunca deja la conexión abierta para un segundo request.

use crate::error::ConnectionError;
use crate::handler::{Handler, Outcome};
use crate::http::{read_request_bytes, Headers, Request, StatusLine};
use crate::config::Config;
use std::io::{Read, Write};
use std::net::SocketAddr;
use tracing::{debug, info};

/// Parámetros de framing compartidos por todas las conexiones
///
/// Son de solo lectura una vez que el servidor arranca.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub max_request_len: usize,
    pub default_headers: Headers,
    pub status_line: StatusLine,
}

impl ConnectionSettings {
    /// Extrae los parámetros de framing de la configuración
    pub fn from_config(config: &Config) -> Result<Self, String> {
        Ok(Self {
            max_request_len: config.max_request_len,
            default_headers: config.default_headers()?,
            status_line: if config.reason_phrase {
                StatusLine::WithReason
            } else {
                StatusLine::Bare
            },
        })
    }
}

impl Default for ConnectionSettings {
    /// Mismos valores que `Config::default()`, sin pasar por la validación
    fn default() -> Self {
        Self {
            max_request_len: 2048,
            default_headers: Headers::from_pairs(&[
                ("Content-Type", "text/html"),
                ("Server", "MinHTTP"),
                ("Connection", "close"),
            ]),
            status_line: StatusLine::Bare,
        }
    }
}

/// Cómo terminó una conexión
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// No llegó nada útil
    Empty,

    /// La request line no tenía método y target; no se respondió
    Malformed,

    /// El handler pidió cerrar sin responder
    Suppressed,

    /// Se envió una respuesta completa
    Responded { status: u16, bytes: usize },
}

/// Atiende un request completo sobre `stream`
pub fn handle_connection<S, H>(
    stream: &mut S,
    client_addr: SocketAddr,
    handler: &H,
    settings: &ConnectionSettings,
) -> Result<Disposition, ConnectionError>
where
    S: Read + Write,
    H: Handler + ?Sized,
{
    let raw = match read_request_bytes(stream, settings.max_request_len) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(peer = %client_addr, "request vacío, se cierra sin responder");
            return Ok(Disposition::Empty);
        }
        Err(e) => return Err(ConnectionError::Read(e)),
    };

    let request = match Request::parse(&raw, client_addr) {
        Ok(request) => request,
        Err(e) => {
            debug!(peer = %client_addr, error = %e, "request malformado, se descarta");
            return Ok(Disposition::Malformed);
        }
    };

    info!(peer = %client_addr, method = request.method(), target = request.target(), "request");

    let response = match handler.handle(&request) {
        Outcome::Respond(response) => response,
        Outcome::Suppress => {
            debug!(peer = %client_addr, "respuesta suprimida por el handler");
            return Ok(Disposition::Suppressed);
        }
    };

    let bytes = response.serialize_with(&settings.default_headers, settings.status_line);

    // write_all reintenta escrituras parciales e interrupciones
    stream.write_all(&bytes).map_err(ConnectionError::Write)?;
    stream.flush().map_err(ConnectionError::Write)?;

    info!(peer = %client_addr, status = response.status(), bytes = bytes.len(), "respuesta enviada");

    Ok(Disposition::Responded {
        status: response.status(),
        bytes: bytes.len(),
    })
}
