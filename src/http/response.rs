//! # Construcción y Serialización de Respuestas
//!
//! El handler construye un [`Response`] (status, body y headers propios) y
//! el servidor lo serializa mezclando sus headers por defecto.
//!
//! ## Formato en el cable
//!
//! ```text
//! HTTP/1.1 200\r\n
//! Content-Type: text/html\r\n
//! Server: MinHTTP\r\n
//! Connection: close\r\n
//! \r\n
//! <h1>Hello World!</h1>
//! ```
//!
//! No se calcula `Content-Length`: la conexión se cierra después de cada
//! respuesta y eso delimita el body. Un handler que lo necesite puede
//! agregarlo con [`Response::with_header`].
//!
//! ## Ejemplo de uso
//!
//! ```
//! use minhttp::http::{Headers, Response};
//!
//! let defaults = Headers::from_pairs(&[("Content-Type", "text/html")]);
//! let response = Response::new(200).with_body("<h1>Hello</h1>");
//!
//! let bytes = response.serialize(&defaults);
//! assert!(bytes.starts_with(b"HTTP/1.1 200\r\n"));
//! assert!(bytes.ends_with(b"\r\n\r\n<h1>Hello</h1>"));
//! ```

use super::{Headers, StatusCode, StatusLine};

const LINE_END: &[u8] = b"\r\n";

/// Respuesta producida por un handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: u16,

    /// Headers propios; sobrescriben a los defaults del servidor
    headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers propios ni body
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Igual que [`Response::new`] pero con un código con nombre
    ///
    /// # Ejemplo
    /// ```
    /// use minhttp::http::{Response, StatusCode};
    ///
    /// let a = Response::new(200);
    /// let b = Response::from_status(StatusCode::Ok);
    /// assert_eq!(a, b);
    /// ```
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status.as_u16())
    }

    /// Respuesta HTML con status 200
    pub fn html(body: &str) -> Self {
        Self::from_status(StatusCode::Ok).with_body(body)
    }

    /// Agrega un header propio. Si ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el body desde bytes (contenido binario)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Serializa con la línea de estado corta (`HTTP/1.1 200`)
    pub fn serialize(&self, defaults: &Headers) -> Vec<u8> {
        self.serialize_with(defaults, StatusLine::Bare)
    }

    /// Convierte la respuesta en bytes listos para el socket
    ///
    /// 1. Línea de estado + `\r\n`
    /// 2. Headers mezclados (`defaults` ← propios), unidos por `\r\n`
    /// 3. `\r\n\r\n`
    /// 4. Body tal cual
    pub fn serialize_with(&self, defaults: &Headers, status_line: StatusLine) -> Vec<u8> {
        let merged = defaults.merged(&self.headers);
        let mut result = Vec::with_capacity(128 + self.body.len());

        result.extend_from_slice(status_line.render(self.status).as_bytes());
        result.extend_from_slice(LINE_END);

        let header_block = merged
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\r\n");
        result.extend_from_slice(header_block.as_bytes());
        result.extend_from_slice(LINE_END);
        result.extend_from_slice(LINE_END);

        result.extend_from_slice(&self.body);
        result
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Headers propios (sin los defaults del servidor)
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
