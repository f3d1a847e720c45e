//! # Parsing de Requests HTTP/1.x
//! src/http/request.rs
//!
//! Función pura, sin I/O: convierte los bytes acumulados por el lector en
//! un [`Request`].
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /path?param1=value1 HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Reglas
//!
//! 1. Todo lo que viene después del primer `\r\n\r\n` se descarta (no hay body).
//! 2. **Request Line**: token 0 es el método, token 1 el target. La versión
//!    se ignora. Menos de dos tokens es un request malformado.
//! 3. **Headers**: se separan por el primer `:`. Líneas sin `:` se ignoran.
//!    El nombre se guarda en minúsculas; ante duplicados gana el último.
//! 4. El target se entrega tal cual: sin decodificar ni separar el query.

use serde::Serialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use thiserror::Error;

const LINE_END: &str = "\r\n";
const HEAD_END: &str = "\r\n\r\n";

/// Request HTTP parseado
///
/// `method` y `target` nunca están vacíos en un request construido por
/// [`Request::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// Verbo HTTP tal como llegó (ej: "GET")
    method: String,

    /// Request-URI sin procesar (path + query opcional)
    target: String,

    /// Headers con nombre en minúsculas y valor recortado
    headers: HashMap<String, String>,

    /// Dirección del cliente
    client_addr: SocketAddr,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// La request line no tiene método y target
    #[error("malformed request line: {0:?}")]
    MalformedRequest(String),
}

impl Request {
    /// Parsea un request desde los bytes leídos del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use minhttp::http::Request;
    ///
    /// let addr = "127.0.0.1:5000".parse().unwrap();
    /// let raw = b"GET /index.html?x=1 HTTP/1.1\r\nHost: example\r\n\r\n";
    /// let request = Request::parse(raw, addr).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.target(), "/index.html?x=1");
    /// assert_eq!(request.header("host"), Some("example"));
    /// ```
    pub fn parse(buffer: &[u8], client_addr: SocketAddr) -> Result<Self, ParseError> {
        let text = String::from_utf8_lossy(buffer);

        // Lo que sigue al fin de headers no se interpreta
        let head = match text.find(HEAD_END) {
            Some(end) => &text[..end],
            None => &text[..],
        };

        let mut lines = head.split(LINE_END);
        let request_line = lines.next().unwrap_or_default();
        let (method, target) = Self::parse_request_line(request_line)?;
        let headers = Self::parse_headers(lines);

        Ok(Request {
            method,
            target,
            headers,
            client_addr,
        })
    }

    /// Parsea la request line: `METHOD TARGET HTTP/x.y`
    fn parse_request_line(line: &str) -> Result<(String, String), ParseError> {
        let mut tokens = line.split(' ').filter(|t| !t.is_empty());

        match (tokens.next(), tokens.next()) {
            (Some(method), Some(target)) => Ok((method.to_string(), target.to_string())),
            _ => Err(ParseError::MalformedRequest(line.to_string())),
        }
    }

    /// Parsea los headers `Name: Value`
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }

        headers
    }

    /// Construye un request directamente (útil para handlers y tests)
    ///
    /// Los nombres de headers se pasan a minúsculas igual que en `parse`.
    pub fn new(
        method: &str,
        target: &str,
        headers: &[(&str, &str)],
        client_addr: SocketAddr,
    ) -> Self {
        Self {
            method: method.to_string(),
            target: target.to_string(),
            headers: headers
                .iter()
                .map(|(n, v)| (n.trim().to_lowercase(), v.trim().to_string()))
                .collect(),
            client_addr,
        }
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Target crudo, tal como lo envió el cliente
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header; el nombre se compara en minúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    pub fn client_addr(&self) -> SocketAddr {
        self.client_addr
    }
}
