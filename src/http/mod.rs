//! # Módulo HTTP
//!
//! Framing HTTP/1.x implementado desde cero, sin librerías de alto nivel:
//!
//! - Lectura de bytes del socket hasta el fin de headers (`reader`)
//! - Parsing de la request line y headers (`request`)
//! - Serialización de respuestas (`response`)
//! - Conjunto de headers con merge case-insensitive (`headers`)
//! - Códigos de estado y línea de estado (`status`)
//!
//! `request`, `response` y `headers` no hacen I/O; solo `reader` toca el stream.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path?query=value HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200\r\n
//! Content-Type: text/html\r\n
//! Server: MinHTTP\r\n
//! Connection: close\r\n
//! \r\n
//! <h1>Hello World!</h1>
//! ```

pub mod headers;
pub mod reader;
pub mod request;
pub mod response;
pub mod status;

// Re-exportamos los tipos principales para facilitar su uso
pub use headers::Headers;
pub use reader::read_request_bytes;
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::{StatusCode, StatusLine};
