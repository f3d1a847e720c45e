//! # Lectura de Requests desde el Socket
//! src/http/reader.rs
//!
//! Acumula bytes del stream hasta que ocurre una de estas condiciones
//! (evaluadas después de cada chunk):
//!
//! 1. Se superó `max_len` → se trunca a exactamente `max_len` bytes.
//! 2. El buffer termina en `\r\n\r\n` → fin de headers.
//! 3. El stream devuelve 0 bytes → el peer cerró (puede quedar parcial).
//!
//! El terminador se busca en la cola del buffer completo, así que un
//! `\r\n\r\n` partido entre dos chunks también se detecta.

use std::io::{ErrorKind, Read};
use tracing::{trace, warn};

/// Tamaño de cada lectura individual
const CHUNK_SIZE: usize = 1024;

const HEAD_END: &[u8] = b"\r\n\r\n";

/// Lee los bytes de un request.
///
/// Retorna `Ok(None)` si no llegó nada útil (buffer vacío o solo espacios).
///
/// # Ejemplo
/// ```
/// use minhttp::http::read_request_bytes;
///
/// let mut stream: &[u8] = b"GET / HTTP/1.1\r\n\r\n";
/// let bytes = read_request_bytes(&mut stream, 2048).unwrap();
/// assert_eq!(bytes.as_deref(), Some(&b"GET / HTTP/1.1\r\n\r\n"[..]));
/// ```
pub fn read_request_bytes<R: Read>(stream: &mut R, max_len: usize) -> std::io::Result<Option<Vec<u8>>> {
    let mut received = Vec::with_capacity(CHUNK_SIZE.min(max_len));
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = match stream.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if n == 0 {
            trace!(len = received.len(), "stream cerrado por el peer");
            break;
        }

        received.extend_from_slice(&chunk[..n]);

        if received.len() > max_len {
            warn!(max_len, "request excede el límite, se trunca");
            received.truncate(max_len);
            break;
        }

        if received.ends_with(HEAD_END) {
            break;
        }
    }

    if received.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(Some(received))
}
