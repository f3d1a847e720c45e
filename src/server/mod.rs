//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes, de a una
//! 3. Lee y parsea el request
//! 4. Delega en el handler y envía la respuesta
//! 5. Cierra la conexión

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{handle_connection, ConnectionSettings, Disposition};
pub use tcp::{Server, ShutdownHandle};
