//! # Errores del Servidor
//! src/error.rs
//!
//! Solo los errores de arranque ([`ServerError`]) son fatales. Los errores
//! de una conexión ([`ConnectionError`]) se registran y el loop de accept
//! sigue atendiendo.

use std::io;
use thiserror::Error;

/// Errores fatales al construir o arrancar el servidor
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No se pudo resolver el host a una dirección IPv4
    #[error("could not resolve an IPv4 address for {0}")]
    Resolve(String),

    /// El socket no pudo hacer bind (puerto ocupado, permisos...)
    #[error("bind failed on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errores de I/O durante el ciclo de una conexión
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to read request: {0}")]
    Read(#[source] io::Error),

    /// El envío falló con un error duro (las escrituras parciales se reintentan)
    #[error("failed to write response: {0}")]
    Write(#[source] io::Error),
}
