//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./minhttp --port 8080 \
//!   --backlog 5 \
//!   --max-request-len 2048 \
//!   --poll-interval-ms 50 \
//!   --header "X-Frame-Options: DENY"
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=0.0.0.0 ./minhttp
//! ```

use crate::http::Headers;
use clap::Parser;
use std::time::Duration;
use tracing::info;

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "minhttp")]
#[command(about = "Servidor HTTP/1.x mínimo: una petición a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = efímero)
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (0.0.0.0 = todas las interfaces)
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Tamaño de la cola de conexiones pendientes
    #[arg(long, default_value = "5", env = "HTTP_BACKLOG")]
    pub backlog: u32,

    /// Máximo de bytes que se leen por request (se trunca el resto)
    #[arg(long = "max-request-len", default_value = "2048", env = "MAX_REQUEST_LEN")]
    pub max_request_len: usize,

    /// Activa el modo polling: intervalo entre chequeos de accept
    #[arg(long = "poll-interval-ms", env = "POLL_INTERVAL_MS")]
    pub poll_interval_ms: Option<u64>,

    // === Headers por defecto ===
    /// Valor del header Content-Type por defecto
    #[arg(long = "content-type", default_value = "text/html", env = "CONTENT_TYPE")]
    pub content_type: String,

    /// Valor del header Server
    #[arg(long = "server-name", default_value = "MinHTTP", env = "SERVER_NAME")]
    pub server_name: String,

    /// Headers adicionales por defecto, formato "Nombre: Valor" (repetible)
    #[arg(long = "header", value_name = "NAME: VALUE")]
    pub extra_headers: Vec<String>,

    /// Emite la línea de estado completa ("HTTP/1.1 200 OK")
    #[arg(long = "reason-phrase")]
    pub reason_phrase: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use minhttp::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Intervalo de polling, si el modo está activo
    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval_ms.map(Duration::from_millis)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.backlog == 0 {
            return Err("Backlog must be >= 1".to_string());
        }
        if self.backlog > i32::MAX as u32 {
            return Err("Backlog is too large".to_string());
        }

        if self.max_request_len == 0 {
            return Err("Max request length must be >= 1".to_string());
        }

        if self.poll_interval_ms == Some(0) {
            return Err("Poll interval must be > 0".to_string());
        }

        for entry in &self.extra_headers {
            parse_header_entry(entry)?;
        }

        Ok(())
    }

    /// Construye el conjunto de headers por defecto
    ///
    /// Siempre incluye `Content-Type`, `Server` y `Connection: close`. Los
    /// headers adicionales se aplican encima, en orden.
    ///
    /// # Ejemplo
    /// ```rust
    /// use minhttp::config::Config;
    ///
    /// let headers = Config::default().default_headers().unwrap();
    /// assert_eq!(headers.get("content-type"), Some("text/html"));
    /// assert_eq!(headers.get("connection"), Some("close"));
    /// ```
    pub fn default_headers(&self) -> Result<Headers, String> {
        let mut headers = Headers::from_pairs(&[
            ("Content-Type", self.content_type.as_str()),
            ("Server", self.server_name.as_str()),
            ("Connection", "close"),
        ]);

        for entry in &self.extra_headers {
            let (name, value) = parse_header_entry(entry)?;
            headers.set(name, value);
        }

        Ok(headers)
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        info!(
            address = %self.address(),
            backlog = self.backlog,
            max_request_len = self.max_request_len,
            "configuración de red"
        );
        match self.poll_interval_ms {
            Some(ms) => info!(interval_ms = ms, "modo polling"),
            None => info!("modo bloqueante"),
        }
        info!(
            content_type = %self.content_type,
            server = %self.server_name,
            extra = self.extra_headers.len(),
            reason_phrase = self.reason_phrase,
            "headers por defecto"
        );
    }
}

/// Separa una entrada "Nombre: Valor" en el primer `:`
fn parse_header_entry(entry: &str) -> Result<(&str, &str), String> {
    match entry.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(format!("Invalid header entry (expected 'Name: Value'): {}", entry)),
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            backlog: 5,
            max_request_len: 2048,
            poll_interval_ms: None,
            content_type: "text/html".to_string(),
            server_name: "MinHTTP".to_string(),
            extra_headers: Vec::new(),
            reason_phrase: false,
        }
    }
}
