//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Acepta y atiende **una conexión a la vez**: mientras un request se lee,
//! se procesa y se responde, no se acepta ninguna otra conexión.
//!
//! Dos modos de operación:
//!
//! - **Bloqueante** ([`Server::run`]): `accept()` bloquea hasta que llega una
//!   conexión. [`ShutdownHandle::stop`] despierta el accept pendiente con una
//!   conexión local que se descarta sin atender.
//! - **Polling** ([`Server::run_polling`] / [`Server::poll_once`]): el listener
//!   es no bloqueante; cada intervalo se revisa si hay una conexión esperando
//!   y, entre chequeos, la aplicación puede hacer su propio trabajo.

use crate::config::Config;
use crate::error::ServerError;
use crate::handler::Handler;
use crate::server::connection::{handle_connection, ConnectionSettings, Disposition};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Handle clonable para detener el servidor desde otro thread
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    running: Arc<AtomicBool>,
    wake_addr: SocketAddr,
}

impl ShutdownHandle {
    /// Detiene el loop de accept.
    ///
    /// La conexión en curso (si hay una) termina normalmente.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("deteniendo servidor");
            // Despierta un accept() bloqueado; el loop la descarta
            if let Err(e) = TcpStream::connect(self.wake_addr) {
                debug!(error = %e, "no se pudo despertar el accept");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Servidor HTTP/1.x secuencial
pub struct Server<H> {
    config: Config,
    handler: H,
    settings: ConnectionSettings,
    listener: TcpListener,
    local_addr: SocketAddr,
    running: Arc<AtomicBool>,
}

impl<H: Handler> Server<H> {
    /// Valida la configuración y hace bind del socket.
    ///
    /// El socket usa `SO_REUSEADDR` para que un reinicio no falle con
    /// "address in use", y el backlog configurado.
    pub fn bind(config: Config, handler: H) -> Result<Self, ServerError> {
        config.validate().map_err(ServerError::Config)?;
        let settings = ConnectionSettings::from_config(&config).map_err(ServerError::Config)?;

        let address = config.address();
        let addr = resolve_ipv4(&address)?;
        let listener = bind_listener(addr, config.backlog as i32).map_err(|source| ServerError::Bind {
            addr: address.clone(),
            source,
        })?;
        let local_addr = listener.local_addr()?;

        info!(%local_addr, "servidor escuchando");

        Ok(Self {
            config,
            handler,
            settings,
            listener,
            local_addr,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Handle para detener el servidor
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        let wake_ip = match self.local_addr.ip() {
            ip if ip.is_unspecified() => Ipv4Addr::LOCALHOST.into(),
            ip => ip,
        };
        ShutdownHandle {
            running: Arc::clone(&self.running),
            wake_addr: SocketAddr::new(wake_ip, self.local_addr.port()),
        }
    }

    /// Corre en el modo indicado por la configuración
    pub fn serve(&self) -> Result<(), ServerError> {
        match self.config.poll_interval() {
            Some(interval) => self.run_polling(interval, || {}),
            None => self.run(),
        }
    }

    /// Loop bloqueante: accept → atender → cerrar, hasta que se llame `stop`
    pub fn run(&self) -> Result<(), ServerError> {
        self.listener.set_nonblocking(false)?;
        info!("modo bloqueante: una conexión a la vez");

        while self.is_running() {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    if !self.is_running() {
                        debug!(%peer, "conexión de despertar descartada");
                        break;
                    }
                    self.serve_connection(stream, peer);
                }
                Err(e) => {
                    if let Some(delay) = accept_retry_delay(e.kind()) {
                        error!(error = %e, "error al aceptar conexión");
                        thread::sleep(delay);
                    }
                }
            }
        }

        info!("servidor detenido");
        Ok(())
    }

    /// Loop de polling: un [`Server::poll_once`] por intervalo.
    ///
    /// Después de cada chequeo, haya atendido una conexión o no, llama a
    /// `tick` y duerme `interval`. Con varias conexiones en cola se atiende
    /// una por intervalo, así el trabajo de la aplicación nunca se queda
    /// esperando a que se vacíe la cola.
    pub fn run_polling<F: FnMut()>(&self, interval: Duration, mut tick: F) -> Result<(), ServerError> {
        self.listener.set_nonblocking(true)?;
        info!(interval_ms = interval.as_millis() as u64, "modo polling: una conexión a la vez");

        while self.is_running() {
            self.poll_once()?;
            tick();
            thread::sleep(interval);
        }

        info!("servidor detenido");
        Ok(())
    }

    /// Un ciclo de polling: si hay una conexión esperando, la atiende completa.
    ///
    /// Retorna `true` si se atendió una conexión. Pone el listener en modo
    /// no bloqueante.
    pub fn poll_once(&self) -> Result<bool, ServerError> {
        self.listener.set_nonblocking(true)?;

        match self.listener.accept() {
            Ok((stream, peer)) => {
                if !self.is_running() {
                    return Ok(false);
                }
                // En algunas plataformas el socket hereda el modo del listener
                if let Err(e) = stream.set_nonblocking(false) {
                    warn!(%peer, error = %e, "no se pudo pasar el socket a modo bloqueante");
                    return Ok(false);
                }
                self.serve_connection(stream, peer);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::Interrupted => Ok(false),
            Err(e) => {
                error!(error = %e, "error al aceptar conexión");
                Ok(false)
            }
        }
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Atiende una conexión y la cierra siempre, pase lo que pase
    fn serve_connection(&self, mut stream: TcpStream, peer: SocketAddr) {
        info!(%peer, "conectado");

        match handle_connection(&mut stream, peer, &self.handler, &self.settings) {
            Ok(Disposition::Responded { status, .. }) => debug!(%peer, status, "conexión atendida"),
            Ok(disposition) => debug!(%peer, ?disposition, "conexión cerrada sin respuesta"),
            Err(e) => warn!(%peer, error = %e, "error en la conexión"),
        }

        if let Err(e) = stream.shutdown(Shutdown::Both) {
            debug!(%peer, error = %e, "shutdown del socket falló");
        }
    }
}

/// Pausa antes de reintentar un `accept()` fallido
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Cuánto esperar tras un error de `accept()`; `None` si se reintenta ya.
///
/// Errores persistentes (EMFILE, ENFILE) harían girar el loop sin pausa.
fn accept_retry_delay(kind: ErrorKind) -> Option<Duration> {
    match kind {
        ErrorKind::Interrupted => None,
        _ => Some(ACCEPT_RETRY_DELAY),
    }
}

/// Resuelve `host:port` a la primera dirección IPv4
fn resolve_ipv4(address: &str) -> Result<SocketAddr, ServerError> {
    let mut candidates = address
        .to_socket_addrs()
        .map_err(|_| ServerError::Resolve(address.to_string()))?;

    candidates
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| ServerError::Resolve(address.to_string()))
}

/// Crea el socket, activa `SO_REUSEADDR`, hace bind y listen
fn bind_listener(addr: SocketAddr, backlog: i32) -> std::io::Result<TcpListener> {
    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(backlog)?;
    Ok(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Outcome;
    use crate::http::{Request, Response};
    use std::io::{Read, Write};

    fn local_config() -> Config {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 0;
        config
    }

    fn hello(_req: &Request) -> Outcome {
        Response::html("<h1>Hello World!</h1>").into()
    }

    fn send(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
        let mut client = TcpStream::connect(addr).unwrap();
        client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        client.write_all(raw).unwrap();
        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_bind_ephemeral_port() {
        let server = Server::bind(local_config(), hello).unwrap();
        assert_ne!(server.local_addr().port(), 0);
        assert!(server.local_addr().is_ipv4());
    }

    #[test]
    fn test_bind_rejects_invalid_config() {
        let mut config = local_config();
        config.backlog = 0;
        let result = Server::bind(config, hello);
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn test_bind_port_in_use_fails() {
        let first = Server::bind(local_config(), hello).unwrap();
        let mut config = local_config();
        config.port = first.local_addr().port();

        let result = Server::bind(config, hello);
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }

    #[test]
    fn test_resolve_ipv4() {
        let addr = resolve_ipv4("127.0.0.1:9000").unwrap();
        assert_eq!(addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn test_resolve_invalid_host() {
        assert!(matches!(resolve_ipv4("not a host"), Err(ServerError::Resolve(_))));
    }

    #[test]
    fn test_poll_once_without_connection() {
        let server = Server::bind(local_config(), hello).unwrap();
        assert!(!server.poll_once().unwrap());
    }

    #[test]
    fn test_poll_once_serves_one_connection() {
        let server = Server::bind(local_config(), hello).unwrap();
        let addr = server.local_addr();

        let client = thread::spawn(move || send(addr, b"GET / HTTP/1.1\r\n\r\n"));

        // Esperar a que el cliente conecte
        let mut served = false;
        for _ in 0..500 {
            if server.poll_once().unwrap() {
                served = true;
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(served);

        let response = client.join().unwrap();
        assert!(response.starts_with(b"HTTP/1.1 200\r\n"));
        assert!(response.ends_with(b"<h1>Hello World!</h1>"));
    }

    #[test]
    fn test_accept_retry_delay() {
        assert_eq!(accept_retry_delay(ErrorKind::Interrupted), None);
        assert_eq!(accept_retry_delay(ErrorKind::Other), Some(ACCEPT_RETRY_DELAY));
        assert_eq!(accept_retry_delay(ErrorKind::ConnectionAborted), Some(ACCEPT_RETRY_DELAY));
    }

    #[test]
    fn test_polling_ticks_between_queued_connections() {
        let served = std::cell::Cell::new(0usize);
        let counting = |_req: &Request| {
            served.set(served.get() + 1);
            Outcome::from(Response::html("<h1>Hello World!</h1>"))
        };
        let server = Server::bind(local_config(), counting).unwrap();
        let addr = server.local_addr();
        let handle = server.shutdown_handle();

        // Tres requests completos en la cola antes de empezar a hacer polling
        let mut clients: Vec<TcpStream> = (0..3)
            .map(|_| {
                let mut client = TcpStream::connect(addr).unwrap();
                client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
                client.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();
                client
            })
            .collect();

        let mut seen = Vec::new();
        server
            .run_polling(Duration::from_millis(1), || {
                seen.push(served.get());
                if seen.len() == 5 {
                    handle.stop();
                }
            })
            .unwrap();

        // Una conexión por tick como mucho
        assert_eq!(seen, vec![1, 2, 3, 3, 3]);

        for client in &mut clients {
            let mut response = Vec::new();
            client.read_to_end(&mut response).unwrap();
            assert!(response.starts_with(b"HTTP/1.1 200\r\n"));
        }
    }

    #[test]
    fn test_stop_ends_blocking_run() {
        let server = Server::bind(local_config(), hello).unwrap();
        let handle = server.shutdown_handle();

        let t = thread::spawn(move || server.run());

        thread::sleep(Duration::from_millis(50));
        handle.stop();
        assert!(!handle.is_running());

        t.join().unwrap().unwrap();
    }

    #[test]
    fn test_stop_ends_polling_run() {
        let server = Server::bind(local_config(), hello).unwrap();
        let handle = server.shutdown_handle();

        let t = thread::spawn(move || {
            let mut ticks = 0u32;
            server.run_polling(Duration::from_millis(5), || ticks += 1).unwrap();
            ticks
        });

        thread::sleep(Duration::from_millis(60));
        handle.stop();

        let ticks = t.join().unwrap();
        assert!(ticks > 0);
    }
}
