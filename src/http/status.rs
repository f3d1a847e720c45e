//! # Códigos de Estado HTTP
//!
//! La respuesta guarda su status como entero (`u16`): el handler puede
//! devolver cualquier código. Este módulo ofrece constantes con nombre para
//! los más comunes y la tabla de *reason phrases* usada cuando la línea de
//! estado se emite en forma completa.
//!
//! - **2xx**: Éxito (200, 204)
//! - **3xx**: Redirección (301, 302, 304)
//! - **4xx**: Error del cliente (400, 404, 405, 413)
//! - **5xx**: Error del servidor (500, 503)

/// Códigos de estado con nombre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 204 No Content - Petición exitosa sin contenido en el body
    NoContent = 204,

    MovedPermanently = 301,
    Found = 302,
    NotModified = 304,

    /// 400 Bad Request - Request malformado
    BadRequest = 400,

    /// 404 Not Found - Ruta o recurso no encontrado
    NotFound = 404,

    MethodNotAllowed = 405,

    /// 413 Payload Too Large - Request por encima del límite configurado
    PayloadTooLarge = 413,

    /// 500 Internal Server Error - Error interno del servidor
    InternalServerError = 500,

    ServiceUnavailable = 503,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use minhttp::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Texto de razón asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NoContent => "No Content",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::Found => "Found",
            StatusCode::NotModified => "Not Modified",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Busca el código con nombre para un valor numérico
    pub fn from_u16(code: u16) -> Option<Self> {
        let status = match code {
            200 => StatusCode::Ok,
            204 => StatusCode::NoContent,
            301 => StatusCode::MovedPermanently,
            302 => StatusCode::Found,
            304 => StatusCode::NotModified,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            405 => StatusCode::MethodNotAllowed,
            413 => StatusCode::PayloadTooLarge,
            500 => StatusCode::InternalServerError,
            503 => StatusCode::ServiceUnavailable,
            _ => return None,
        };
        Some(status)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> u16 {
        status.as_u16()
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// Forma de la línea de estado al serializar
///
/// - `Bare`: `HTTP/1.1 200` (forma corta, sin reason phrase)
/// - `WithReason`: `HTTP/1.1 200 OK` (la forma del RFC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    Bare,
    WithReason,
}

impl StatusLine {
    /// Genera la línea de estado, sin el terminador `\r\n`.
    ///
    /// Con `WithReason` y un código sin nombre conocido, se emite solo el número.
    pub fn render(&self, status: u16) -> String {
        match (self, StatusCode::from_u16(status)) {
            (StatusLine::WithReason, Some(known)) => {
                format!("HTTP/1.1 {} {}", status, known.reason_phrase())
            }
            _ => format!("HTTP/1.1 {}", status),
        }
    }
}
