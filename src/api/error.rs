//! Tipos de error para el cliente de la API de Madryn Empleos.
//!
//! Define [`ApiError`] con variantes para respuestas HTTP no exitosas,
//! cuerpos con forma inesperada y fallas de red. Usa `thiserror` para
//! derivar `Display` y `Error` a partir de los atributos `#[error(...)]`.

use thiserror::Error;

/// Errores que pueden ocurrir al interactuar con el backend.
///
/// Las variantes cubren los tres escenarios de falla del contrato:
/// - [`RequestFailed`](ApiError::RequestFailed) — el servidor respondió un
///   status no exitoso; se conserva el status y el cuerpo crudo.
/// - [`MalformedResponse`](ApiError::MalformedResponse) — el cuerpo decodificado
///   no tiene la forma esperada (objeto donde va un array, etc.).
/// - [`Network`](ApiError::Network) — falla en la capa de red, expuesta sin
///   reformatear porque su causa es opaca para el cliente.
#[derive(Debug, Error)]
pub enum ApiError {
    /// El servidor respondió con un status HTTP no exitoso.
    /// El cuerpo se conserva como texto crudo; no se asume ningún esquema
    /// estructurado de error más allá del código de status.
    #[error("la API respondió {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// El cuerpo de la respuesta no tiene la forma esperada.
    #[error("respuesta con forma inesperada: {0}")]
    MalformedResponse(String),

    /// Falla de red subyacente (DNS, conexión rechazada, timeout).
    /// Encapsula el error original de `reqwest` vía `#[from]`.
    #[error("error de red: {0}")]
    Network(#[from] reqwest::Error),
}
