//! Cliente del formulario de contacto.
//!
//! Una sola operación: POST `/api/contacto` con el mensaje en JSON, sin
//! autenticación. Sin reintentos y sin validación local más allá de la que
//! hace el formulario que lo invoca.

use super::client::OfertaClient;
use super::error::ApiError;
use super::types::MensajeContacto;

/// Envía un mensaje de contacto y devuelve el cuerpo crudo de la respuesta.
pub async fn enviar_contacto(
    client: &OfertaClient,
    mensaje: &MensajeContacto,
) -> Result<String, ApiError> {
    let response = client
        .http()
        .post(format!("{}/api/contacto", client.base_url()))
        .json(mensaje)
        .send()
        .await?;
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "sin cuerpo".to_string());
    if !status.is_success() {
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
