//! Pegamento de envío: validación → máquina de estados → cliente HTTP →
//! invalidación del cache.
//!
//! Acá es el único lugar donde se recuperan los errores del backend: se
//! convierten en un mensaje para mostrar y el formulario queda en `Failed`
//! con los valores intactos. La única excepción documentada es el 404 del
//! borrado, que el cliente ya trata como éxito.

use validator::{Validate, ValidationErrors};

use crate::api::client::OfertaClient;
use crate::api::error::ApiError;
use crate::api::types::{Oferta, Sesion};
use crate::cache::{CacheOfertas, Mutacion};
use crate::form::schema::{EdicionOferta, NuevaOferta};
use crate::form::state::{FormSubmission, SubmissionEvent};

/// Resultado de un intento de envío.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// El backend aceptó la oferta; el cache ya fue invalidado.
    Success(Oferta),
    /// La validación bloqueó el envío; nada llegó a la red.
    Invalid(ValidationErrors),
    /// El backend o la red rechazaron el envío; mensaje para mostrar.
    Failed(String),
    /// Ya hay un envío en curso o el formulario ya terminó; se ignora.
    Blocked,
}

/// Envía el alta de una oferta.
pub async fn submit_nueva_oferta(
    client: &OfertaClient,
    cache: &mut CacheOfertas,
    envio: &mut FormSubmission,
    form: &NuevaOferta,
    sesion: &Sesion,
) -> SubmitOutcome {
    if !envio.can_submit() {
        return SubmitOutcome::Blocked;
    }
    if let Err(errores) = form.validate() {
        return SubmitOutcome::Invalid(errores);
    }

    envio.apply(SubmissionEvent::Submit);
    let campos = form.a_campos(&sesion.usuario_id);
    match client.create(&campos, form.logo.as_ref(), &sesion.token).await {
        Ok(oferta) => {
            cache.invalidar(&Mutacion::Alta);
            envio.apply(SubmissionEvent::Succeeded);
            SubmitOutcome::Success(oferta)
        }
        Err(e) => fallar(envio, e),
    }
}

/// Envía la edición de una oferta existente.
pub async fn submit_edicion(
    client: &OfertaClient,
    cache: &mut CacheOfertas,
    envio: &mut FormSubmission,
    form: &EdicionOferta,
    sesion: &Sesion,
) -> SubmitOutcome {
    if !envio.can_submit() {
        return SubmitOutcome::Blocked;
    }
    if let Err(errores) = form.validate() {
        return SubmitOutcome::Invalid(errores);
    }

    envio.apply(SubmissionEvent::Submit);
    let edicion = form.a_campos(&sesion.usuario_id);
    match client.update(&edicion, form.logo.as_ref(), &sesion.token).await {
        Ok(oferta) => {
            cache.invalidar(&Mutacion::Edicion {
                id: oferta.id.clone(),
                slug: oferta.slug.clone(),
            });
            envio.apply(SubmissionEvent::Succeeded);
            SubmitOutcome::Success(oferta)
        }
        Err(e) => fallar(envio, e),
    }
}

/// Borra una oferta propia e invalida el cache. Idempotente: un segundo
/// borrado del mismo id también reporta éxito.
pub async fn eliminar_oferta(
    client: &OfertaClient,
    cache: &mut CacheOfertas,
    id: &str,
    token: &str,
) -> Result<(), ApiError> {
    client.delete_one(id, token).await?;
    cache.invalidar(&Mutacion::Baja { id: id.to_string() });
    Ok(())
}

fn fallar(envio: &mut FormSubmission, error: ApiError) -> SubmitOutcome {
    let mensaje = error.to_string();
    envio.apply(SubmissionEvent::Failed(mensaje.clone()));
    SubmitOutcome::Failed(mensaje)
}
