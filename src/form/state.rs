use serde::{Deserialize, Serialize};
use std::fmt;

/// Delay fijo, en milisegundos, entre un envío exitoso y la navegación de
/// vuelta al listado.
pub const REDIRECT_DELAY_MS: u64 = 2000;

/// Estados del envío de un formulario de oferta.
///
/// El flujo es `Idle → Submitting → {Success, Failed}`; desde `Failed` se
/// vuelve a `Idle` al editar cualquier campo. `Success` es terminal: tras
/// [`REDIRECT_DELAY_MS`] el formulario se abandona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    /// Conserva el mensaje de error del cliente de API, que se muestra
    /// textual junto al control de envío. Los valores cargados no se pierden.
    Failed(String),
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "IDLE"),
            SubmissionState::Submitting => write!(f, "SUBMITTING"),
            SubmissionState::Success => write!(f, "SUCCESS"),
            SubmissionState::Failed(_) => write!(f, "FAILED"),
        }
    }
}

/// Eventos que puede recibir el formulario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// El usuario disparó el envío.
    Submit,
    /// El backend aceptó el envío.
    Succeeded,
    /// El backend (o la red) rechazó el envío; lleva el mensaje a mostrar.
    Failed(String),
    /// El usuario editó algún campo.
    Edited,
}

/// Resultado de aplicar un evento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// El evento movió el formulario a un nuevo estado.
    Changed(SubmissionState),
    /// El evento no es válido en el estado actual y se ignoró.
    Ignored,
}

/// Máquina de estados de envío, una por instancia de formulario.
///
/// La única protección contra el doble envío es que `can_submit` es falso
/// mientras hay un envío en vuelo (el botón deshabilitado del formulario
/// web); el cliente HTTP no deduplica requests.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    state: SubmissionState,
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// El envío está habilitado en `Idle` y en `Failed` (reintento con los
    /// mismos valores); nunca con un envío en curso ni tras el éxito.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Idle | SubmissionState::Failed(_)
        )
    }

    /// Mensaje de error del último envío fallido, si lo hay.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(mensaje) => Some(mensaje),
            _ => None,
        }
    }

    /// Aplica un evento y devuelve la transición resultante.
    pub fn apply(&mut self, event: SubmissionEvent) -> Transition {
        let next = match (&self.state, event) {
            (SubmissionState::Idle, SubmissionEvent::Submit) => Some(SubmissionState::Submitting),
            (SubmissionState::Failed(_), SubmissionEvent::Submit) => {
                Some(SubmissionState::Submitting)
            }
            (SubmissionState::Submitting, SubmissionEvent::Succeeded) => {
                Some(SubmissionState::Success)
            }
            (SubmissionState::Submitting, SubmissionEvent::Failed(mensaje)) => {
                Some(SubmissionState::Failed(mensaje))
            }
            (SubmissionState::Failed(_), SubmissionEvent::Edited) => Some(SubmissionState::Idle),
            // Todo lo demás se ignora: doble Submit mientras está en vuelo,
            // eventos sobre Success (terminal), Edited en Idle, etc.
            _ => None,
        };

        match next {
            Some(state) => {
                self.state = state.clone();
                Transition::Changed(state)
            }
            None => Transition::Ignored,
        }
    }
}
