mod definicion;
mod schema;
mod state;
mod submit;

pub use definicion::{cargar_edicion, cargar_nueva, DefinicionOferta};
pub use schema::{mensajes, EdicionOferta, NuevaOferta};
pub use state::{
    FormSubmission, SubmissionEvent, SubmissionState, Transition, REDIRECT_DELAY_MS,
};
pub use submit::{eliminar_oferta, submit_edicion, submit_nueva_oferta, SubmitOutcome};
