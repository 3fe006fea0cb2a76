pub mod client;
pub mod contacto;
pub mod error;
pub mod types;

pub use client::OfertaClient;
pub use contacto::enviar_contacto;
pub use error::ApiError;
pub use types::{
    CamposEdicion, CamposOferta, Categoria, FormaPostulacion, IdRef, Logo, MensajeContacto, Oferta,
    OfertaPayload, Sesion, MAX_LOGO_BYTES,
};
