//! Cliente de la bolsa de trabajo Madryn Empleos.
//!
//! La crate expone el cliente HTTP tipado del backend ([`api`]), las reglas
//! de validación del formulario de oferta y su máquina de estados de envío
//! ([`form`]), el cache de consultas con invalidación explícita ([`cache`])
//! y los módulos de soporte de la CLI `madryn`.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod ui;

pub use api::{
    ApiError, CamposEdicion, CamposOferta, Categoria, FormaPostulacion, Logo, MensajeContacto,
    Oferta, OfertaClient, Sesion,
};
pub use error::MadrynError;
