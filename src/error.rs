use thiserror::Error;

use crate::api::error::ApiError;

#[derive(Debug, Error)]
pub enum MadrynError {
    #[error("Definición de oferta inválida: {0}")]
    Definicion(String),

    #[error("Error de API: {0}")]
    Api(#[from] ApiError),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error al parsear TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
