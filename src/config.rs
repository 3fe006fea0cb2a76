//! Configuración de la CLI cargada desde `madryn.toml`.
//!
//! La struct [`MadrynConfig`] reúne el origen del backend y las
//! credenciales de sesión. Los valores ausentes en el archivo quedan
//! vacíos; las variables de entorno `MADRYN_API_URL`, `MADRYN_TOKEN` y
//! `MADRYN_USUARIO` tienen precedencia sobre el archivo.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuración de nivel superior cargada de `madryn.toml`.
///
/// Un `api_url` vacío no se rechaza al cargar: el request resultante falla
/// recién al enviarse, igual que en el cliente web cuando la variable de
/// entorno del origen no está definida.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MadrynConfig {
    /// Origen del backend (ej. `https://api.madrynempleos.com.ar`).
    #[serde(default)]
    pub api_url: String,

    /// Token bearer de la sesión actual.
    #[serde(default)]
    pub token: String,

    /// Id del usuario autenticado, dueño de las ofertas que se crean.
    #[serde(default)]
    pub usuario_id: String,
}

impl MadrynConfig {
    /// Carga la configuración de `madryn.toml` en el directorio actual.
    /// Usa valores vacíos si el archivo no existe.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("madryn.toml"))
    }

    /// Carga la configuración desde una ruta explícita.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<MadrynConfig>(&contents)?
        } else {
            Self::default()
        };

        // Las variables de entorno tienen precedencia sobre el archivo.
        if let Ok(url) = std::env::var("MADRYN_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        if let Ok(token) = std::env::var("MADRYN_TOKEN") {
            if !token.is_empty() {
                config.token = token;
            }
        }
        if let Ok(usuario) = std::env::var("MADRYN_USUARIO") {
            if !usuario.is_empty() {
                config.usuario_id = usuario;
            }
        }

        Ok(config)
    }
}
