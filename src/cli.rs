//! Interfaz de línea de comandos basada en clap.
//!
//! Define la struct [`Cli`] con los subcomandos [`Command`] y flags
//! globales para pisar la configuración (`--api-url`, `--token`).

use clap::{Parser, Subcommand};

/// madryn — bolsa de trabajo de Puerto Madryn desde la terminal.
#[derive(Debug, Parser)]
#[command(name = "madryn", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Origen del backend (tiene precedencia sobre madryn.toml).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Token bearer de la sesión (tiene precedencia sobre madryn.toml).
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lista todas las ofertas publicadas.
    Listar,

    /// Muestra una oferta por su slug público (o por id con --id).
    Ver {
        /// Slug de la oferta.
        slug: Option<String>,

        /// Buscar por id en lugar de slug.
        #[arg(long, conflicts_with = "slug")]
        id: Option<String>,
    },

    /// Lista las ofertas del usuario autenticado.
    MisAvisos,

    /// Crea una oferta a partir de un archivo de definición TOML.
    Crear {
        /// Ruta al archivo TOML con la oferta.
        #[arg(long)]
        file: String,
    },

    /// Edita una oferta existente a partir de un archivo de definición TOML.
    Editar {
        /// Ruta al archivo TOML con la oferta (requiere id y habilitado).
        #[arg(long)]
        file: String,
    },

    /// Borra una oferta propia. Borrar una que ya no existe también es éxito.
    Eliminar {
        /// Id de la oferta.
        id: String,
    },

    /// Operaciones de moderación (requieren un token de administrador).
    Admin {
        #[command(subcommand)]
        accion: AdminCommand,
    },

    /// Envía un mensaje por el formulario de contacto.
    Contacto {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        apellido: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        mensaje: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Aprueba una oferta y la hace visible en los listados públicos.
    Habilitar { id: String },

    /// Borra cualquier oferta. Acá un 404 sí es error.
    Eliminar { id: String },
}
