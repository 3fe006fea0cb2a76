use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use madryn_empleos::api::{enviar_contacto, MensajeContacto, OfertaClient, Sesion};
use madryn_empleos::cache::CacheOfertas;
use madryn_empleos::cli::{AdminCommand, Cli, Command};
use madryn_empleos::config::MadrynConfig;
use madryn_empleos::form::{
    cargar_edicion, cargar_nueva, eliminar_oferta, mensajes, submit_edicion, submit_nueva_oferta,
    FormSubmission, SubmitOutcome, REDIRECT_DELAY_MS,
};
use madryn_empleos::ui::{self, EnvioProgress};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MadrynConfig::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(token) = cli.token {
        config.token = token;
    }

    let client = OfertaClient::new(config.api_url.clone());
    let mut cache = CacheOfertas::new();

    match cli.command {
        Command::Listar => {
            let ofertas = client.fetch_all().await?;
            for oferta in &ofertas {
                println!("{}", ui::tarjeta_oferta(oferta));
            }
            println!("{} ofertas", ofertas.len());
        }

        Command::Ver { slug, id } => {
            let oferta = match (slug, id) {
                (_, Some(id)) => client.fetch_by_id(&id).await?,
                (Some(slug), None) => client.fetch_by_slug(&slug).await?,
                (None, None) => bail!("indicá un slug o --id"),
            };
            println!("{}", ui::tarjeta_oferta(&oferta));
            println!("{}", oferta.descripcion);
        }

        Command::MisAvisos => {
            let sesion = sesion(&config)?;
            let ofertas = client.fetch_for_user(&sesion.token).await?;
            for oferta in &ofertas {
                println!("{}", ui::tarjeta_oferta(oferta));
            }
            println!("{} avisos", ofertas.len());
        }

        Command::Crear { file } => {
            let sesion = sesion(&config)?;
            let form = cargar_nueva(Path::new(&file))?;
            let progress = EnvioProgress::start("Enviando oferta...");
            let mut envio = FormSubmission::new();
            let resultado =
                submit_nueva_oferta(&client, &mut cache, &mut envio, &form, &sesion).await;
            cerrar_envio(progress, resultado, "Oferta creada").await?;
        }

        Command::Editar { file } => {
            let sesion = sesion(&config)?;
            let form = cargar_edicion(Path::new(&file))?;
            let progress = EnvioProgress::start("Enviando cambios...");
            let mut envio = FormSubmission::new();
            let resultado = submit_edicion(&client, &mut cache, &mut envio, &form, &sesion).await;
            cerrar_envio(progress, resultado, "Oferta actualizada").await?;
        }

        Command::Eliminar { id } => {
            let sesion = sesion(&config)?;
            eliminar_oferta(&client, &mut cache, &id, &sesion.token).await?;
            println!("Oferta {id} eliminada");
        }

        Command::Admin { accion } => {
            let sesion = sesion(&config)?;
            match accion {
                AdminCommand::Habilitar { id } => {
                    client.admin_enable(&id, &sesion.token).await?;
                    println!("Oferta {id} habilitada");
                }
                AdminCommand::Eliminar { id } => {
                    client.admin_delete(&id, &sesion.token).await?;
                    println!("Oferta {id} eliminada");
                }
            }
        }

        Command::Contacto {
            nombre,
            apellido,
            email,
            mensaje,
        } => {
            let respuesta = enviar_contacto(
                &client,
                &MensajeContacto {
                    nombre,
                    apellido,
                    email,
                    mensaje,
                },
            )
            .await?;
            println!("{respuesta}");
        }
    }

    Ok(())
}

fn sesion(config: &MadrynConfig) -> Result<Sesion> {
    if config.token.is_empty() {
        bail!("falta el token: definí MADRYN_TOKEN, --token o token en madryn.toml");
    }
    Ok(Sesion {
        usuario_id: config.usuario_id.clone(),
        token: config.token.clone(),
    })
}

async fn cerrar_envio(
    progress: EnvioProgress,
    resultado: SubmitOutcome,
    exito: &str,
) -> Result<()> {
    match resultado {
        SubmitOutcome::Success(oferta) => {
            progress.exito(&format!("{exito}: {}", oferta.slug));
            println!("{}", ui::tarjeta_oferta(&oferta));
            // Espera fija antes de volver, como la navegación diferida del sitio.
            tokio::time::sleep(Duration::from_millis(REDIRECT_DELAY_MS)).await;
            Ok(())
        }
        SubmitOutcome::Invalid(errores) => {
            progress.fallo("La oferta no pasó la validación:");
            for mensaje in mensajes(&errores) {
                eprintln!("    - {mensaje}");
            }
            bail!("corregí la definición y volvé a intentar");
        }
        SubmitOutcome::Failed(mensaje) => {
            progress.fallo(&mensaje);
            bail!("el envío falló");
        }
        SubmitOutcome::Blocked => bail!("ya hay un envío en curso"),
    }
}
