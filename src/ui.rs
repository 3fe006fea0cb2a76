//! Salida de terminal — tarjetas de oferta y spinner de envío.
//!
//! Usa `console` para estilos con color e `indicatif` para el spinner que
//! se muestra mientras un envío está en vuelo. [`EnvioProgress`] es el
//! indicador de actividad del formulario: arranca al pasar a `Submitting`
//! y termina en verde o rojo según el resultado.

use console::{style, Style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::types::{FormaPostulacion, Oferta};

/// Arma la tarjeta de una oferta para el listado de la terminal.
pub fn tarjeta_oferta(oferta: &Oferta) -> String {
    let titulo = style(&oferta.titulo).bold();
    let estado = if oferta.habilitado {
        style("publicada").green().to_string()
    } else {
        style("pendiente de aprobación").yellow().to_string()
    };
    let canal = match oferta.forma_postulacion {
        FormaPostulacion::Mail => format!(
            "Postulación por mail: {}",
            oferta.email_contacto.as_deref().unwrap_or("-")
        ),
        FormaPostulacion::Link => format!(
            "Postulación por link: {}",
            oferta.link_postulacion.as_deref().unwrap_or("-")
        ),
    };
    let cierre = oferta
        .fecha_cierre
        .map(|f| format!("  Cierra: {f}\n"))
        .unwrap_or_default();

    format!(
        "{titulo} — {empresa} [{estado}]\n  {categoria} · publicada el {fecha}\n  {canal}\n{cierre}  {slug}\n",
        empresa = oferta.empresa,
        categoria = oferta.categoria.nombre,
        fecha = oferta.fecha_publicacion.format("%d/%m/%Y"),
        slug = style(&oferta.slug).dim(),
    )
}

/// Indicador visual de un envío en curso.
pub struct EnvioProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
}

impl EnvioProgress {
    /// Arranca el spinner; se llama al entrar en `Submitting`.
    pub fn start(mensaje: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(mensaje.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
        }
    }

    /// Corta el spinner con un tilde verde.
    pub fn exito(&self, mensaje: &str) {
        self.pb.finish_and_clear();
        println!("  {} {mensaje}", self.green.apply_to("✓"));
    }

    /// Corta el spinner con una cruz roja y el mensaje de error textual.
    pub fn fallo(&self, mensaje: &str) {
        self.pb.finish_and_clear();
        eprintln!("  {} {mensaje}", self.red.apply_to("✗"));
    }
}
