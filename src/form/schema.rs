//! Reglas de validación del formulario de oferta (alta y edición).
//!
//! Las reglas por campo (requerido, largo máximo, allowlist de caracteres)
//! van como atributos `validator` sobre [`NuevaOferta`] y [`EdicionOferta`];
//! las reglas cruzadas (canal de postulación, fecha de cierre, logo) van en
//! la función de schema, que corre recién cuando las de campo pasan. La
//! validación es pura: se puede re-ejecutar en cada cambio de campo y una
//! vez más al enviar.

use chrono::{NaiveDate, Utc};
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::api::types::{
    CamposEdicion, CamposOferta, FormaPostulacion, Logo, MAX_LOGO_BYTES,
};

const LETRAS_ACENTUADAS: &str = "áéíóúÁÉÍÓÚñÑüÜ";
const PUNTUACION_BASE: &str = ".()&";
// El flujo de edición admite además "," y "-" en el nombre de empresa.
// Divergencia heredada entre alta y edición; se conserva tal cual hasta
// tener una definición de producto, no se unifica.
const PUNTUACION_EMPRESA_EDICION: &str = ".()&,-";

const MIMES_LOGO: &[&str] = &["image/png", "image/jpeg", "image/jpg"];

/// Formulario de alta de oferta.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validar_nueva"))]
pub struct NuevaOferta {
    #[validate(
        custom(function = "titulo_valido"),
        length(max = 150, message = "El título no puede superar los 150 caracteres")
    )]
    pub titulo: String,
    #[validate(
        custom(function = "descripcion_valida"),
        length(max = 5000, message = "La descripción no puede superar los 5000 caracteres")
    )]
    pub descripcion: String,
    #[validate(
        custom(function = "empresa_valida"),
        length(max = 150, message = "El nombre de la empresa no puede superar los 150 caracteres")
    )]
    pub empresa: String,
    #[validate(length(min = 1, message = "Elegí una categoría"))]
    pub categoria_id: String,
    pub forma_postulacion: FormaPostulacion,
    pub email_contacto: Option<String>,
    pub link_postulacion: Option<String>,
    pub fecha_cierre: Option<NaiveDate>,
    pub logo: Option<Logo>,
}

/// Formulario de edición: los mismos campos del alta más el id existente,
/// el flag de habilitación y la URL del logo ya subido.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validar_edicion"))]
pub struct EdicionOferta {
    pub id: String,
    pub habilitado: bool,
    pub logo_url: Option<String>,
    #[validate(
        custom(function = "titulo_valido"),
        length(max = 150, message = "El título no puede superar los 150 caracteres")
    )]
    pub titulo: String,
    #[validate(
        custom(function = "descripcion_valida"),
        length(max = 5000, message = "La descripción no puede superar los 5000 caracteres")
    )]
    pub descripcion: String,
    #[validate(
        custom(function = "empresa_valida_edicion"),
        length(max = 150, message = "El nombre de la empresa no puede superar los 150 caracteres")
    )]
    pub empresa: String,
    #[validate(length(min = 1, message = "Elegí una categoría"))]
    pub categoria_id: String,
    pub forma_postulacion: FormaPostulacion,
    pub email_contacto: Option<String>,
    pub link_postulacion: Option<String>,
    pub fecha_cierre: Option<NaiveDate>,
    pub logo: Option<Logo>,
}

impl NuevaOferta {
    /// Convierte el formulario validado en los campos que consume el
    /// cliente HTTP, inyectando el id del usuario autenticado.
    pub fn a_campos(&self, usuario_id: &str) -> CamposOferta {
        CamposOferta {
            titulo: self.titulo.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            empresa: self.empresa.trim().to_string(),
            categoria_id: self.categoria_id.clone(),
            usuario_id: usuario_id.to_string(),
            forma_postulacion: self.forma_postulacion,
            email_contacto: self.email_contacto.clone(),
            link_postulacion: self.link_postulacion.clone(),
            fecha_cierre: self.fecha_cierre,
        }
    }
}

impl EdicionOferta {
    pub fn a_campos(&self, usuario_id: &str) -> CamposEdicion {
        CamposEdicion {
            id: self.id.clone(),
            habilitado: self.habilitado,
            logo_url: self.logo_url.clone(),
            campos: CamposOferta {
                titulo: self.titulo.trim().to_string(),
                descripcion: self.descripcion.trim().to_string(),
                empresa: self.empresa.trim().to_string(),
                categoria_id: self.categoria_id.clone(),
                usuario_id: usuario_id.to_string(),
                forma_postulacion: self.forma_postulacion,
                email_contacto: self.email_contacto.clone(),
                link_postulacion: self.link_postulacion.clone(),
                fecha_cierre: self.fecha_cierre,
            },
        }
    }
}

fn error(codigo: &'static str, mensaje: &'static str) -> ValidationError {
    let mut err = ValidationError::new(codigo);
    err.message = Some(mensaje.into());
    err
}

// Allowlist: letras y dígitos ASCII, espacios, el set fijo de acentuadas
// del español y la puntuación que reciba cada variante.
fn texto_permitido(valor: &str, puntuacion: &str) -> bool {
    valor.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || c.is_whitespace()
            || LETRAS_ACENTUADAS.contains(c)
            || puntuacion.contains(c)
    })
}

fn titulo_valido(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        return Err(error("titulo_requerido", "Ingresá un título"));
    }
    if !texto_permitido(valor, PUNTUACION_BASE) {
        return Err(error(
            "titulo_caracteres",
            "El título contiene caracteres no permitidos",
        ));
    }
    Ok(())
}

fn descripcion_valida(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        return Err(error("descripcion_requerida", "Ingresá una descripción"));
    }
    Ok(())
}

fn empresa_valida(valor: &str) -> Result<(), ValidationError> {
    empresa_con_puntuacion(valor, PUNTUACION_BASE)
}

fn empresa_valida_edicion(valor: &str) -> Result<(), ValidationError> {
    empresa_con_puntuacion(valor, PUNTUACION_EMPRESA_EDICION)
}

fn empresa_con_puntuacion(valor: &str, puntuacion: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        return Err(error("empresa_requerida", "Ingresá el nombre de la empresa"));
    }
    if !texto_permitido(valor, puntuacion) {
        return Err(error(
            "empresa_caracteres",
            "El nombre de la empresa contiene caracteres no permitidos",
        ));
    }
    Ok(())
}

fn validar_nueva(form: &NuevaOferta) -> Result<(), ValidationError> {
    validar_canal(
        form.forma_postulacion,
        form.email_contacto.as_deref(),
        form.link_postulacion.as_deref(),
    )?;
    validar_fecha_cierre(form.fecha_cierre)?;
    validar_logo(form.logo.as_ref())
}

fn validar_edicion(form: &EdicionOferta) -> Result<(), ValidationError> {
    validar_canal(
        form.forma_postulacion,
        form.email_contacto.as_deref(),
        form.link_postulacion.as_deref(),
    )?;
    validar_fecha_cierre(form.fecha_cierre)?;
    validar_logo(form.logo.as_ref())
}

// Con canal MAIL sólo importa el email; con LINK sólo el link. El campo
// del canal no seleccionado se ignora acá y se anula en el payload.
fn validar_canal(
    forma: FormaPostulacion,
    email: Option<&str>,
    link: Option<&str>,
) -> Result<(), ValidationError> {
    match forma {
        FormaPostulacion::Mail => {
            let email = email.unwrap_or("");
            if email.trim().is_empty() {
                return Err(error("email_requerido", "Ingresá un email de contacto"));
            }
            if !email.validate_email() {
                return Err(error("email_invalido", "El email de contacto no es válido"));
            }
        }
        FormaPostulacion::Link => {
            let link = link.unwrap_or("");
            if link.trim().is_empty() {
                return Err(error("link_requerido", "Ingresá el link de postulación"));
            }
            if !link.validate_url() {
                return Err(error("link_invalido", "El link de postulación no es válido"));
            }
        }
    }
    Ok(())
}

// Inclusivo en el borde: una fecha de cierre igual a hoy es válida.
fn validar_fecha_cierre(fecha: Option<NaiveDate>) -> Result<(), ValidationError> {
    if let Some(fecha) = fecha {
        if fecha < Utc::now().date_naive() {
            return Err(error(
                "fecha_cierre_pasada",
                "La fecha de cierre no puede ser anterior a hoy",
            ));
        }
    }
    Ok(())
}

fn validar_logo(logo: Option<&Logo>) -> Result<(), ValidationError> {
    if let Some(logo) = logo {
        if logo.bytes.len() > MAX_LOGO_BYTES {
            return Err(error("logo_grande", "El logo no puede superar los 5 MB"));
        }
        if !MIMES_LOGO.contains(&logo.mime.as_str()) {
            return Err(error("logo_formato", "El logo debe ser PNG o JPEG"));
        }
    }
    Ok(())
}

/// Aplana los errores de validación en mensajes listos para mostrar junto
/// al formulario, uno por regla incumplida.
pub fn mensajes(errores: &ValidationErrors) -> Vec<String> {
    let mut salida = Vec::new();
    for (campo, errores) in errores.field_errors() {
        for e in errores.iter() {
            let mensaje = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Error de validación en el campo {campo}"));
            salida.push(mensaje);
        }
    }
    salida.sort();
    salida
}
