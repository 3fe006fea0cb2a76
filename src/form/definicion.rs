//! Carga de definiciones de oferta desde un archivo TOML.
//!
//! El subcomando `crear`/`editar` de la CLI recibe la oferta en un archivo
//! en lugar del formulario web. El logo se referencia por ruta
//! (`logo_path`) y se lee a memoria acá; el MIME sale de la extensión.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::types::{FormaPostulacion, Logo};
use crate::error::MadrynError;
use crate::form::schema::{EdicionOferta, NuevaOferta};

/// Definición cruda tal como viene del TOML. Los campos `id`, `habilitado`
/// y `logo_url` sólo tienen sentido para una edición.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinicionOferta {
    pub titulo: String,
    pub descripcion: String,
    pub empresa: String,
    pub categoria_id: String,
    pub forma_postulacion: FormaPostulacion,
    #[serde(default)]
    pub email_contacto: Option<String>,
    #[serde(default)]
    pub link_postulacion: Option<String>,
    /// Fecha de cierre como string ISO entre comillas (ej. "2026-09-30").
    #[serde(default)]
    pub fecha_cierre: Option<NaiveDate>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub habilitado: Option<bool>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Lee un archivo de definición y lo convierte en un formulario de alta.
pub fn cargar_nueva(path: &Path) -> Result<NuevaOferta, MadrynError> {
    let def = leer(path)?;
    let logo = cargar_logo(def.logo_path.as_deref())?;
    Ok(NuevaOferta {
        titulo: def.titulo,
        descripcion: def.descripcion,
        empresa: def.empresa,
        categoria_id: def.categoria_id,
        forma_postulacion: def.forma_postulacion,
        email_contacto: def.email_contacto,
        link_postulacion: def.link_postulacion,
        fecha_cierre: def.fecha_cierre,
        logo,
    })
}

/// Lee un archivo de definición y lo convierte en un formulario de
/// edición. `id` y `habilitado` son obligatorios en este flujo.
pub fn cargar_edicion(path: &Path) -> Result<EdicionOferta, MadrynError> {
    let def = leer(path)?;
    let id = def
        .id
        .ok_or_else(|| MadrynError::Definicion("una edición necesita el campo id".into()))?;
    let habilitado = def.habilitado.ok_or_else(|| {
        MadrynError::Definicion("una edición necesita el campo habilitado".into())
    })?;
    let logo = cargar_logo(def.logo_path.as_deref())?;
    Ok(EdicionOferta {
        id,
        habilitado,
        logo_url: def.logo_url,
        titulo: def.titulo,
        descripcion: def.descripcion,
        empresa: def.empresa,
        categoria_id: def.categoria_id,
        forma_postulacion: def.forma_postulacion,
        email_contacto: def.email_contacto,
        link_postulacion: def.link_postulacion,
        fecha_cierre: def.fecha_cierre,
        logo,
    })
}

fn leer(path: &Path) -> Result<DefinicionOferta, MadrynError> {
    let contenido = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contenido)?)
}

fn cargar_logo(path: Option<&str>) -> Result<Option<Logo>, MadrynError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = std::fs::read(path)?;
    let path = Path::new(path);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        otra => {
            return Err(MadrynError::Definicion(format!(
                "extensión de logo no soportada: \"{otra}\" (se admite png, jpg o jpeg)"
            )))
        }
    };
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("logo")
        .to_string();
    Ok(Some(Logo {
        file_name,
        mime: mime.to_string(),
        bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn escribir(dir: &Path, nombre: &str, contenido: &str) -> std::path::PathBuf {
        let path = dir.join(nombre);
        let mut archivo = std::fs::File::create(&path).unwrap();
        archivo.write_all(contenido.as_bytes()).unwrap();
        path
    }

    const ALTA_TOML: &str = r#"
        titulo = "Vendedor de mostrador"
        descripcion = "Jornada completa."
        empresa = "Ferretería El Tornillo"
        categoria_id = "3"
        forma_postulacion = "MAIL"
        email_contacto = "eltornillo@gmail.com"
        fecha_cierre = "2030-12-01"
    "#;

    #[test]
    fn carga_un_alta_completa() {
        let dir = tempfile::tempdir().unwrap();
        let path = escribir(dir.path(), "oferta.toml", ALTA_TOML);

        let form = cargar_nueva(&path).unwrap();
        assert_eq!(form.titulo, "Vendedor de mostrador");
        assert_eq!(form.forma_postulacion, FormaPostulacion::Mail);
        assert_eq!(
            form.fecha_cierre,
            Some(NaiveDate::from_ymd_opt(2030, 12, 1).unwrap())
        );
        assert!(form.logo.is_none());
    }

    #[test]
    fn carga_el_logo_desde_la_ruta() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("logo.png");
        std::fs::write(&logo_path, [0x89, b'P', b'N', b'G']).unwrap();
        let toml = format!("{ALTA_TOML}logo_path = \"{}\"\n", logo_path.display());
        let path = escribir(dir.path(), "oferta.toml", &toml);

        let form = cargar_nueva(&path).unwrap();
        let logo = form.logo.unwrap();
        assert_eq!(logo.mime, "image/png");
        assert_eq!(logo.file_name, "logo.png");
        assert_eq!(logo.bytes.len(), 4);
    }

    #[test]
    fn extension_de_logo_no_soportada_es_error() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("logo.gif");
        std::fs::write(&logo_path, [0u8; 4]).unwrap();
        let toml = format!("{ALTA_TOML}logo_path = \"{}\"\n", logo_path.display());
        let path = escribir(dir.path(), "oferta.toml", &toml);

        let err = cargar_nueva(&path).unwrap_err();
        assert!(matches!(err, MadrynError::Definicion(_)));
    }

    #[test]
    fn edicion_sin_id_es_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = escribir(dir.path(), "oferta.toml", ALTA_TOML);

        let err = cargar_edicion(&path).unwrap_err();
        assert!(matches!(err, MadrynError::Definicion(_)));
    }

    #[test]
    fn edicion_completa_carga() {
        let dir = tempfile::tempdir().unwrap();
        let toml = format!("{ALTA_TOML}id = \"of-7\"\nhabilitado = true\n");
        let path = escribir(dir.path(), "oferta.toml", &toml);

        let form = cargar_edicion(&path).unwrap();
        assert_eq!(form.id, "of-7");
        assert!(form.habilitado);
        assert_eq!(form.logo_url, None);
    }

    #[test]
    fn toml_invalido_es_error_de_parseo() {
        let dir = tempfile::tempdir().unwrap();
        let path = escribir(dir.path(), "oferta.toml", "titulo = [sin cerrar");

        let err = cargar_nueva(&path).unwrap_err();
        assert!(matches!(err, MadrynError::Toml(_)));
    }
}
