//! Tipos de datos para las ofertas de empleo y sus payloads HTTP.
//!
//! Todas las structs derivan `Serialize`/`Deserialize` según corresponda,
//! con los nombres de campo en camelCase que usa el backend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Tamaño máximo permitido para el logo, en bytes (5 MiB).
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// Canal de postulación de una oferta: por mail o por link externo.
///
/// Es el discriminador que decide cuál de `emailContacto` /
/// `linkPostulacion` va poblado; el otro debe quedar en null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormaPostulacion {
    #[serde(rename = "MAIL")]
    Mail,
    #[serde(rename = "LINK")]
    Link,
}

impl std::fmt::Display for FormaPostulacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormaPostulacion::Mail => write!(f, "MAIL"),
            FormaPostulacion::Link => write!(f, "LINK"),
        }
    }
}

/// Categoría de empleo, de la lista fija que provee el backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: String,
    pub nombre: String,
}

/// Una oferta de empleo tal como la devuelve el backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Oferta {
    /// Identificador opaco asignado por el servidor.
    pub id: String,
    /// Slug estable para URLs públicas.
    pub slug: String,
    pub titulo: String,
    pub descripcion: String,
    pub empresa: String,
    pub categoria: Categoria,
    pub forma_postulacion: FormaPostulacion,
    #[serde(default)]
    pub email_contacto: Option<String>,
    #[serde(default)]
    pub link_postulacion: Option<String>,
    /// Timestamp de publicación, asignado por el servidor.
    pub fecha_publicacion: DateTime<Utc>,
    #[serde(default)]
    pub fecha_cierre: Option<NaiveDate>,
    /// Dueño de la oferta; se fija al crearla y no cambia.
    pub usuario_id: String,
    /// Flag de moderación: false hasta que un administrador la apruebe.
    pub habilitado: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Referencia `{ "id": ... }` usada para autor y categoría en los payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: String,
}

/// Campos de una oferta listos para enviar al backend, ya validados.
#[derive(Debug, Clone)]
pub struct CamposOferta {
    pub titulo: String,
    pub descripcion: String,
    pub empresa: String,
    pub categoria_id: String,
    pub usuario_id: String,
    pub forma_postulacion: FormaPostulacion,
    pub email_contacto: Option<String>,
    pub link_postulacion: Option<String>,
    pub fecha_cierre: Option<NaiveDate>,
}

/// Campos adicionales que sólo lleva una edición: el id existente, el flag
/// de habilitación y la URL del logo ya almacenado (si hay).
#[derive(Debug, Clone)]
pub struct CamposEdicion {
    pub id: String,
    pub habilitado: bool,
    pub logo_url: Option<String>,
    pub campos: CamposOferta,
}

/// Documento JSON enviado en la parte `oferta` del multipart.
///
/// El canal no seleccionado por `formaPostulacion` se serializa siempre como
/// `null` explícito, nunca se omite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfertaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub titulo: String,
    pub descripcion: String,
    pub empresa: String,
    pub categoria: IdRef,
    pub usuario: IdRef,
    pub forma_postulacion: FormaPostulacion,
    pub email_contacto: Option<String>,
    pub link_postulacion: Option<String>,
    pub fecha_publicacion: DateTime<Utc>,
    pub fecha_cierre: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habilitado: Option<bool>,
}

impl OfertaPayload {
    /// Arma el payload de alta: estampa `fechaPublicacion` con el reloj
    /// actual, referencia autor y categoría por `{id}` y anula el canal no
    /// seleccionado.
    pub fn nueva(campos: &CamposOferta) -> Self {
        let (email_contacto, link_postulacion) = canal_exclusivo(campos);
        Self {
            id: None,
            titulo: campos.titulo.clone(),
            descripcion: campos.descripcion.clone(),
            empresa: campos.empresa.clone(),
            categoria: IdRef {
                id: campos.categoria_id.clone(),
            },
            usuario: IdRef {
                id: campos.usuario_id.clone(),
            },
            forma_postulacion: campos.forma_postulacion,
            email_contacto,
            link_postulacion,
            fecha_publicacion: Utc::now(),
            fecha_cierre: campos.fecha_cierre,
            habilitado: None,
        }
    }

    /// Arma el payload de edición: igual que el de alta pero con el id
    /// existente y el flag `habilitado` explícito.
    pub fn edicion(edicion: &CamposEdicion) -> Self {
        let mut payload = Self::nueva(&edicion.campos);
        payload.id = Some(edicion.id.clone());
        payload.habilitado = Some(edicion.habilitado);
        payload
    }
}

// Exactamente uno de los dos campos queda poblado, según el discriminador.
fn canal_exclusivo(campos: &CamposOferta) -> (Option<String>, Option<String>) {
    match campos.forma_postulacion {
        FormaPostulacion::Mail => (campos.email_contacto.clone(), None),
        FormaPostulacion::Link => (None, campos.link_postulacion.clone()),
    }
}

/// Archivo de logo en memoria, pendiente de subir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Mensaje del formulario de contacto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MensajeContacto {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub mensaje: String,
}

/// Capacidades de sesión inyectadas en cada operación autenticada.
///
/// El cliente nunca lee estado global de autenticación; sólo consume
/// el id del usuario actual y su token bearer.
#[derive(Debug, Clone)]
pub struct Sesion {
    pub usuario_id: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campos_mail() -> CamposOferta {
        CamposOferta {
            titulo: "Desarrollador Backend".into(),
            descripcion: "Puesto full time".into(),
            empresa: "Aluar".into(),
            categoria_id: "7".into(),
            usuario_id: "u-42".into(),
            forma_postulacion: FormaPostulacion::Mail,
            email_contacto: Some("rrhh@aluar.com.ar".into()),
            link_postulacion: Some("https://no-deberia-ir.example".into()),
            fecha_cierre: None,
        }
    }

    #[test]
    fn payload_mail_anula_link() {
        let payload = OfertaPayload::nueva(&campos_mail());
        assert_eq!(payload.email_contacto.as_deref(), Some("rrhh@aluar.com.ar"));
        assert_eq!(payload.link_postulacion, None);
    }

    #[test]
    fn payload_link_anula_email() {
        let mut campos = campos_mail();
        campos.forma_postulacion = FormaPostulacion::Link;
        campos.link_postulacion = Some("https://aluar.com.ar/empleos".into());
        let payload = OfertaPayload::nueva(&campos);
        assert_eq!(payload.email_contacto, None);
        assert_eq!(
            payload.link_postulacion.as_deref(),
            Some("https://aluar.com.ar/empleos")
        );
    }

    #[test]
    fn payload_serializa_canal_inactivo_como_null() {
        let payload = OfertaPayload::nueva(&campos_mail());
        let json = serde_json::to_value(&payload).unwrap();
        // El campo inactivo va como null explícito, nunca se omite.
        assert!(json.get("linkPostulacion").unwrap().is_null());
        assert_eq!(json["emailContacto"], "rrhh@aluar.com.ar");
        // El alta no lleva ni id ni habilitado.
        assert!(json.get("id").is_none());
        assert!(json.get("habilitado").is_none());
    }

    #[test]
    fn payload_edicion_lleva_id_y_habilitado() {
        let edicion = CamposEdicion {
            id: "of-9".into(),
            habilitado: true,
            logo_url: None,
            campos: campos_mail(),
        };
        let payload = OfertaPayload::edicion(&edicion);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], "of-9");
        assert_eq!(json["habilitado"], true);
    }

    #[test]
    fn payload_usa_referencias_por_id() {
        let payload = OfertaPayload::nueva(&campos_mail());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["categoria"], serde_json::json!({ "id": "7" }));
        assert_eq!(json["usuario"], serde_json::json!({ "id": "u-42" }));
    }

    #[test]
    fn oferta_deserializa_formato_del_backend() {
        let json = r#"{
            "id": "of-1",
            "slug": "desarrollador-backend-aluar",
            "titulo": "Desarrollador Backend",
            "descripcion": "<p>Puesto full time</p>",
            "empresa": "Aluar",
            "categoria": { "id": "7", "nombre": "Tecnología" },
            "formaPostulacion": "MAIL",
            "emailContacto": "rrhh@aluar.com.ar",
            "linkPostulacion": null,
            "fechaPublicacion": "2026-08-15T12:30:00Z",
            "fechaCierre": "2026-09-30",
            "usuarioId": "u-42",
            "habilitado": false,
            "logoUrl": null
        }"#;
        let oferta: Oferta = serde_json::from_str(json).unwrap();
        assert_eq!(oferta.slug, "desarrollador-backend-aluar");
        assert_eq!(oferta.forma_postulacion, FormaPostulacion::Mail);
        assert_eq!(oferta.link_postulacion, None);
        assert_eq!(
            oferta.fecha_cierre,
            Some(NaiveDate::from_ymd_opt(2026, 9, 30).unwrap())
        );
        assert!(!oferta.habilitado);
    }

    #[test]
    fn oferta_tolera_campos_opcionales_ausentes() {
        let json = r#"{
            "id": "of-2",
            "slug": "cajero-la-anonima",
            "titulo": "Cajero",
            "descripcion": "Medio tiempo",
            "empresa": "La Anónima",
            "categoria": { "id": "3", "nombre": "Comercio" },
            "formaPostulacion": "LINK",
            "linkPostulacion": "https://laanonima.com.ar/trabaja",
            "fechaPublicacion": "2026-08-20T09:00:00Z",
            "usuarioId": "u-7",
            "habilitado": true
        }"#;
        let oferta: Oferta = serde_json::from_str(json).unwrap();
        assert_eq!(oferta.email_contacto, None);
        assert_eq!(oferta.fecha_cierre, None);
        assert_eq!(oferta.logo_url, None);
    }

    #[test]
    fn forma_postulacion_display() {
        assert_eq!(FormaPostulacion::Mail.to_string(), "MAIL");
        assert_eq!(FormaPostulacion::Link.to_string(), "LINK");
    }
}
