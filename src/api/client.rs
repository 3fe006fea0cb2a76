//! Cliente HTTP para los endpoints de ofertas del backend.
//!
//! [`OfertaClient`] traduce llamadas tipadas a requests `reqwest` y
//! normaliza las respuestas al contrato de [`ApiError`]. El token bearer se
//! pasa explícitamente en cada operación autenticada; el cliente no guarda
//! ninguna sesión.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};

use super::error::ApiError;
use super::types::{CamposEdicion, CamposOferta, Logo, Oferta, OfertaPayload};

pub struct OfertaClient {
    client: Client,
    base_url: String,
}

impl OfertaClient {
    /// Crea un cliente apuntando al origen del backend (ej.
    /// `https://api.madrynempleos.com.ar`). No se valida que el origen sea
    /// una URL bien formada; un origen vacío falla recién al enviar.
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");
        Self { client, base_url }
    }

    /// GET `/api/ofertas/{id}` — una oferta por su id.
    pub async fn fetch_by_id(&self, id: &str) -> Result<Oferta, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/ofertas/{id}", self.base_url))
            .send()
            .await?;
        decodificar_oferta(response).await
    }

    /// GET `/api/ofertas/detalles/{slug}` — una oferta por su slug público.
    pub async fn fetch_by_slug(&self, slug: &str) -> Result<Oferta, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/ofertas/detalles/{slug}", self.base_url))
            .send()
            .await?;
        decodificar_oferta(response).await
    }

    /// GET `/api/ofertas` — el listado completo, en el orden que devuelve
    /// el backend (no se reordena del lado del cliente).
    pub async fn fetch_all(&self) -> Result<Vec<Oferta>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/ofertas", self.base_url))
            .send()
            .await?;
        decodificar_listado(response).await
    }

    /// GET `/api/ofertas/mis-avisos` — las ofertas del usuario autenticado.
    pub async fn fetch_for_user(&self, token: &str) -> Result<Vec<Oferta>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/ofertas/mis-avisos", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        decodificar_listado(response).await
    }

    /// POST `/api/ofertas` — alta de una oferta.
    ///
    /// Arma un multipart con la parte `oferta` (JSON del payload de alta,
    /// con `fechaPublicacion` estampada acá) y una parte binaria `logo`
    /// opcional. Devuelve la oferta creada con el id asignado por el
    /// servidor.
    pub async fn create(
        &self,
        campos: &CamposOferta,
        logo: Option<&Logo>,
        token: &str,
    ) -> Result<Oferta, ApiError> {
        let payload = OfertaPayload::nueva(campos);
        let form = armar_multipart(&payload, logo, None)?;
        let response = self
            .client
            .post(format!("{}/api/ofertas", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        decodificar_oferta(response).await
    }

    /// PUT `/api/ofertas/{id}` — edición de una oferta existente.
    ///
    /// Además del payload (que acá lleva id y `habilitado` explícitos) y el
    /// logo opcional, el multipart incluye siempre una parte de texto
    /// `logoUrl`: la URL del logo ya almacenado, o el literal `"null"`
    /// cuando no hay ninguno. El centinela distingue "sin logo" de "campo
    /// omitido" del lado del servidor.
    pub async fn update(
        &self,
        edicion: &CamposEdicion,
        logo: Option<&Logo>,
        token: &str,
    ) -> Result<Oferta, ApiError> {
        let payload = OfertaPayload::edicion(edicion);
        let logo_url = edicion
            .logo_url
            .clone()
            .unwrap_or_else(|| "null".to_string());
        let form = armar_multipart(&payload, logo, Some(logo_url))?;
        let response = self
            .client
            .put(format!("{}/api/ofertas/{}", self.base_url, edicion.id))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        decodificar_oferta(response).await
    }

    /// DELETE `/api/ofertas/{id}` — borrado por el dueño.
    ///
    /// Un 404 se trata como éxito: borrar una oferta que ya no existe es un
    /// no-op idempotente, no un error.
    pub async fn delete_one(&self, id: &str, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/api/ofertas/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        Err(error_de_respuesta(status, response).await)
    }

    /// POST `/api/admin/ofertas/habilitar/{id}` — aprobación por un
    /// administrador; hace visible la oferta en los listados públicos.
    pub async fn admin_enable(&self, id: &str, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/admin/ofertas/habilitar/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        exigir_exito(response).await
    }

    /// DELETE `/api/admin/ofertas/{id}` — borrado por un administrador.
    /// A diferencia de [`delete_one`](Self::delete_one), acá un 404 es error.
    pub async fn admin_delete(&self, id: &str, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/api/admin/ofertas/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        exigir_exito(response).await
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }
}

fn armar_multipart(
    payload: &OfertaPayload,
    logo: Option<&Logo>,
    logo_url: Option<String>,
) -> Result<Form, ApiError> {
    let json = serde_json::to_string(payload)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    let mut form = Form::new().part("oferta", Part::text(json).mime_str("application/json")?);
    if let Some(logo) = logo {
        form = form.part(
            "logo",
            Part::bytes(logo.bytes.clone())
                .file_name(logo.file_name.clone())
                .mime_str(&logo.mime)?,
        );
    }
    if let Some(logo_url) = logo_url {
        form = form.text("logoUrl", logo_url);
    }
    Ok(form)
}

async fn decodificar_oferta(response: Response) -> Result<Oferta, ApiError> {
    let valor = decodificar_json(response).await?;
    if !valor.is_object() {
        return Err(ApiError::MalformedResponse(
            "se esperaba un objeto JSON".into(),
        ));
    }
    serde_json::from_value(valor).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

async fn decodificar_listado(response: Response) -> Result<Vec<Oferta>, ApiError> {
    let valor = decodificar_json(response).await?;
    if !valor.is_array() {
        return Err(ApiError::MalformedResponse(
            "se esperaba un array JSON".into(),
        ));
    }
    serde_json::from_value(valor).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

async fn decodificar_json(response: Response) -> Result<serde_json::Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(error_de_respuesta(status, response).await);
    }
    let texto = response.text().await?;
    serde_json::from_str(&texto).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

async fn exigir_exito(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(error_de_respuesta(status, response).await)
}

async fn error_de_respuesta(status: StatusCode, response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "sin cuerpo".to_string());
    ApiError::RequestFailed {
        status: status.as_u16(),
        body,
    }
}
