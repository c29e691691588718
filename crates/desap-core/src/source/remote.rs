//! REST backend client built on `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ensure_id, DataSource};
use crate::config::settings::{BackendConfig, SourceKind};
use crate::error::{CoreError, CoreResult};
use crate::feed::sort_newest_first;
use crate::model::{InfoEntry, NewInfo, Person};
use crate::search::filter::SearchRequest;
use crate::search::page::Page;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const SEARCH_PATH: &str = "pessoas/aberto/filtro";
const PERSON_PATH: &str = "pessoas";
const INFO_PATH: &str = "ocorrencias/informacoes-desaparecido";

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Data source that forwards every call to the backend.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: Client,
    base_url: String,
}

impl RemoteSource {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// [`CoreError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: &BackendConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turns a non-2xx response into [`CoreError::Status`], then decodes JSON.
async fn decode<T: DeserializeOwned>(response: Response) -> CoreResult<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message);
        tracing::warn!(status = status.as_u16(), ?message, "backend error");
        return Err(CoreError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| CoreError::Dataset(e.to_string()))
}

fn attachment_part(attachment: crate::model::Attachment) -> CoreResult<Part> {
    let part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
    match attachment.content_type {
        Some(ct) => part
            .mime_str(&ct)
            .map_err(|e| CoreError::Validation(format!("tipo de anexo inválido: {e}"))),
        None => Ok(part),
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Remote
    }

    async fn search(&self, request: &SearchRequest) -> CoreResult<Page<Person>> {
        let query = request.filter.query_pairs(request.page);
        tracing::debug!(?query, "remote search");

        let response = self
            .client
            .get(self.url(SEARCH_PATH))
            .query(&query)
            .send()
            .await?;
        decode(response).await
    }

    async fn person(&self, id: u64) -> CoreResult<Person> {
        let response = self
            .client
            .get(self.url(&format!("{PERSON_PATH}/{id}")))
            .send()
            .await?;
        let person = decode::<Person>(response).await.map_err(|e| match e {
            CoreError::Status { status: 404, .. } => CoreError::NotFound(format!("pessoa {id}")),
            other => other,
        })?;
        ensure_id(person, id)
    }

    async fn info_feed(&self, occurrence_id: u64) -> CoreResult<Vec<InfoEntry>> {
        let response = self
            .client
            .get(self.url(INFO_PATH))
            .query(&[("ocorrenciaId", occurrence_id)])
            .send()
            .await?;
        let entries: Vec<InfoEntry> = decode(response).await?;
        Ok(sort_newest_first(&entries))
    }

    async fn submit_info(&self, info: NewInfo) -> CoreResult<InfoEntry> {
        info.validate()?;

        let mut form = Form::new()
            .text("ocoId", info.occurrence_id.to_string())
            .text("informacao", info.text.trim().to_string())
            .text("data", info.date);
        for attachment in info.attachments {
            form = form.part("anexos", attachment_part(attachment)?);
        }

        let response = self
            .client
            .post(self.url(INFO_PATH))
            .multipart(form)
            .send()
            .await?;
        let entry: InfoEntry = decode(response).await?;
        tracing::info!(id = entry.id, occurrence = entry.occurrence_id, "info entry submitted");
        Ok(entry)
    }
}
