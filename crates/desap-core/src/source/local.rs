//! Static JSON dataset used in place of the backend.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::DataSource;
use crate::config::settings::SourceKind;
use crate::error::{CoreError, CoreResult};
use crate::feed::sort_newest_first;
use crate::model::{InfoEntry, NewInfo, Person};
use crate::search::filter::SearchRequest;
use crate::search::page::Page;
use crate::search::resolver::resolve;

/// Shape of the dataset file: `{"data": {"content": [Person, ...]}}`.
#[derive(Deserialize)]
struct Dataset {
    data: DatasetBody,
}

#[derive(Deserialize)]
struct DatasetBody {
    content: Vec<Person>,
}

/// In-memory source backed by a fixed list of people.
///
/// Searches run through the resolver locally. Info entries submitted while
/// the process runs are kept in memory and lost on restart.
#[derive(Debug)]
pub struct LocalSource {
    people: Vec<Person>,
    infos: RwLock<Vec<InfoEntry>>,
    next_info_id: AtomicU64,
}

impl LocalSource {
    pub fn new(people: Vec<Person>) -> Self {
        Self::with_infos(people, Vec::new())
    }

    /// Seeds the info store as well.
    pub fn with_infos(people: Vec<Person>, infos: Vec<InfoEntry>) -> Self {
        let next = infos.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            people,
            infos: RwLock::new(infos),
            next_info_id: AtomicU64::new(next),
        }
    }

    /// Parses a dataset document.
    ///
    /// # Errors
    ///
    /// [`CoreError::Dataset`] when the JSON is malformed or not shaped as
    /// `{"data": {"content": [...]}}`.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).map_err(|e| CoreError::Dataset(e.to_string()))?;
        Ok(Self::new(dataset.data.content))
    }

    /// Reads and parses the dataset file at `path`.
    pub async fn load(path: &Path) -> CoreResult<Self> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.display().to_string()),
            _ => CoreError::Io(e),
        })?;
        let source = Self::from_json(&json)?;
        tracing::debug!(count = source.people.len(), "loaded local dataset");
        Ok(source)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }
}

#[async_trait]
impl DataSource for LocalSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Local
    }

    async fn search(&self, request: &SearchRequest) -> CoreResult<Page<Person>> {
        Ok(resolve(&self.people, &request.filter, request.page))
    }

    async fn person(&self, id: u64) -> CoreResult<Person> {
        self.people
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("pessoa {id}")))
    }

    async fn info_feed(&self, occurrence_id: u64) -> CoreResult<Vec<InfoEntry>> {
        let infos = self.infos.read().await;
        let matching: Vec<InfoEntry> = infos
            .iter()
            .filter(|i| i.occurrence_id == occurrence_id)
            .cloned()
            .collect();
        Ok(sort_newest_first(&matching))
    }

    async fn submit_info(&self, info: NewInfo) -> CoreResult<InfoEntry> {
        info.validate()?;

        let known = self.people.iter().any(|p| {
            p.last_occurrence
                .as_ref()
                .is_some_and(|o| o.id == info.occurrence_id)
        });
        if !known {
            return Err(CoreError::NotFound(format!(
                "ocorrência {}",
                info.occurrence_id
            )));
        }

        let entry = InfoEntry {
            occurrence_id: info.occurrence_id,
            text: info.text.trim().to_string(),
            date: info.date,
            id: self.next_info_id.fetch_add(1, Ordering::Relaxed),
            attachments: info.attachments.into_iter().map(|a| a.file_name).collect(),
        };

        self.infos.write().await.push(entry.clone());
        tracing::info!(id = entry.id, occurrence = entry.occurrence_id, "stored info entry");
        Ok(entry)
    }
}
