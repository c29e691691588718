//! Data sources answering search, detail and info-feed queries.
//!
//! [`remote::RemoteSource`] talks to the REST backend;
//! [`local::LocalSource`] serves a static JSON dataset for offline or demo
//! use. Both implement [`DataSource`], so callers never care which one is
//! active.

pub mod local;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::settings::{Config, SourceKind};
use crate::error::{CoreError, CoreResult};
use crate::model::{InfoEntry, NewInfo, Person};
use crate::search::filter::SearchRequest;
use crate::search::page::Page;

pub use local::LocalSource;
pub use remote::RemoteSource;

/// Anything that can answer the lookup operations.
///
/// Implementations perform no retries; a failed call surfaces as an error.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// One page of people matching the request's filter.
    async fn search(&self, request: &SearchRequest) -> CoreResult<Page<Person>>;

    /// A single person by id.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] when no record with that id exists, including
    /// when the source hands back a record with a different id.
    async fn person(&self, id: u64) -> CoreResult<Person>;

    /// Info entries for an occurrence, newest first.
    async fn info_feed(&self, occurrence_id: u64) -> CoreResult<Vec<InfoEntry>>;

    /// Validates and stores a new info entry, returning the created entry.
    async fn submit_info(&self, info: NewInfo) -> CoreResult<InfoEntry>;
}

/// Builds the data source selected by `config`.
///
/// # Errors
///
/// - [`CoreError::ConfigParse`] if a local source has no dataset path.
/// - Whatever loading the dataset or building the HTTP client returns.
pub async fn open(config: &Config) -> CoreResult<Arc<dyn DataSource>> {
    match config.source.kind {
        SourceKind::Remote => {
            tracing::info!(base_url = %config.backend.base_url, "using remote source");
            Ok(Arc::new(RemoteSource::new(&config.backend)?))
        }
        SourceKind::Local => {
            let path = config.source.dataset_path.as_deref().ok_or_else(|| {
                CoreError::ConfigParse(
                    "source.dataset_path is required when source.kind = \"local\"".to_string(),
                )
            })?;
            tracing::info!(path = %path.display(), "using local dataset");
            Ok(Arc::new(LocalSource::load(path).await?))
        }
    }
}

/// Rejects a detail response whose id is not the one asked for.
fn ensure_id(person: Person, id: u64) -> CoreResult<Person> {
    if person.id == id {
        Ok(person)
    } else {
        tracing::warn!(requested = id, returned = person.id, "detail id mismatch");
        Err(CoreError::NotFound(format!("pessoa {id}")))
    }
}
