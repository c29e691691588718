//! desap core library — UI-agnostic missing-persons lookup logic.
//!
//! `desap-core` holds everything a frontend needs to search people, show a
//! person's occurrence history and submit supplementary information. It is
//! decoupled from any UI or HTTP framework so that the web service
//! (`desap-web`) and any other frontend share the same logic.
//!
//! # Modules
//!
//! - [`model`] — Person, occurrence and info-entry records.
//! - [`search`] — Filter normalisation, result resolution, pagination and request sequencing.
//! - [`feed`] — Date parsing and newest-first ordering of info entries.
//! - [`source`] — The [`DataSource`] trait with remote (REST) and local (JSON) implementations.
//! - [`config`] — TOML-based settings.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod search;
pub mod source;

pub use config::settings::{Config, SourceKind};
pub use error::{CoreError, CoreResult};
pub use feed::{parse_timestamp, prepend, sort_newest_first};
pub use model::{Attachment, InfoEntry, NewInfo, Occurrence, Person, Sex, Status};
pub use search::filter::{normalize, RawFilter, SearchFilter, SearchRequest};
pub use search::page::{paginate, Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use search::resolver::{filter_people, resolve};
pub use search::sequence::{RequestSequencer, Ticket};
pub use source::{DataSource, LocalSource, RemoteSource};
