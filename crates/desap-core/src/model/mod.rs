//! Record types exchanged with the backend.
//!
//! Every schema is closed: unknown fields in a payload are ignored, and
//! optional fields are explicit `Option`s. Wire names follow the backend's
//! camelCase contract while the Rust field names describe what they hold.

pub mod info;
pub mod occurrence;
pub mod person;

pub use info::{Attachment, InfoEntry, NewInfo};
pub use occurrence::{Interview, Occurrence, Poster, PosterKind};
pub use person::{Person, Sex, Status};
