//! Search over person records.
//!
//! Raw form values are turned into a canonical [`filter::SearchFilter`] by
//! [`filter::normalize`], then [`resolver::resolve`] applies it to an
//! in-memory dataset and cuts out the requested [`page::Page`]. Remote
//! sources forward the canonical filter to the backend instead.
//! [`sequence::RequestSequencer`] lets a frontend drop responses to
//! superseded requests.

pub mod filter;
pub mod page;
pub mod resolver;
pub mod sequence;
