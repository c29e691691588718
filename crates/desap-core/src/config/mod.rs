//! Configuration management for desap.
//!
//! Backend location, search defaults and the choice of data source are
//! stored in a TOML file ([`settings::Config`]) and loaded at startup.

pub mod settings;
