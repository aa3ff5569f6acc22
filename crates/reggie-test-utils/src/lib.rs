//! Shared test utilities for the reggie workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`host`] — [`TestHost`], a temporary directory laid out like a host's `/etc`

pub mod host;

pub use host::TestHost;
