//! REST API surface for the hsmatch service.
//!
//! Thin HTTP glue over [`hsmatch_core`]: a health check and a single
//! `/classify` endpoint. The engine itself lives in the core crate.

pub mod rest;

pub use rest::{AppState, RestApi};
