//! # Folio Library
//!
//! This library exposes the Folio server modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;

// Re-export folio_core for convenience
pub use folio_core;
