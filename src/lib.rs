//! Color Remover
//!
//! Command-line glue around the `recolor` engine: option validation, image
//! decoding and encoding, and the processing service.
//! This library exposes modules for integration testing.

pub mod docs;
pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
