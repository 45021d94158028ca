//! The recolor engine.
//!
//! This module provides the [`Recolorer`] builder, its [`RecolorMode`] and
//! [`Tolerance`] settings, and the crate-wide [`RecolorError`].

mod error;
mod mode;
mod recolorer;

pub use error::RecolorError;
pub use mode::{RecolorMode, Tolerance};
pub use recolorer::{RecolorStats, Recolorer};
