//! Error types

mod catalog;
mod draft;

pub use catalog::*;
pub use draft::*;
