//! Draft data model

mod choice;
mod draft;
mod field;

pub use choice::*;
pub use draft::*;
pub use field::*;
