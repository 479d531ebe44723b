//! Form widgets.

mod choice;
mod text_input;

pub use choice::cycle;
pub use text_input::{TextEditResult, TextInput};
