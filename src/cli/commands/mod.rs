//! Built-in commands, one module per category.

pub mod format;
pub mod stream;
pub mod wav;
