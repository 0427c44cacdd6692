//! Output module

pub mod text;

pub use text::TextOutput;
