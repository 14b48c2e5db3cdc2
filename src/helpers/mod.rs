//! Helper functions shared by the renderer, assembler and archive index

mod date;
mod html;

pub use date::*;
pub use html::*;
