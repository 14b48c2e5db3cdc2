//! Content module - the day document model, the data store and the
//! deterministic sample document

mod document;
pub mod loader;
mod sample;

pub use document::{CardItem, GenericItem, HighlightItem, NewsDocument, NewsletterItem, PaperItem};
pub use loader::DataStore;
pub use sample::sample_document;
