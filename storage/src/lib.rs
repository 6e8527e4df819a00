pub mod embeddings;
pub mod error;
pub mod parse;

pub use crate::embeddings::{EmbeddingStore, LoadOptions};
pub use crate::error::EmbeddingError;
pub use glove_core::settings::DuplicatePolicy;
