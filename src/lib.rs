pub mod loaders;
pub mod output;

pub use glove_core::settings::{DuplicatePolicy, Settings};
pub use storage::{EmbeddingError, EmbeddingStore, LoadOptions};
