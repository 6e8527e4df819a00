pub mod lines;
pub mod progress;
pub mod settings;
pub mod utils;

pub use crate::progress::{NoProgress, Progress, ProgressBarReporter};
pub use crate::settings::{DuplicatePolicy, Settings};
