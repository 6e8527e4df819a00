use glove_core::{
    progress::{NoProgress, ProgressBarReporter},
    settings::Settings,
    utils::Timer,
};
use log::debug;
use std::io::{self, Write};
use std::path::Path;
use storage::{EmbeddingError, EmbeddingStore, LoadOptions};

/// Load the vector file named in the settings.
pub fn load_from_settings(settings: &Settings) -> Result<EmbeddingStore, EmbeddingError> {
    let options = LoadOptions::from(&settings.loader);
    load_vectors(&settings.data.vectors, &options, settings.loader.progress)
}

/// Load a vector file, optionally drawing a progress bar on stderr.
pub fn load_vectors(
    path: &Path,
    options: &LoadOptions,
    show_progress: bool,
) -> Result<EmbeddingStore, EmbeddingError> {
    let progress = if show_progress { Some(io::stderr()) } else { None };
    load_vectors_on(path, options, progress)
}

/// Load a vector file, drawing a progress bar on `progress` if given.
pub fn load_vectors_on<W: Write>(
    path: &Path,
    options: &LoadOptions,
    progress: Option<W>,
) -> Result<EmbeddingStore, EmbeddingError> {
    debug!("Load options: {:?}", options);
    let timer = Timer::start("Loading word vectors");
    let store = match progress {
        Some(handle) if path.exists() => {
            let mut bar = ProgressBarReporter::for_file_on(handle, path)?;
            EmbeddingStore::from_path_with(path, options, &mut bar)?
        }
        _ => EmbeddingStore::from_path_with(path, options, &mut NoProgress)?,
    };
    timer.finish();
    Ok(store)
}
