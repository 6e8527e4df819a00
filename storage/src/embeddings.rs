use fnv::FnvHashMap;
use glove_core::lines::{open_buffered, LineReader};
use glove_core::progress::{NoProgress, Progress};
use glove_core::settings::{DuplicatePolicy, Loader};
use log::{info, warn};
use ndarray::{Array2, ArrayView1};
use std::io::BufRead;
use std::path::Path;

use crate::error::EmbeddingError;
use crate::parse::parse_line;

/// Options controlling how a vector file is loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOptions {
    pub duplicates: DuplicatePolicy,
    /// Lines between progress reports.
    pub progress_interval: usize,
}

impl LoadOptions {
    pub fn with_duplicates(self, duplicates: DuplicatePolicy) -> Self {
        LoadOptions { duplicates, ..self }
    }

    pub fn with_progress_interval(self, progress_interval: usize) -> Self {
        LoadOptions {
            progress_interval,
            ..self
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            duplicates: DuplicatePolicy::default(),
            progress_interval: 10_000,
        }
    }
}

impl From<&Loader> for LoadOptions {
    fn from(loader: &Loader) -> Self {
        LoadOptions {
            duplicates: loader.duplicates,
            progress_interval: loader.progress_interval,
        }
    }
}

/// Pretrained word vectors held in memory.
///
/// Row `i` of `vectors` is the vector for `itos[i]`, and `stoi` maps each
/// token back to its row. The store is immutable once loaded.
#[derive(Clone, Debug)]
pub struct EmbeddingStore {
    stoi: FnvHashMap<String, usize>,
    itos: Vec<String>,
    vectors: Array2<f32>,
}

impl EmbeddingStore {
    /// Load a vector file with default options and no progress reporting.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, EmbeddingError> {
        EmbeddingStore::from_path_with(path, &LoadOptions::default(), &mut NoProgress)
    }

    /// Load a vector file, reporting progress as lines are read.
    pub fn from_path_with<P, R>(
        path: P,
        options: &LoadOptions,
        progress: &mut R,
    ) -> Result<Self, EmbeddingError>
    where
        P: AsRef<Path>,
        R: Progress + ?Sized,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EmbeddingError::NotFound(path.to_path_buf()));
        }
        info!("Loading word vectors from {:?}", path);
        let reader = open_buffered(path)?;
        let store = EmbeddingStore::from_reader(reader, options, progress)?;
        info!(
            "Loaded {} words with dimension {}",
            store.len(),
            store.dim()
        );
        Ok(store)
    }

    /// Load vectors from any buffered reader of `<token> <f1> ... <fD>` lines.
    pub fn from_reader<B, R>(
        reader: B,
        options: &LoadOptions,
        progress: &mut R,
    ) -> Result<Self, EmbeddingError>
    where
        B: BufRead,
        R: Progress + ?Sized,
    {
        let mut lines = LineReader::new(reader);
        let rows = read_rows(&mut lines, options, progress);
        // Close the progress bar before any error is reported.
        progress.finish(lines.lines_read(), lines.bytes_read());
        let Rows {
            stoi,
            itos,
            data,
            dimension,
            duplicates,
        } = rows?;

        if duplicates > 0 {
            info!(
                "{} duplicate tokens resolved with policy {}",
                duplicates, options.duplicates
            );
        }

        let dim = match dimension {
            Some(dim) => dim,
            None => {
                return Err(EmbeddingError::format(
                    lines.lines_read(),
                    "no word vectors found",
                ))
            }
        };
        let vectors = Array2::from_shape_vec((itos.len(), dim), data)
            .map_err(|err| EmbeddingError::format(lines.lines_read(), err.to_string()))?;

        Ok(EmbeddingStore {
            stoi,
            itos,
            vectors,
        })
    }

    /// Return the vector for a token, if it is in the vocabulary.
    pub fn get_vector(&self, token: &str) -> Option<ArrayView1<f32>> {
        self.stoi.get(token).map(|&idx| self.vectors.row(idx))
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.stoi.get(token).copied()
    }

    pub fn token_at(&self, idx: usize) -> Option<&str> {
        self.itos.get(idx).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.stoi.contains_key(token)
    }

    /// Token to row index.
    pub fn stoi(&self) -> &FnvHashMap<String, usize> {
        &self.stoi
    }

    /// Row index to token.
    pub fn itos(&self) -> &[String] {
        &self.itos
    }

    /// The full `(len, dim)` matrix of vectors.
    pub fn vectors(&self) -> &Array2<f32> {
        &self.vectors
    }

    /// Number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.itos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    /// Length of every vector.
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.vectors.dim()
    }

    /// Iterate over `(token, vector)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayView1<f32>)> {
        self.itos
            .iter()
            .map(String::as_str)
            .zip(self.vectors.outer_iter())
    }

    /// Take the lookup tables and matrix out of the store.
    pub fn into_parts(self) -> (FnvHashMap<String, usize>, Vec<String>, Array2<f32>) {
        (self.stoi, self.itos, self.vectors)
    }
}

/// Tables and flat row data accumulated while reading a vector file.
struct Rows {
    stoi: FnvHashMap<String, usize>,
    itos: Vec<String>,
    data: Vec<f32>,
    dimension: Option<usize>,
    duplicates: usize,
}

fn read_rows<B, R>(
    lines: &mut LineReader<B>,
    options: &LoadOptions,
    progress: &mut R,
) -> Result<Rows, EmbeddingError>
where
    B: BufRead,
    R: Progress + ?Sized,
{
    let interval = options.progress_interval.max(1);
    let mut stoi: FnvHashMap<String, usize> = FnvHashMap::default();
    let mut itos: Vec<String> = Vec::new();
    let mut data: Vec<f32> = Vec::new();
    let mut dimension: Option<usize> = None;
    let mut duplicates = 0;

    loop {
        let line_no = lines.lines_read() + 1;
        let entry = match lines.next_line()? {
            Some(line) => parse_line(line, line_no)?,
            None => break,
        };

        if let Some((token, vector)) = entry {
            let dim = *dimension.get_or_insert(vector.len());
            if vector.len() != dim {
                return Err(EmbeddingError::format(
                    line_no,
                    format!(
                        "'{}' has {} vector components, expected {}",
                        token,
                        vector.len(),
                        dim
                    ),
                ));
            }

            match stoi.get(token) {
                None => {
                    stoi.insert(token.to_owned(), itos.len());
                    itos.push(token.to_owned());
                    data.extend_from_slice(&vector);
                }
                Some(&row) => {
                    duplicates += 1;
                    match options.duplicates {
                        DuplicatePolicy::KeepFirst => {
                            warn!(
                                "Line {}: skipping duplicate token '{}' (kept row {})",
                                line_no, token, row
                            );
                        }
                        DuplicatePolicy::KeepLast => {
                            warn!(
                                "Line {}: duplicate token '{}' overwrites row {}",
                                line_no, token, row
                            );
                            data[row * dim..(row + 1) * dim].copy_from_slice(&vector);
                        }
                        DuplicatePolicy::Reject => {
                            return Err(EmbeddingError::format(
                                line_no,
                                format!("duplicate token '{}' already loaded at row {}", token, row),
                            ));
                        }
                    }
                }
            }
        }

        if line_no % interval == 0 {
            progress.update(line_no, lines.bytes_read());
        }
    }
    Ok(Rows {
        stoi,
        itos,
        data,
        dimension,
        duplicates,
    })
}
