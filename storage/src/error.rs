use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while building an `EmbeddingStore`.
#[derive(Debug)]
pub enum EmbeddingError {
    /// The vector file does not exist.
    NotFound(PathBuf),
    /// A line of the vector file could not be loaded.
    Format { line: usize, message: String },
    Io(io::Error),
}

impl EmbeddingError {
    pub fn format<S: Into<String>>(line: usize, message: S) -> Self {
        EmbeddingError::Format {
            line,
            message: message.into(),
        }
    }
}

impl Error for EmbeddingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EmbeddingError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            EmbeddingError::NotFound(path) => {
                write!(f, "Vector file not found at {}", path.display())
            }
            EmbeddingError::Format { line, message } => {
                write!(f, "Format error on line {}: {}", line, message)
            }
            EmbeddingError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<io::Error> for EmbeddingError {
    fn from(error: io::Error) -> Self {
        EmbeddingError::Io(error)
    }
}
