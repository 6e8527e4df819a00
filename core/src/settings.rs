use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How a vector file with a token appearing on more than one line is loaded.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(try_from = "String", rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the row of the first occurrence and skip later ones.
    KeepFirst,
    /// Overwrite the first occurrence's row with the later vector.
    KeepLast,
    /// Fail the load.
    Reject,
}

impl DuplicatePolicy {
    /// Accepted spellings, in config files and on the command line.
    pub const NAMES: [&'static str; 3] = ["keep_first", "keep_last", "reject"];
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::KeepFirst
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep_first" => Ok(DuplicatePolicy::KeepFirst),
            "keep_last" => Ok(DuplicatePolicy::KeepLast),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!(
                "unknown duplicate policy '{}' (expected one of {})",
                other,
                DuplicatePolicy::NAMES.join(", ")
            )),
        }
    }
}

impl TryFrom<String> for DuplicatePolicy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DuplicatePolicy::KeepFirst => write!(f, "keep_first"),
            DuplicatePolicy::KeepLast => write!(f, "keep_last"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Configuration for word vector sources.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Data {
    pub vectors: PathBuf,
}

fn default_progress() -> bool {
    true
}

fn default_progress_interval() -> usize {
    10_000
}

/// Configuration for the vector file loader.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Loader {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    /// Draw a progress bar while loading.
    #[serde(default = "default_progress")]
    pub progress: bool,
    /// Lines between progress reports.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for Loader {
    fn default() -> Self {
        Loader {
            duplicates: DuplicatePolicy::default(),
            progress: default_progress(),
            progress_interval: default_progress_interval(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Settings {
    pub data: Data,
    #[serde(default)]
    pub loader: Loader,
}

impl Settings {
    /// Read settings from a config file, with `GLOVE_`-prefixed environment
    /// variables taking precedence (e.g. `GLOVE_LOADER__PROGRESS=false`).
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let mut settings = Config::new();
        settings.merge(File::with_name(path))?;
        settings.merge(Environment::with_prefix("GLOVE").separator("__"))?;
        settings.try_into()
    }

    /// Read settings from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let mut settings = Config::new();
        settings.merge(File::from_str(toml, FileFormat::Toml))?;
        settings.try_into()
    }
}
