// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub max_steps: usize,
    pub playback: Playback,
    pub formatting: Formatting,
}

impl Settings {
    /// Loads the embedded defaults and layers the given files on top of them, in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for source in sources {
            log::debug!("add configuration source {:?} (required: {})", source.path, source.required);
            builder = builder.add_source(File::from(source.path).required(source.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn engine_options(&self) -> tracematch::Options {
        tracematch::Options {
            max_steps: self.max_steps,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load([]).expect("embedded default settings must be valid")
    }
}

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Playback {
    pub interval_ms: u64,
}

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Formatting {
    pub indent: String,
}

// ---

/// A configuration file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
