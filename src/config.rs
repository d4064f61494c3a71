// std imports
use std::path::PathBuf;

// local imports
use crate::{
    error::Result,
    settings::{Settings, SourceFile},
};

// ---

pub const APP_NAME: &str = "rewind";
pub const ENV_CONFIG: &str = "REWIND_CONFIG";

/// Starts building a configuration loader for the given explicitly requested files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader {
        paths: paths.into_iter().map(Into::into).collect(),
        no_default: false,
    }
}

/// Returns the location of the user configuration file.
///
/// The location can be overridden with the `REWIND_CONFIG` environment variable.
pub fn default_path() -> Option<PathBuf> {
    match std::env::var_os(ENV_CONFIG) {
        Some(path) if !path.is_empty() => Some(path.into()),
        _ => dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml")),
    }
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    /// Skips the user configuration file, so only the embedded defaults and explicit files apply.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        let default = if self.no_default {
            None
        } else {
            default_path().map(|path| SourceFile::new(path).required(false))
        };

        Settings::load(default.into_iter().chain(self.paths.into_iter().map(SourceFile::new)))
    }
}
