use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use bmi_model::Theme;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot serialize preferences: {0}")]
    Serialize(#[from] ron::Error),
    #[error("malformed preferences file: {0}")]
    Deserialize(#[from] ron::error::SpannedError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub updated_at: DateTime<Utc>,
}

impl Preferences {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            updated_at: Utc::now(),
        }
    }
}

#[mockall::automock]
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<Option<Preferences>, Error>;
    fn save(&self, preferences: &Preferences) -> Result<(), Error>;
}

/// Keeps preferences in a single RON file.
pub struct RonFileStore {
    path: PathBuf,
}

impl RonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for RonFileStore {
    fn load(&self) -> Result<Option<Preferences>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No preferences file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(ron::de::from_str(&contents)?))
    }

    fn save(&self, preferences: &Preferences) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = ron::ser::to_string_pretty(preferences, Default::default())?;
        fs::write(&self.path, contents)?;
        debug!("Saved {:?} to {}", preferences, self.path.display());
        Ok(())
    }
}
