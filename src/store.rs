//! Battery profile persistence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{core::battery::BatteryProfile, prelude::*};

pub trait ProfileStore {
    fn load(&self) -> Result<Option<BatteryProfile>>;

    fn save(&self, profile: &BatteryProfile) -> Result;
}

#[derive(Serialize, Deserialize)]
struct Document {
    #[serde(default, rename = "solar_guard_specs")]
    profile: Option<BatteryProfile>,
}

/// Single TOML document, rewritten as a whole on every save.
#[must_use]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for FileProfileStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<BatteryProfile>> {
        if !self.path.is_file() {
            debug!("no stored profile");
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let document: Document = toml::from_str(&contents)
            .with_context(|| format!("malformed profile in `{}`", self.path.display()))?;
        Ok(document.profile)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, profile: &BatteryProfile) -> Result {
        let document = Document { profile: Some(*profile) };
        fs::write(&self.path, toml::to_string(&document)?)
            .with_context(|| format!("failed to write `{}`", self.path.display()))?;
        info!(?profile, "saved the battery profile");
        Ok(())
    }
}
