use std::path::PathBuf;

use clap::Parser;

use crate::store::FileProfileStore;

#[derive(Parser)]
pub struct ProfileArgs {
    /// TOML file with the battery profile.
    #[clap(long = "profile-path", env = "PROFILE_PATH", default_value = "solarguard.toml")]
    pub path: PathBuf,
}

impl ProfileArgs {
    pub fn store(&self) -> FileProfileStore {
        FileProfileStore::new(&self.path)
    }
}
