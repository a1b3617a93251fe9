//! YAML-backed profile storage.
//!
//! Every operation re-reads the file, applies one change, and writes the
//! whole set back through a temp file in the same directory, so a reader
//! never observes a partially written file. There is no locking: two
//! processes mutating the same file concurrently race, last writer wins.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::profiles::{Profile, ProfileSet, Removal};

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with an empty set if it does not exist yet.
    pub fn bootstrap(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            create_private_dir(parent).map_err(|err| Error::storage(parent, err))?;
        }
        debug!(path = %self.path.display(), "creating empty profile file");
        self.save(&ProfileSet::default())
    }

    pub fn load(&self) -> Result<ProfileSet> {
        self.bootstrap()?;
        let contents =
            fs::read_to_string(&self.path).map_err(|err| Error::storage(&self.path, err))?;
        if contents.trim().is_empty() {
            return Ok(ProfileSet::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn list(&self) -> Result<ProfileSet> {
        self.load()
    }

    pub fn resolve(&self, name: &str) -> Result<Profile> {
        let set = self.load()?;
        set.resolve(name).cloned()
    }

    /// Adds a profile and returns whether it is now the default.
    pub fn insert(
        &self,
        name: &str,
        access_key: &str,
        access_key_secret: &str,
        make_default: bool,
    ) -> Result<bool> {
        let mut set = self.load()?;
        let became_default =
            set.insert(Profile::new(name, access_key, access_key_secret), make_default)?;
        self.save(&set)?;
        info!(profile = name, is_default = became_default, "profile added");
        Ok(became_default)
    }

    pub fn remove(&self, name: &str) -> Result<Removal> {
        let mut set = self.load()?;
        let removal = set.remove(name)?;
        self.save(&set)?;
        info!(
            profile = name,
            new_default = removal.new_default.as_deref().unwrap_or(""),
            "profile removed"
        );
        Ok(removal)
    }

    pub fn set_default(&self, name: &str) -> Result<()> {
        let mut set = self.load()?;
        set.set_default(name)?;
        self.save(&set)?;
        info!(profile = name, "default profile set");
        Ok(())
    }

    fn save(&self, set: &ProfileSet) -> Result<()> {
        let contents = serde_yaml::to_string(set).map_err(|err| {
            Error::storage(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, err),
            )
        })?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // NamedTempFile is created with 0600 on unix, which the rename keeps.
        let mut temp_file = NamedTempFile::new_in(dir).map_err(|err| Error::storage(dir, err))?;
        let temp_path = temp_file.path().to_path_buf();
        temp_file
            .write_all(contents.as_bytes())
            .map_err(|err| Error::storage(&temp_path, err))?;
        temp_file
            .flush()
            .map_err(|err| Error::storage(&temp_path, err))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|err| Error::storage(&temp_path, err))?;
        temp_file
            .persist(&self.path)
            .map_err(|err| Error::storage(&self.path, err.error))?;
        Ok(())
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
