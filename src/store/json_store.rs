use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::store::{SnapshotStorage, StoreError};

pub const SNAPSHOT_FILE: &str = "board.json";

pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dayboard")
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("creating data directory {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE)
    }

    fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn write(&self, snapshot: &str) -> Result<(), StoreError> {
        let path = self.path();
        Self::write_atomic(&path, snapshot).map_err(|source| StoreError::Write { path, source })
    }
}
