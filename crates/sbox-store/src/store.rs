//! Persisting table sets to a single file.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::info;
use sbox_core::Tables;

use crate::codec::{decode, encode, BLOB_LEN};
use crate::error::StoreError;

/// Directory used when none is configured.
pub const DEFAULT_DIR: &str = "out";

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "Sbox_InvSbox_Rcon.txt";

/// Location of the persisted tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Output directory, created on write if absent.
    pub dir: PathBuf,
    /// File name inside `dir`.
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            file_name: DEFAULT_FILE_NAME.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Uses `dir` with the default file name.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the table file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Creates `dir` (and its parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.is_dir() {
        return Ok(());
    }
    info!("directory does not exist, creating: {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| StoreError::DirectoryCreateFailure {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encodes `tables` and writes them to the configured file, replacing it.
///
/// Returns the path written.
pub fn write_tables(config: &StoreConfig, tables: &Tables) -> Result<PathBuf, StoreError> {
    ensure_dir(&config.dir)?;
    let path = config.path();
    let bytes = encode(tables).map_err(StoreError::Encode)?;

    let mut file = File::create(&path).map_err(|source| StoreError::FileOpenFailure {
        path: path.clone(),
        source,
    })?;
    file.write_all(&bytes)
        .and_then(|()| file.sync_all())
        .map_err(|source| StoreError::FileWriteFailure {
            path: path.clone(),
            source,
        })?;

    info!("wrote {} bytes of tables to {}", bytes.len(), path.display());
    Ok(path)
}

/// Reads and decodes the configured file.
pub fn read_tables(config: &StoreConfig) -> Result<Tables, StoreError> {
    let path = config.path();
    let mut file = File::open(&path).map_err(|source| StoreError::FileOpenFailure {
        path: path.clone(),
        source,
    })?;

    let mut bytes = Vec::with_capacity(BLOB_LEN);
    file.read_to_end(&mut bytes)
        .map_err(|source| StoreError::FileReadFailure {
            path: path.clone(),
            source,
        })?;

    let tables = decode(&bytes).map_err(|source| StoreError::Decode {
        path: path.clone(),
        source,
    })?;
    info!("read {} bytes of tables from {}", bytes.len(), path.display());
    Ok(tables)
}
