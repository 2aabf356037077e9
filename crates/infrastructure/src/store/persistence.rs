use recordbook_domain::{DomainError, Fingerprint, RecordEntry};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PRIMARY_FILE_NAME: &str = "store";
pub const BACKUP_FILE_NAME: &str = "store_bk";

pub type Snapshot = HashMap<Fingerprint, RecordEntry>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

impl StoreError {
    fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| StoreError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::PersistenceError(err.to_string())
    }
}

/// The primary snapshot file and its one-generation backup, both living in
/// the store's data directory.
#[derive(Debug, Clone)]
pub struct StoreFiles {
    primary: PathBuf,
    backup: PathBuf,
}

impl StoreFiles {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            primary: dir.join(PRIMARY_FILE_NAME),
            backup: dir.join(BACKUP_FILE_NAME),
        }
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }

    pub fn primary_exists(&self) -> bool {
        self.primary.is_file()
    }

    /// Rotates the current primary into the backup, then replaces the
    /// primary with `snapshot`.
    ///
    /// Both files are truncated before they are written, so the backup holds
    /// exactly one previous generation and the primary never carries bytes
    /// from an older, longer snapshot.
    pub fn write_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        self.rotate_backup()?;

        let payload = bincode::serialize(snapshot).map_err(StoreError::Encode)?;

        let file = truncate_for_write(&self.primary)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&payload)
            .map_err(StoreError::io("write", &self.primary))?;
        let file = writer
            .into_inner()
            .map_err(|e| StoreError::io("write", &self.primary)(e.into_error()))?;
        file.sync_all()
            .map_err(StoreError::io("sync", &self.primary))?;

        Ok(())
    }

    pub fn read_snapshot(&self) -> Result<Snapshot, StoreError> {
        let file = File::open(&self.primary).map_err(StoreError::io("open", &self.primary))?;
        bincode::deserialize_from(BufReader::new(file)).map_err(|source| StoreError::Decode {
            path: self.primary.clone(),
            source,
        })
    }

    fn rotate_backup(&self) -> Result<(), StoreError> {
        let mut backup = truncate_for_write(&self.backup)?;

        match File::open(&self.primary) {
            Ok(primary) => {
                io::copy(&mut BufReader::new(primary), &mut backup)
                    .map_err(StoreError::io("copy into", &self.backup))?;
            }
            // first save: nothing to rotate, the backup stays empty
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io("open", &self.primary)(e)),
        }

        backup.sync_all().map_err(StoreError::io("sync", &self.backup))
    }
}

fn truncate_for_write(path: &Path) -> Result<File, StoreError> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(StoreError::io("open", path))
}
