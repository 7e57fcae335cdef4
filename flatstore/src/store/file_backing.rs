use crate::errors::{ErrorKind, FlatstoreError, FlatstoreResult};
use crate::store::StoreSnapshot;
use parking_lot::{Mutex, MutexGuard};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Durable single-file backing for the store.
///
/// The backing file is one JSON object with a top-level array per
/// collection. Every read operation loads the file fresh; every mutation
/// persists the entire snapshot back, flushed to disk before the operation
/// returns.
///
/// # Concurrency
///
/// A store-wide mutex serializes the read-modify-write cycle of every
/// mutation, so concurrent in-process writers cannot clobber each other's
/// whole-snapshot persists. Callers take the guard with [`write_lock`](FileBacking::write_lock)
/// for the full duration of a mutation. Reads are lock-free: [`persist`](FileBacking::persist)
/// writes to a staging file and renames it over the backing path, so a
/// concurrent reader always parses a complete snapshot, old or new. A
/// reader may still observe the file between the operations of a batch,
/// which is documented batch behavior.
///
/// The mutex lives in this struct, so all handles onto one file must share
/// a single `FileBacking` (clone the store root). A second `FileBacking`
/// opened on the same path has its own lock and is as uncoordinated as a
/// separate process: last write wins. The store targets one root per
/// process per file.
#[derive(Debug)]
pub struct FileBacking {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBacking {
    /// Opens the backing file, creating it with an empty snapshot when it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but does not parse as a store
    /// snapshot, or on any IO failure.
    pub fn open_or_create(path: impl AsRef<Path>) -> FlatstoreResult<Self> {
        let backing = FileBacking {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        };

        if backing.path.exists() {
            // validate eagerly so a corrupt fixture fails at startup,
            // not on the first query
            backing.load()?;
        } else {
            backing.persist(&StoreSnapshot::new())?;
        }

        Ok(backing)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Takes the store-wide write lock for a read-modify-write cycle.
    pub fn write_lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock()
    }

    /// Loads the full snapshot fresh from disk.
    pub fn load(&self) -> FlatstoreResult<StoreSnapshot> {
        let bytes = std::fs::read(&self.path).map_err(|err| {
            log::error!("Failed to read backing file {:?}: {}", self.path, err);
            FlatstoreError::from(err)
        })?;

        let snapshot = serde_json::from_slice(&bytes).map_err(|err| {
            log::error!("Backing file {:?} is not a valid store: {}", self.path, err);
            FlatstoreError::new_with_cause(
                &format!("Backing file {:?} is not a valid store", self.path),
                ErrorKind::FileCorrupted,
                err.into(),
            )
        })?;

        Ok(snapshot)
    }

    /// Persists the full snapshot to disk and flushes it.
    ///
    /// Writes to a staging file next to the backing file and renames it
    /// over the backing path once synced, so the backing file is never
    /// observable half-written.
    pub fn persist(&self, snapshot: &StoreSnapshot) -> FlatstoreResult<()> {
        let staging = self.staging_path();
        let file = File::create(&staging).map_err(|err| {
            log::error!("Failed to open staging file {:?} for write: {}", staging, err);
            FlatstoreError::from(err)
        })?;

        serde_json::to_writer_pretty(&file, snapshot)?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(&staging, &self.path).map_err(|err| {
            log::error!(
                "Failed to move staging file {:?} over {:?}: {}",
                staging,
                self.path,
                err
            );
            FlatstoreError::from(err)
        })?;

        log::debug!("Persisted store snapshot to {:?}", self.path);
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "store.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
