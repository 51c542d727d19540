//! Registry contract and file-backed implementation.
//!
//! # Responsibility
//! - Provide add/remove/list access to the set of active placements.
//! - Keep the JSON file layout inside the persistence boundary.
//!
//! # Invariants
//! - Writers hold an exclusive lock on the companion lock file across the
//!   whole read-modify-write cycle; readers hold a shared lock.
//! - The lock is released on every exit path, including failures.
//! - An absent registry file is equivalent to an empty registry.

use super::{RegistryError, RegistryResult};
use crate::model::record::PlacementRecord;
use fs2::FileExt;
use log::{debug, error};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

const REGISTRY_FILE_NAME: &str = "active-notifications.json";
const LOCK_FILE_NAME: &str = "active-notifications.lock";
const USER_DATA_SUBDIR: &str = "notistack";

/// Shared bookkeeping of active notification placements.
///
/// Implementations are shared-state: any number of callers, in-process or in
/// separate processes, may interleave operations on the same backing store.
pub trait PlacementRegistry {
    /// Appends `record` to the persisted set.
    ///
    /// The record id should not already be present; duplicates are not
    /// detected and remain the caller's responsibility.
    fn add(&self, record: &PlacementRecord) -> RegistryResult<()>;

    /// Removes every record whose id equals `id`.
    ///
    /// A no-op, not an error, when the set is empty or the id is absent.
    fn remove_by_id(&self, id: &str) -> RegistryResult<()>;

    /// Returns the full current persisted set.
    fn list_all(&self) -> RegistryResult<Vec<PlacementRecord>>;
}

/// File-backed registry storing records as one JSON array.
///
/// The backing directory is injected so tests and embedders can isolate
/// state; [`FileRegistry::in_user_data_dir`] derives the conventional
/// per-user location.
pub struct FileRegistry {
    dir: PathBuf,
}

impl FileRegistry {
    /// Creates a registry rooted at `dir`.
    ///
    /// The directory is created recursively on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a registry in the platform per-user data directory.
    ///
    /// Returns `None` when the platform reports no data directory.
    pub fn in_user_data_dir() -> Option<Self> {
        dirs::data_local_dir().map(|dir| Self::new(dir.join(USER_DATA_SUBDIR)))
    }

    /// Path of the registry file inside the backing directory.
    pub fn registry_path(&self) -> PathBuf {
        self.dir.join(REGISTRY_FILE_NAME)
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(LOCK_FILE_NAME)
    }

    fn append_record(&self, record: &PlacementRecord) -> RegistryResult<usize> {
        fs::create_dir_all(&self.dir)?;
        let _lock = AdvisoryLock::exclusive(&self.lock_path())?;
        let mut records = self.read_records()?;
        records.push(record.clone());
        self.write_records(&records)?;
        Ok(records.len())
    }

    fn remove_records(&self, id: &str) -> RegistryResult<usize> {
        if !self.registry_path().exists() {
            return Ok(0);
        }
        let _lock = AdvisoryLock::exclusive(&self.lock_path())?;
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        let removed = before - records.len();
        if removed > 0 {
            self.write_records(&records)?;
        }
        Ok(removed)
    }

    fn snapshot(&self) -> RegistryResult<Vec<PlacementRecord>> {
        if !self.registry_path().exists() {
            return Ok(Vec::new());
        }
        let _lock = AdvisoryLock::shared(&self.lock_path())?;
        self.read_records()
    }

    fn read_records(&self) -> RegistryResult<Vec<PlacementRecord>> {
        let path = self.registry_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<PlacementRecord> =
            serde_json::from_str(&raw).map_err(|source| RegistryError::Malformed { path, source })?;
        for record in &records {
            record.validate()?;
        }
        Ok(records)
    }

    fn write_records(&self, records: &[PlacementRecord]) -> RegistryResult<()> {
        let file = File::create(self.registry_path())?;
        serde_json::to_writer_pretty(&file, records)
            .map_err(|err| RegistryError::Io(err.into()))?;
        file.sync_all()?;
        Ok(())
    }
}

impl PlacementRegistry for FileRegistry {
    fn add(&self, record: &PlacementRecord) -> RegistryResult<()> {
        record.validate()?;
        match self.append_record(record) {
            Ok(active) => {
                debug!(
                    "event=registry_add module=registry status=ok id={} anchor={} size={} active={}",
                    record.id, record.anchor, record.size, active
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=registry_add module=registry status=error id={} error={}",
                    record.id, err
                );
                Err(err)
            }
        }
    }

    fn remove_by_id(&self, id: &str) -> RegistryResult<()> {
        match self.remove_records(id) {
            Ok(removed) => {
                debug!(
                    "event=registry_remove module=registry status=ok id={id} removed={removed}"
                );
                Ok(())
            }
            Err(err) => {
                error!("event=registry_remove module=registry status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    fn list_all(&self) -> RegistryResult<Vec<PlacementRecord>> {
        match self.snapshot() {
            Ok(records) => {
                debug!(
                    "event=registry_list module=registry status=ok active={}",
                    records.len()
                );
                Ok(records)
            }
            Err(err) => {
                error!("event=registry_list module=registry status=error error={err}");
                Err(err)
            }
        }
    }
}

/// Advisory lock on a companion file, released on drop.
///
/// The lock file is separate from the registry file so the registry file can
/// be created and truncated while the lock is held.
struct AdvisoryLock {
    file: File,
}

impl AdvisoryLock {
    fn exclusive(path: &Path) -> std::io::Result<Self> {
        let file = Self::open_lock_file(path)?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }

    fn shared(path: &Path) -> std::io::Result<Self> {
        let file = Self::open_lock_file(path)?;
        file.lock_shared()?;
        Ok(Self { file })
    }

    fn open_lock_file(path: &Path) -> std::io::Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
    }
}

impl Drop for AdvisoryLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
