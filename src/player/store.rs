// SPDX-License-Identifier: MPL-2.0
//! Resume-position persistence.
//!
//! The controller persists the playback position under `resume:<identity>` on
//! every clock tick and reads it back when data becomes ready. Two stores are
//! provided:
//! - [`MemoryStore`] for tests and hosts with their own persistence
//! - [`FileStore`], a CBOR file in the application data directory

use crate::app::config::RESUME_KEY_PREFIX;
use crate::app::paths;
use crate::domain::playback::VideoIdentity;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Store file name within the app data directory.
const STORE_FILE: &str = "resume.cbor";

/// String key-value store consumed by the controller.
///
/// Writes are best-effort: implementations report failures through logging,
/// never to the caller.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// A store shared by several controllers on the same event loop.
impl<S: KeyValueStore> KeyValueStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.borrow_mut().set(key, value);
    }
}

/// Returns the store key holding `identity`'s resume offset.
#[must_use]
pub fn resume_key(identity: &VideoIdentity) -> String {
    format!("{RESUME_KEY_PREFIX}{identity}")
}

/// Interprets a persisted resume value.
///
/// Absent, unparsable, negative and non-finite values all resume from 0.
#[must_use]
pub fn parse_resume_offset(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .unwrap_or(0.0)
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// FileStore
// =============================================================================

/// CBOR-backed store that writes through on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. `PLAYBACK_OVERLAY_DATA_DIR` environment variable (if set)
    /// 3. Platform-specific data directory
    ///
    /// Fails only when no data directory can be determined. See
    /// [`open_at`](Self::open_at) for the warning key.
    pub fn open(base_dir: Option<PathBuf>) -> Result<(Self, Option<String>)> {
        let dir = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Store("data directory could not be determined".to_string()))?;
        Ok(Self::open_at(dir.join(STORE_FILE)))
    }

    /// Opens the store at an explicit file path.
    ///
    /// A missing file starts an empty store. An unreadable or corrupt file
    /// also starts empty, so every video resumes from 0, and a warning key
    /// is returned alongside. The bad file is replaced on the next `set`.
    pub fn open_at(path: impl Into<PathBuf>) -> (Self, Option<String>) {
        let path = path.into();
        if !path.exists() {
            return (Self::empty(path), None);
        }

        let warning = match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(entries) => return (Self { path, entries }, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "discarding corrupt resume store");
                    "notification-store-parse-error"
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "resume store could not be read");
                "notification-store-read-error"
            }
        };
        (Self::empty(path), Some(warning.to_string()))
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a sibling temp file, then renames it over the store.
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("cbor.tmp");
        let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
        ciborium::into_writer(&self.entries, &mut writer)
            .map_err(|err| Error::Store(err.to_string()))?;
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist store");
        }
    }
}
