//! Directory-backed key-value store.
//!
//! Each key is stored as `<hex(key)>.json` so arbitrary key text maps onto a
//! portable file name. Writes go to a hidden temporary file which is then
//! renamed over the target, so readers never observe a partial value.

use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

const ENTRY_EXTENSION: &str = ".json";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value store persisting one file per key in a directory.
///
/// # Examples
/// ```no_run
/// use hr_panel::domain::ports::KeyValueStore;
/// use hr_panel::outbound::storage::DirectoryKeyValueStore;
///
/// let store = DirectoryKeyValueStore::open(".hr-panel").expect("open storage");
/// store.write("hr-panel-jobs", "[]").expect("write");
/// assert_eq!(store.read("hr-panel-jobs").expect("read").as_deref(), Some("[]"));
/// ```
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Open `path`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KeyValueStoreError> {
        let path = path.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(path, ambient_authority()))
            .map(|dir| Self { dir })
            .map_err(|err| {
                KeyValueStoreError::io(format!("open {}: {err}", path.display()))
            })
    }
}

fn entry_name(key: &str) -> Result<String, KeyValueStoreError> {
    if key.is_empty() {
        return Err(KeyValueStoreError::invalid_key("key must not be empty"));
    }
    Ok(format!("{}{ENTRY_EXTENSION}", hex::encode(key.as_bytes())))
}

fn decode_entry_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(ENTRY_EXTENSION)?;
    let bytes = hex::decode(stem).ok()?;
    String::from_utf8(bytes).ok().filter(|key| !key.is_empty())
}

fn io_error(action: &str, key: &str, err: &io::Error) -> KeyValueStoreError {
    KeyValueStoreError::io(format!("{action} `{key}`: {err}"))
}

impl DirectoryKeyValueStore {
    fn write_atomic(&self, name: &str, contents: &str) -> io::Result<()> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{name}.tmp.{}.{counter}", std::process::id());

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let written = self.dir.open_with(&tmp_name, &options).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });
        let renamed = written.and_then(|()| self.rename_into_place(&tmp_name, name));
        if renamed.is_err() && self.dir.remove_file(&tmp_name).is_err() {
            debug!(file = %tmp_name, "temporary entry already gone");
        }
        renamed
    }

    #[cfg(windows)]
    fn rename_into_place(&self, tmp_name: &str, name: &str) -> io::Result<()> {
        // Windows rename fails if the target exists.
        match self.dir.remove_file(name) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        self.dir.rename(tmp_name, &self.dir, name)
    }

    #[cfg(not(windows))]
    fn rename_into_place(&self, tmp_name: &str, name: &str) -> io::Result<()> {
        self.dir.rename(tmp_name, &self.dir, name)
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let name = entry_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error("read", key, &err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let name = entry_name(key)?;
        self.write_atomic(&name, value)
            .map_err(|err| io_error("write", key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let name = entry_name(key)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error("remove", key, &err)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, KeyValueStoreError> {
        let entries = self
            .dir
            .entries()
            .map_err(|err| KeyValueStoreError::io(format!("list entries: {err}")))?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| KeyValueStoreError::io(format!("list entries: {err}")))?;
            let file_name = entry.file_name();
            if let Some(key) = file_name.to_str().and_then(decode_entry_name) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
