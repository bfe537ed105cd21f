use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::portfolio::application::ports::outgoing::{DurableStore, DurableStoreError};

/// Durable store backed by one file per key under `root`.
///
/// Keys map to `<root>/<encoded-key>.json`. `[A-Za-z0-9_-]` is kept as-is and
/// every other byte is written as `%XX`, so distinct keys never share a file
/// and no key can name a path outside `root`.
///
/// Writes go to a temporary file, are synced, then renamed over the target so
/// a crash never leaves a half-written value behind. A failed write removes
/// its temporary file.
#[derive(Debug, Clone)]
pub struct FileDurableStore {
    root: PathBuf,
}

impl FileDurableStore {
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

fn write_atomically(temp: &Path, target: &Path, value: &str) -> std::io::Result<()> {
    let mut f = File::create(temp)?;
    f.write_all(value.as_bytes())?;
    f.sync_all()?;
    fs::rename(temp, target)
}

impl DurableStore for FileDurableStore {
    fn get(&self, key: &str) -> Result<Option<String>, DurableStoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DurableStoreError> {
        fs::create_dir_all(&self.root)?;

        let target = self.path_for(key);
        let temp = target.with_extension("tmp");

        if let Err(e) = write_atomically(&temp, &target, value) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(path = %temp.display(), error = %cleanup, "Could not remove temp file");
                }
            }
            return Err(e.into());
        }

        debug!(key, path = %target.display(), bytes = value.len(), "Durable value written");
        Ok(())
    }
}
