pub mod commands;
pub mod logging;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fncat_core::pipeline::SourceLoader;
use sha2::{Digest, Sha256};

/// Absolute form of `dir`, relative paths resolved against the current
/// directory. Existing directories are canonicalized; missing ones are
/// returned joined as given.
pub fn resolve_dir(dir: &str) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let joined = cwd.join(dir);
    Ok(joined.canonicalize().unwrap_or(joined))
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Filesystem loader that remembers the digest of every source it reads,
/// so the manifest hashes exactly the text that was extracted.
#[derive(Debug, Default)]
pub struct HashingLoader {
    digests: RefCell<BTreeMap<PathBuf, String>>,
}

impl HashingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest of `path`, if it was loaded successfully.
    pub fn digest(&self, path: &Path) -> Option<String> {
        self.digests.borrow().get(path).cloned()
    }
}

impl SourceLoader for HashingLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        let source = fs::read_to_string(path)?;
        self.digests.borrow_mut().insert(path.to_path_buf(), sha256_hex(source.as_bytes()));
        Ok(source)
    }
}

/// Final path component as a string, or the whole path if it has none.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|os| os.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
