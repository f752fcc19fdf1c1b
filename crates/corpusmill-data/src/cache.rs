//! # Raw Corpus Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Cache disposition for a raw corpus file.
///
/// Passed explicitly into the pipeline entry point so that cache hit/miss is
/// a first-class, testable input rather than an implicit filesystem probe
/// buried in the fetch stage. Presence alone decides: there is no checksum
/// or staleness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    /// The raw corpus already exists at this path; the fetch stage performs
    /// zero network activity.
    Hit(PathBuf),

    /// No usable raw corpus; the fetch stage must materialize one at this
    /// path.
    Miss(PathBuf),
}

impl CacheState {
    /// Probe the filesystem for a raw corpus file.
    pub fn probe<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            Self::Hit(path)
        } else {
            Self::Miss(path)
        }
    }

    /// Force a miss, regardless of what is on disk.
    ///
    /// This is the "delete the cache and rerun" recovery path.
    pub fn force_miss<P: AsRef<Path>>(path: P) -> Self {
        Self::Miss(path.as_ref().to_path_buf())
    }

    /// The raw corpus path, for either disposition.
    pub fn path(&self) -> &Path {
        match self {
            Self::Hit(path) | Self::Miss(path) => path,
        }
    }

    /// Whether the raw corpus will be reused.
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Expand and create a data directory path.
///
/// Supports `~` and environment-variable expansion.
pub fn resolve_data_dir(dir: &str) -> anyhow::Result<PathBuf> {
    let dir = shellexpand::full(dir)?.to_string();
    fs::create_dir_all(&dir)?;
    Ok(PathBuf::from(dir))
}
