// src/discover.rs

//! Kernel source discovery
//!
//! Walks a source tree and yields the regular files whose name ends with the
//! kernel source suffix. Symlinks are never followed, and a symlink is never
//! a candidate even when its name matches.
//!
//! Entries within a directory are visited in file-name order so that a run
//! over the same tree always visits files in the same sequence (and halts at
//! the same file when the translator fails).

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// File-name suffix identifying CUDA kernel sources
pub const KERNEL_SUFFIX: &str = ".cu";

/// A kernel source file selected for translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    path: PathBuf,
}

impl CandidateFile {
    /// Path of the file as produced by the walk (rooted at the walk root)
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Lazy iterator over the candidate files under a root directory
///
/// Walk errors (unreadable directory, entry vanished mid-walk, missing root)
/// are yielded as `Err` items; callers are expected to stop on the first one.
pub struct Candidates {
    walker: walkdir::IntoIter,
    suffix: String,
}

impl Candidates {
    /// Walk `root` looking for files ending in [`KERNEL_SUFFIX`]
    pub fn new(root: &Path) -> Self {
        Self::with_suffix(root, KERNEL_SUFFIX)
    }

    /// Walk `root` looking for files ending in `suffix`
    pub fn with_suffix(root: &Path, suffix: &str) -> Self {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self {
            walker,
            suffix: suffix.to_string(),
        }
    }
}

impl Iterator for Candidates {
    type Item = Result<CandidateFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            if is_kernel_source(&entry, &self.suffix) {
                debug!("Found kernel source: {}", entry.path().display());
                return Some(Ok(CandidateFile {
                    path: entry.into_path(),
                }));
            }
        }
    }
}

/// Regular file whose name ends with `suffix`
fn is_kernel_source(entry: &DirEntry, suffix: &str) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(suffix.as_bytes())
}
