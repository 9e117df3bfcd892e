// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use hipify_tree::{Result, Translator, TranslatorOutput};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Create a temporary source tree from `(relative path, contents)` pairs.
///
/// Returns the TempDir - keep it alive to prevent cleanup.
pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    for (rel, contents) in files {
        let path = temp_dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
    temp_dir
}

pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// In-memory translator that rewrites `cuda` to `hip`, with per-file
/// overrides, recording every path it is given.
pub struct FakeHipify {
    overrides: HashMap<PathBuf, TranslatorOutput>,
    calls: Mutex<Vec<PathBuf>>,
}

impl FakeHipify {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return `output` instead of translating `path`
    pub fn with_output(mut self, path: PathBuf, output: TranslatorOutput) -> Self {
        self.overrides.insert(path, output);
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Translator for FakeHipify {
    fn program(&self) -> &str {
        "fake-hipify"
    }

    fn translate(&self, path: &Path) -> Result<TranslatorOutput> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        if let Some(output) = self.overrides.get(path) {
            return Ok(output.clone());
        }
        let source = fs::read_to_string(path).unwrap();
        Ok(TranslatorOutput::success(source.replace("cuda", "hip")))
    }
}

/// Write an executable shell script to use as a translator.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
