// src/translator.rs

//! External kernel translator
//!
//! The converter talks to the translator only through the [`Translator`]
//! trait. [`SubprocessTranslator`] runs a real program such as
//! `hipify-perl <path>`, passing the path as a single argument without a
//! shell in between.

use crate::error::{ConversionError, Result};
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Translator used when none is given
pub const DEFAULT_TRANSLATOR: &str = "hipify-perl";

/// Raw result of running the translator on one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: Vec<u8>,
}

impl TranslatorOutput {
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
        }
    }

    pub fn failure(code: i32, stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
        }
    }

    fn from_status(status: ExitStatus, stdout: Vec<u8>) -> Self {
        Self {
            code: status.code(),
            stdout,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit status: {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Source-to-source kernel translator
///
/// Implementations run to completion before returning; there is no timeout.
pub trait Translator {
    /// Name shown to the operator in progress and error messages
    fn program(&self) -> &str;

    /// Translate the file at `path`, returning its exit status and stdout
    ///
    /// A non-zero status is not an `Err`: only failing to run the
    /// translator at all is.
    fn translate(&self, path: &Path) -> Result<TranslatorOutput>;
}

/// Runs an external program once per file
pub struct SubprocessTranslator {
    program: String,
    resolved: OnceCell<PathBuf>,
}

impl SubprocessTranslator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            resolved: OnceCell::new(),
        }
    }

    /// Locate the program on PATH, once
    fn resolve(&self) -> Result<&Path> {
        if let Some(path) = self.resolved.get() {
            return Ok(path.as_path());
        }

        let found = which::which(&self.program).map_err(|e| ConversionError::TranslatorNotFound {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;
        debug!("Resolved translator {} to {}", self.program, found.display());

        Ok(self.resolved.get_or_init(|| found).as_path())
    }
}

impl Default for SubprocessTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSLATOR)
    }
}

impl Translator for SubprocessTranslator {
    fn program(&self) -> &str {
        &self.program
    }

    fn translate(&self, path: &Path) -> Result<TranslatorOutput> {
        let program = self.resolve()?;
        debug!("Running: {} {}", program.display(), path.display());

        // stderr is inherited so translator diagnostics reach the terminal
        let output = Command::new(program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ConversionError::Spawn {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        Ok(TranslatorOutput::from_status(output.status, output.stdout))
    }
}
