// src/convert.rs

//! Batch conversion of kernel sources
//!
//! [`Converter`] visits every kernel source under a root directory, runs the
//! translator on it and overwrites the file with the translated text. The run
//! is strictly sequential and stops at the first failure of any kind:
//!
//! 1. The translator is run on the file and its stdout captured.
//! 2. The output is decoded as 7-bit ASCII (decode errors are fatal).
//! 3. A non-zero exit is reported with the captured output and halts the run.
//! 4. Otherwise the file is replaced with the translated lines.
//!
//! A file is written only after its own translation succeeded. Files
//! converted earlier in a halted run stay converted; there is no rollback.

use crate::discover::Candidates;
use crate::error::{ConversionError, Result};
use crate::output::ConvertedSource;
use crate::report::{ConsoleReporter, Reporter};
use crate::translator::{SubprocessTranslator, Translator};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory converted when none is given
pub const DEFAULT_ROOT: &str = "gpu4pyscf";

/// Outcome of a run that completed without error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Files overwritten, in the order they were converted
    pub converted: Vec<PathBuf>,
}

impl ConversionSummary {
    pub fn len(&self) -> usize {
        self.converted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converted.is_empty()
    }
}

/// Sequential in-place converter
pub struct Converter<T: Translator, R: Reporter> {
    translator: T,
    reporter: R,
}

impl Converter<SubprocessTranslator, ConsoleReporter> {
    /// `hipify-perl` with console progress
    pub fn with_defaults() -> Self {
        Self::new(SubprocessTranslator::default(), ConsoleReporter)
    }
}

impl<T: Translator, R: Reporter> Converter<T, R> {
    pub fn new(translator: T, reporter: R) -> Self {
        Self {
            translator,
            reporter,
        }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Convert every kernel source under `root`
    ///
    /// Returns the converted files on success. On error, every file listed
    /// before the failing one has already been overwritten.
    pub fn convert(&self, root: &Path) -> Result<ConversionSummary> {
        info!(
            "Converting kernel sources under {} with {}",
            root.display(),
            self.translator.program()
        );

        let mut summary = ConversionSummary::default();
        for candidate in Candidates::new(root) {
            let path = candidate?.into_path();
            self.convert_file(&path)?;
            self.reporter.converted(&path);
            summary.converted.push(path);
        }

        info!("Converted {} kernel source file(s)", summary.len());
        Ok(summary)
    }

    /// Translate one file and overwrite it with the result
    ///
    /// The file must still exist both before the translator runs and when
    /// the result is written; it is never recreated.
    pub fn convert_file(&self, path: &Path) -> Result<()> {
        let io_error = |source: std::io::Error| ConversionError::Io {
            path: path.to_path_buf(),
            source,
        };

        fs::symlink_metadata(path).map_err(io_error)?;

        let output = self.translator.translate(path)?;
        let source = ConvertedSource::decode(path, &output.stdout)?;

        if !output.is_success() {
            let diagnostics = source.joined();
            self.reporter.failed(self.translator.program(), path, &diagnostics);
            return Err(ConversionError::TranslatorFailed {
                program: self.translator.program().to_string(),
                path: path.to_path_buf(),
                status: output.status_text(),
                output: diagnostics,
            });
        }

        debug!("Writing {} line(s) to {}", source.lines().len(), path.display());
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(io_error)?;
        file.write_all(source.render().as_bytes()).map_err(io_error)
    }
}
