// src/error.rs

//! Error types for batch kernel conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a conversion run
///
/// Every variant is terminal: the batch halts on the first error and
/// nothing is retried.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The translator ran and reported failure for a file
    #[error("{program} failed on '{path}' ({status})")]
    TranslatorFailed {
        program: String,
        path: PathBuf,
        status: String,
        /// Captured stdout of the translator, lines joined by '\n'
        output: String,
    },

    /// The translator program could not be located
    #[error("Translator '{program}' not found: {reason}")]
    TranslatorNotFound { program: String, reason: String },

    /// The translator program was found but could not be started
    #[error("Failed to run translator '{program}' on '{path}': {source}")]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Translator output is not 7-bit ASCII
    #[error("Translator output for '{path}' is not ASCII: byte 0x{byte:02x} at offset {offset}")]
    Decode {
        path: PathBuf,
        byte: u8,
        offset: usize,
    },

    /// Reading or writing a candidate file failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ConversionError {
    /// Whether this is the expected "translator said no" outcome rather
    /// than an environment or filesystem fault
    pub fn is_translator_failure(&self) -> bool {
        matches!(self, Self::TranslatorFailed { .. })
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;
