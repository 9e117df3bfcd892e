// src/lib.rs

//! hipify-tree
//!
//! Batch conversion of CUDA kernel sources to HIP. Every `.cu` file under a
//! root directory is passed to an external translator (`hipify-perl` by
//! default) and overwritten in place with the translated output.
//!
//! # Architecture
//!
//! - `discover`: sorted, non-following walk selecting kernel sources
//! - `translator`: the `Translator` seam and the subprocess implementation
//! - `output`: strict ASCII decoding and newline normalization
//! - `convert`: the sequential batch loop, halting on first failure
//! - `report`: operator-facing progress

pub mod cli;
pub mod convert;
pub mod discover;
mod error;
pub mod output;
pub mod report;
pub mod translator;

pub use convert::{ConversionSummary, Converter, DEFAULT_ROOT};
pub use discover::{CandidateFile, Candidates, KERNEL_SUFFIX};
pub use error::{ConversionError, Result};
pub use output::ConvertedSource;
pub use report::{ConsoleReporter, Reporter, SilentReporter};
pub use translator::{DEFAULT_TRANSLATOR, SubprocessTranslator, Translator, TranslatorOutput};
