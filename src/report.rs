// src/report.rs

//! Operator-facing progress reporting
//!
//! The converter announces each converted file and the file that stopped the
//! run through the [`Reporter`] trait. Implementations:
//! - `ConsoleReporter`: plain lines on stdout/stderr for the operator
//! - `SilentReporter`: no-op for library callers and tests

use std::path::Path;

/// Receives per-file progress from a conversion run
pub trait Reporter {
    /// `path` was translated and overwritten
    fn converted(&self, path: &Path);

    /// `program` failed on `path`; `output` is its captured stdout
    fn failed(&self, program: &str, path: &Path, output: &str);
}

/// Prints progress for a human at a terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn converted(&self, path: &Path) {
        println!("{}", converted_line(path));
    }

    fn failed(&self, program: &str, _path: &Path, output: &str) {
        eprintln!("{}", failure_text(program, output));
    }
}

/// Reports nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn converted(&self, _path: &Path) {}

    fn failed(&self, _program: &str, _path: &Path, _output: &str) {}
}

/// Success line printed for a converted file
fn converted_line(path: &Path) -> String {
    format!("Successfully converted {}!", path.display())
}

/// Failure banner followed by the translator's captured output, if any
fn failure_text(program: &str, output: &str) -> String {
    if output.is_empty() {
        format!("{} error!", program)
    } else {
        format!("{} error!\n{}", program, output)
    }
}
