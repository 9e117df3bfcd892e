// src/output.rs

//! Translator output handling
//!
//! Translator stdout is accepted only as strict 7-bit ASCII. It is split into
//! lines on `\n`, `\r\n` and lone `\r`, and written back with every line
//! terminated by `\n`:
//!
//! - `"line1\nline2"`  -> `"line1\nline2\n"`
//! - `"a\r\nb\r\n"`    -> `"a\nb\n"`
//! - `"a\n\n"`         -> `"a\n\n"` (trailing empty line kept)
//! - `""`              -> `""`

use crate::error::{ConversionError, Result};
use std::path::Path;

/// Decoded translator output for one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedSource {
    lines: Vec<String>,
}

impl ConvertedSource {
    /// Decode raw translator stdout produced for `path`
    ///
    /// Fails with [`ConversionError::Decode`] on the first byte outside
    /// the 7-bit range.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Self> {
        if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(ConversionError::Decode {
                path: path.to_path_buf(),
                byte: bytes[offset],
                offset,
            });
        }

        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        Ok(Self {
            lines: split_lines(&text),
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File contents to write: each line followed by '\n'
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Lines joined by '\n' without a trailing terminator, for diagnostics
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split on `\n`, `\r\n` and `\r`, without producing an element for a
/// final terminator
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(i) => {
                lines.push(rest[..i].to_string());
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}
