// Dweve BenchCmp - Benchmark Run Comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the benchcmp CLI.
//!
//! Every variant is fatal: the run stops and nothing is written to stdout.

use benchcmp_core::BenchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchcmp CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchcmp_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Input file could not be opened or read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// A benchmark line in the report was malformed.
    #[error("Parse error in '{path}': {message}")]
    Parse {
        /// The report being parsed
        path: PathBuf,
        /// Rendered parser error, including line number and content
        message: String,
    },

    /// The two runs share no benchmark names.
    #[error("no repeated benchmarks")]
    NoOverlap,

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a parse error for the report at `path`.
    pub fn parse(path: impl Into<PathBuf>, source: &BenchError) -> Self {
        Self::Parse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "old.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("old.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.txt", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.txt"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
    }

    #[test]
    fn test_parse_error_display() {
        let source = BenchError::malformed("invalid value \"x\" for ns/op", 4);
        let err = CliError::parse("new.txt", &source);
        let msg = err.to_string();
        assert!(msg.starts_with("Parse error in 'new.txt'"));
        assert!(msg.contains("line 4"));
    }

    #[test]
    fn test_no_overlap_display() {
        assert_eq!(CliError::NoOverlap.to_string(), "no repeated benchmarks");
    }

    #[test]
    fn test_json_format_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(matches!(cli_err, CliError::JsonFormat { .. }));
    }
}
