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

//! Error types for benchmark report parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchErrorKind {
    /// Benchmark line with a recognized unit whose value is not a number.
    Malformed,
    /// Line longer than the configured limit.
    LineTooLong,
    /// The underlying reader failed.
    Io,
}

impl fmt::Display for BenchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "MalformedLine"),
            Self::LineTooLong => write!(f, "LineTooLong"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error that aborts parsing of a benchmark report.
///
/// Lines that simply are not benchmark lines never produce this error; they
/// are skipped by the parser.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}{}", context_suffix(.context))]
pub struct BenchError {
    /// The kind of error.
    pub kind: BenchErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when unknown).
    pub line: usize,
    /// The offending line content, when available.
    pub context: Option<String>,
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(text) => format!(" (in {:?})", text),
        None => String::new(),
    }
}

impl BenchError {
    /// Create a new error.
    pub fn new(kind: BenchErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Attach the offending line.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the line number once it is known.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn malformed(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::Malformed, message, line)
    }

    pub fn line_too_long(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::LineTooLong, message, line)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Io, message, 0)
    }
}

impl From<std::io::Error> for BenchError {
    fn from(source: std::io::Error) -> Self {
        Self::io(source.to_string())
    }
}

/// Result type for benchmark parsing.
pub type BenchResult<T> = Result<T, BenchError>;
