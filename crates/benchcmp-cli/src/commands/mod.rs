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

//! CLI command implementations

mod compare;

pub use compare::{compare, load_bench_set};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};

/// Default maximum input file size (1 GB).
/// Can be overridden via the BENCHCMP_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "BENCHCMP_MAX_FILE_SIZE";

/// Get the maximum file size from the environment or use the default.
///
/// Unset or unparsable values fall back to [`DEFAULT_MAX_FILE_SIZE`].
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a report from disk with size validation.
///
/// The file size is checked before anything is read, so oversized inputs
/// are rejected without allocating.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed (missing file, permissions)
/// - The file exceeds the maximum size (`BENCHCMP_MAX_FILE_SIZE`)
/// - The file cannot be read
///
/// Contents are returned as raw bytes; reports need not be valid UTF-8.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Write rendered output to stdout.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::Output(e.to_string()))
}
