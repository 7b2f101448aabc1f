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

//! Compare command - old run vs new run

use super::{read_file, write_output};
use crate::error::CliError;
use crate::render::{render, OutputFormat};
use benchcmp_core::{build_tables, correlate, parse_bytes, BenchSet, CompareOptions};
use colored::Colorize;
use tracing::debug;

/// Read and parse one benchmark report.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or contains a malformed
/// benchmark line.
pub fn load_bench_set(path: &str) -> Result<BenchSet, CliError> {
    let content = read_file(path)?;
    let set = parse_bytes(&content).map_err(|e| CliError::parse(path, &e))?;
    debug!(path, benchmarks = set.len(), "loaded report");
    Ok(set)
}

/// Compare two benchmark reports and print one table per metric.
///
/// Benchmarks present in only one report are reported on stderr and left
/// out of the tables.
///
/// # Errors
///
/// Returns `Err` if:
/// - Either file cannot be read or parsed (nothing is printed)
/// - The reports share no benchmark names
/// - Output cannot be written
///
/// # Examples
///
/// ```no_run
/// use benchcmp_cli::commands::compare;
/// use benchcmp_cli::render::OutputFormat;
/// use benchcmp_core::CompareOptions;
///
/// # fn main() -> Result<(), benchcmp_cli::error::CliError> {
/// compare("old.txt", "new.txt", &CompareOptions::default(), OutputFormat::Text)?;
/// # Ok(())
/// # }
/// ```
pub fn compare(
    old: &str,
    new: &str,
    options: &CompareOptions,
    format: OutputFormat,
) -> Result<(), CliError> {
    let before = load_bench_set(old)?;
    let after = load_bench_set(new)?;

    let mut corr = correlate(&before, &after);
    for warning in corr.warnings() {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    if corr.comparisons.is_empty() {
        return Err(CliError::NoOverlap);
    }

    let tables = build_tables(&mut corr.comparisons, options);
    let output = render(&tables, format)?;
    write_output(&output)
}
