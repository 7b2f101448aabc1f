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

//! Line and report parsing.
//!
//! A benchmark report is line oriented. Only lines of the shape
//!
//! ```text
//! BenchmarkName-8   2000000   650 ns/op   120.50 MB/s   3 allocs/op   48 B/op
//! ```
//!
//! carry results; everything else (package headers, `PASS`, `ok ...`, log
//! noise) is skipped. The first field must start with the marker
//! (`Benchmark` by default), the second must be an unsigned iteration count,
//! and the remaining fields are `(value, unit)` pairs.

use crate::bench::Bench;
use crate::error::{BenchError, BenchResult};
use crate::metric::Metric;
use crate::set::BenchSet;
use std::borrow::Cow;
use std::io::BufRead;
use tracing::{debug, trace};

/// Default prefix identifying benchmark result lines.
pub const DEFAULT_MARKER: &str = "Benchmark";

/// Default maximum line length in bytes (1 MiB).
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Prefix the name field must start with.
    pub marker: String,
    /// Lines longer than this abort parsing.
    pub max_line_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// ```
    /// use benchcmp_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder().marker("Bench").build();
    /// assert_eq!(opts.marker, "Bench");
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Set the name prefix that identifies benchmark lines.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.options.marker = marker.into();
        self
    }

    /// Set the maximum accepted line length in bytes.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.options.max_line_length = length;
        self
    }

    pub fn build(self) -> ParseOptions {
        self.options
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one line with the default options.
///
/// Returns `Ok(None)` for lines that are not benchmark results.
///
/// # Errors
///
/// Returns a `Malformed` error when a recognized unit carries a value that is
/// not a finite number. The error's line number is 0; [`parse_bench_set`]
/// fills it in.
///
/// ```
/// use benchcmp_core::parse_line;
///
/// let bench = parse_line("BenchmarkFoo-8  2000000  650 ns/op  48 B/op")
///     .unwrap()
///     .unwrap();
/// assert_eq!(bench.name, "BenchmarkFoo-8");
/// assert_eq!(bench.ns_op, Some(650.0));
/// assert_eq!(bench.b_op, Some(48));
///
/// assert!(parse_line("PASS").unwrap().is_none());
/// ```
pub fn parse_line(line: &str) -> BenchResult<Option<Bench>> {
    parse_line_with(line, &ParseOptions::default())
}

/// Parse one line with explicit options.
pub fn parse_line_with(line: &str, options: &ParseOptions) -> BenchResult<Option<Bench>> {
    let mut fields = line.split_whitespace();

    let name = match fields.next() {
        Some(name) if name.starts_with(options.marker.as_str()) => name,
        _ => return Ok(None),
    };
    let iterations = match fields.next().map(str::parse::<u64>) {
        Some(Ok(n)) => n,
        _ => {
            trace!(name, "benchmark-like line without iteration count");
            return Ok(None);
        }
    };

    let mut bench = Bench::new(name, iterations);
    let rest: Vec<&str> = fields.collect();
    for pair in rest.chunks_exact(2) {
        let (value, unit) = (pair[0], pair[1]);
        match Metric::from_unit(unit) {
            Some(metric) => record_measurement(&mut bench, metric, value)
                .map_err(|e| e.with_context(line.trim_end()))?,
            None => trace!(name, unit, "ignoring unknown unit"),
        }
    }
    Ok(Some(bench))
}

fn record_measurement(bench: &mut Bench, metric: Metric, value: &str) -> BenchResult<()> {
    let bad_value = || {
        BenchError::malformed(
            format!("invalid value {:?} for {} in {}", value, metric, bench.name),
            0,
        )
    };

    if metric.is_integral() {
        let parsed = value.parse::<u64>().map_err(|_| bad_value())?;
        match metric {
            Metric::AllocsOp => bench.allocs_op = Some(parsed),
            _ => bench.b_op = Some(parsed),
        }
    } else {
        let parsed = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(bad_value)?;
        match metric {
            Metric::NsOp => bench.ns_op = Some(parsed),
            _ => bench.mb_s = Some(parsed),
        }
    }
    Ok(())
}

/// Parse a whole report with the default options.
///
/// Non-benchmark lines are skipped. Repeated benchmark names are folded
/// into one record holding the best observed values.
///
/// # Errors
///
/// Aborts on the first malformed benchmark line, on an overlong line, or on
/// a read failure. No partial set is returned.
pub fn parse_bench_set<R: BufRead>(reader: R) -> BenchResult<BenchSet> {
    parse_bench_set_with(reader, &ParseOptions::default())
}

/// Parse a whole report with explicit options.
pub fn parse_bench_set_with<R: BufRead>(
    mut reader: R,
    options: &ParseOptions,
) -> BenchResult<BenchSet> {
    let mut set = BenchSet::new();
    let mut skipped = 0usize;

    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| BenchError::from(e).at_line(line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let raw = strip_line_ending(&buf);
        if raw.len() > options.max_line_length {
            return Err(BenchError::line_too_long(
                format!(
                    "line is {} bytes, maximum is {}",
                    raw.len(),
                    options.max_line_length
                ),
                line_no,
            ));
        }

        // Reports are byte streams; stray non-UTF-8 output must not abort
        let line = String::from_utf8_lossy(raw);
        if let Cow::Owned(_) = line {
            trace!(line = line_no, "replaced invalid UTF-8");
        }

        match parse_line_with(&line, options).map_err(|e| e.at_line(line_no))? {
            Some(bench) => set.insert(bench),
            None => skipped += 1,
        }
    }

    debug!(
        benchmarks = set.len(),
        skipped, "parsed bench set"
    );
    Ok(set)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse a report held in memory.
pub fn parse_str(input: &str) -> BenchResult<BenchSet> {
    parse_bench_set(input.as_bytes())
}

/// Parse raw report bytes. Invalid UTF-8 is replaced, not rejected.
pub fn parse_bytes(input: &[u8]) -> BenchResult<BenchSet> {
    parse_bench_set(input)
}
