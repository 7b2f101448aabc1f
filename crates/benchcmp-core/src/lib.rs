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

//! Parser and comparison engine for benchmark reports.
//!
//! This crate reads the line-oriented output of a benchmark harness into
//! [`BenchSet`]s, pairs two runs by benchmark name, and computes per-metric
//! deltas.
//!
//! # Pipeline
//!
//! ```text
//! text ──parse_bench_set──▶ BenchSet (before)
//! text ──parse_bench_set──▶ BenchSet (after)
//!                   correlate ──▶ Correlation { comparisons, orphans }
//!                   build_tables ──▶ Vec<Table> (one per metric)
//! ```
//!
//! # Example
//!
//! ```
//! use benchcmp_core::{build_tables, correlate, parse_str, CompareOptions};
//!
//! let before = parse_str("BenchmarkA-8 1000 100 ns/op\nBenchmarkB-8 1000 50 ns/op\n").unwrap();
//! let after = parse_str("BenchmarkA-8 1000 80 ns/op\nBenchmarkC-8 1000 10 ns/op\n").unwrap();
//!
//! let mut corr = correlate(&before, &after);
//! assert_eq!(corr.orphans.len(), 2);
//!
//! let tables = build_tables(&mut corr.comparisons, &CompareOptions::default());
//! assert_eq!(tables[0].rows[0].delta, "-20.00%");
//! ```

mod bench;
mod correlate;
mod delta;
mod error;
mod metric;
mod order;
mod parser;
mod report;
mod set;

pub use bench::Bench;
pub use correlate::{correlate, BenchCmp, Correlation, Orphan, Side};
pub use delta::{Delta, UNCHANGED};
pub use error::{BenchError, BenchErrorKind, BenchResult};
pub use metric::{Metric, MetricSet};
pub use order::{sort_by_magnitude, sort_by_parse_order, SortOrder};
pub use parser::{
    parse_bench_set, parse_bench_set_with, parse_bytes, parse_line, parse_line_with, parse_str,
    ParseOptions, ParseOptionsBuilder, DEFAULT_MARKER, DEFAULT_MAX_LINE_LENGTH,
};
pub use report::{
    build_table, build_tables, format_delta, format_ns, format_value, header, CompareOptions, Row,
    Table,
};
pub use set::BenchSet;
