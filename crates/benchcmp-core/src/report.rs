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

//! Comparison tables.
//!
//! Turns a list of comparisons into one table of formatted rows per metric.
//! Rendering the rows (alignment, colors, JSON) is left to the caller.

use crate::bench::Bench;
use crate::correlate::BenchCmp;
use crate::delta::Delta;
use crate::metric::Metric;
use crate::order::SortOrder;

/// Output options for table construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Drop rows whose delta is unchanged.
    pub changed_only: bool,
    /// Row ordering, applied per metric.
    pub sort: SortOrder,
}

/// Format a ns/op value with the precision the benchmark harness uses:
/// two decimals below 10, one below 100, none from 100 up.
///
/// ```
/// use benchcmp_core::format_ns;
///
/// assert_eq!(format_ns(9.5), "9.50");
/// assert_eq!(format_ns(42.26), "42.3");
/// assert_eq!(format_ns(650.0), "650");
/// ```
pub fn format_ns(ns: f64) -> String {
    let prec = if ns < 10.0 {
        2
    } else if ns < 100.0 {
        1
    } else {
        0
    };
    format!("{:.*}", prec, ns)
}

/// Column labels for the table of `metric`.
pub fn header(metric: Metric) -> [&'static str; 4] {
    match metric {
        Metric::NsOp => ["benchmark", "old ns/op", "new ns/op", "delta"],
        Metric::MbS => ["benchmark", "old MB/s", "new MB/s", "speedup"],
        Metric::AllocsOp => ["benchmark", "old allocs", "new allocs", "delta"],
        Metric::BOp => ["benchmark", "old bytes", "new bytes", "delta"],
    }
}

/// Render the value of `metric` on `bench`, or `None` if not measured.
pub fn format_value(bench: &Bench, metric: Metric) -> Option<String> {
    match metric {
        Metric::NsOp => bench.ns_op.map(format_ns),
        Metric::MbS => bench.mb_s.map(|v| format!("{:.2}", v)),
        Metric::AllocsOp => bench.allocs_op.map(|v| v.to_string()),
        Metric::BOp => bench.b_op.map(|v| v.to_string()),
    }
}

/// Render the delta of `metric`: a multiple for throughput, a percentage
/// otherwise.
pub fn format_delta(delta: &Delta, metric: Metric) -> String {
    if metric.is_throughput() {
        delta.multiple()
    } else {
        delta.percent()
    }
}

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub name: String,
    pub before: String,
    pub after: String,
    pub delta: String,
    pub changed: bool,
}

impl Row {
    /// Cells in column order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.before.as_str(),
            self.after.as_str(),
            self.delta.as_str(),
        ]
    }
}

/// All rows for one metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub metric: Metric,
    pub header: [String; 4],
    pub rows: Vec<Row>,
}

/// Build the table for `metric` from already ordered comparisons.
///
/// Comparisons that do not measure `metric` on both sides are skipped, as
/// are unchanged ones when `changed_only` is set. Returns `None` when no row
/// qualifies.
pub fn build_table(cmps: &[BenchCmp<'_>], metric: Metric, changed_only: bool) -> Option<Table> {
    let rows: Vec<Row> = cmps
        .iter()
        .filter_map(|cmp| {
            let delta = cmp.delta(metric)?;
            let changed = delta.changed();
            if changed_only && !changed {
                return None;
            }
            Some(Row {
                name: cmp.name().to_string(),
                before: format_value(cmp.before, metric)?,
                after: format_value(cmp.after, metric)?,
                delta: format_delta(&delta, metric),
                changed,
            })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table {
        metric,
        header: header(metric).map(String::from),
        rows,
    })
}

/// Build every non-empty table, in metric order.
///
/// `cmps` is re-sorted for each metric according to `options.sort`; on
/// return it holds the order used for the last metric.
pub fn build_tables(cmps: &mut [BenchCmp<'_>], options: &CompareOptions) -> Vec<Table> {
    Metric::ALL
        .into_iter()
        .filter_map(|metric| {
            options.sort.apply(cmps, metric);
            build_table(cmps, metric, options.changed_only)
        })
        .collect()
}
