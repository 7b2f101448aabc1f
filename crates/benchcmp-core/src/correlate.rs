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

//! Pairing of two bench sets by benchmark name.

use crate::bench::Bench;
use crate::delta::Delta;
use crate::metric::{Metric, MetricSet};
use crate::set::BenchSet;
use std::fmt;
use tracing::debug;

/// One benchmark present in both runs.
///
/// Borrows both records from their sets; it never modifies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchCmp<'a> {
    pub before: &'a Bench,
    pub after: &'a Bench,
}

impl<'a> BenchCmp<'a> {
    pub fn name(&self) -> &'a str {
        &self.before.name
    }

    /// Whether both runs reported `metric`.
    pub fn measured(&self, metric: Metric) -> bool {
        self.before.is_measured(metric) && self.after.is_measured(metric)
    }

    /// Metrics reported by both runs.
    pub fn measured_set(&self) -> MetricSet {
        self.before.measured().intersection(self.after.measured())
    }

    /// The change in `metric`, or `None` unless both runs reported it.
    pub fn delta(&self, metric: Metric) -> Option<Delta> {
        match (self.before.value(metric), self.after.value(metric)) {
            (Some(before), Some(after)) => Some(Delta::new(before, after)),
            _ => None,
        }
    }

    /// Position of this benchmark in the before run.
    pub fn ord(&self) -> usize {
        self.before.ord()
    }
}

/// Which run a benchmark name is missing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => f.write_str("before"),
            Side::After => f.write_str("after"),
        }
    }
}

/// A benchmark that only one of the two runs contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub name: String,
    pub missing_from: Side,
}

impl fmt::Display for Orphan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring {}: missing from {}", self.name, self.missing_from)
    }
}

/// Result of pairing two runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Correlation<'a> {
    /// Paired benchmarks, in before-run order.
    pub comparisons: Vec<BenchCmp<'a>>,
    /// One entry per one-sided name: before-only names in before order,
    /// then after-only names in after order.
    pub orphans: Vec<Orphan>,
}

impl Correlation<'_> {
    /// Orphans rendered as diagnostic messages.
    pub fn warnings(&self) -> Vec<String> {
        self.orphans.iter().map(ToString::to_string).collect()
    }
}

/// Pair `before` and `after` by name.
///
/// An empty comparison list is not an error here; callers decide whether
/// that is fatal.
///
/// ```
/// use benchcmp_core::{correlate, parse_str};
///
/// let before = parse_str("BenchmarkA 1 100 ns/op\nBenchmarkB 1 50 ns/op\n").unwrap();
/// let after = parse_str("BenchmarkA 1 80 ns/op\nBenchmarkC 1 10 ns/op\n").unwrap();
/// let corr = correlate(&before, &after);
///
/// assert_eq!(corr.comparisons.len(), 1);
/// assert_eq!(
///     corr.warnings(),
///     vec![
///         "ignoring BenchmarkB: missing from after",
///         "ignoring BenchmarkC: missing from before",
///     ]
/// );
/// ```
pub fn correlate<'a>(before: &'a BenchSet, after: &'a BenchSet) -> Correlation<'a> {
    let mut corr = Correlation::default();

    for b in before {
        match after.get(&b.name) {
            Some(a) => corr.comparisons.push(BenchCmp { before: b, after: a }),
            None => corr.orphans.push(Orphan {
                name: b.name.clone(),
                missing_from: Side::After,
            }),
        }
    }
    for a in after.iter().filter(|a| !before.contains(&a.name)) {
        corr.orphans.push(Orphan {
            name: a.name.clone(),
            missing_from: Side::Before,
        });
    }

    debug!(
        paired = corr.comparisons.len(),
        orphans = corr.orphans.len(),
        "correlated bench sets"
    );
    corr
}
