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

//! The four benchmark metrics and the per-record presence set.

use std::fmt;

/// A metric reported on a benchmark line.
///
/// Declaration order is the order in which comparison tables are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Nanoseconds per operation.
    NsOp,
    /// Throughput in megabytes per second.
    MbS,
    /// Heap allocations per operation.
    AllocsOp,
    /// Bytes allocated per operation.
    BOp,
}

impl Metric {
    /// All metrics in table order.
    pub const ALL: [Metric; 4] = [Metric::NsOp, Metric::MbS, Metric::AllocsOp, Metric::BOp];

    /// Unit label as written by the benchmark harness.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::NsOp => "ns/op",
            Metric::MbS => "MB/s",
            Metric::AllocsOp => "allocs/op",
            Metric::BOp => "B/op",
        }
    }

    /// Look up the metric for a unit label. Unknown labels yield `None`.
    pub fn from_unit(unit: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.unit() == unit)
    }

    /// Whether this metric is compared as a ratio (higher is better).
    pub fn is_throughput(self) -> bool {
        matches!(self, Metric::MbS)
    }

    /// Whether the harness reports this metric as an integer count.
    pub fn is_integral(self) -> bool {
        matches!(self, Metric::AllocsOp | Metric::BOp)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

/// Set of metrics that were actually present on a benchmark line.
///
/// Absence is distinct from a measured zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MetricSet(u8);

impl MetricSet {
    /// The empty set.
    pub const fn empty() -> Self {
        MetricSet(0)
    }

    pub fn insert(&mut self, metric: Metric) {
        self.0 |= metric.bit();
    }

    pub fn contains(self, metric: Metric) -> bool {
        self.0 & metric.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: MetricSet) -> MetricSet {
        MetricSet(self.0 | other.0)
    }

    pub fn intersection(self, other: MetricSet) -> MetricSet {
        MetricSet(self.0 & other.0)
    }

    /// Iterate the contained metrics in table order.
    pub fn iter(self) -> impl Iterator<Item = Metric> {
        Metric::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Metric> for MetricSet {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        let mut set = MetricSet::empty();
        for metric in iter {
            set.insert(metric);
        }
        set
    }
}
