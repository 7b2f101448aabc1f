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

//! Benchmark records.

use crate::metric::{Metric, MetricSet};

/// One named benchmark and the metrics measured for it.
///
/// Each metric is optional: `None` means the harness did not report it,
/// which is different from a reported zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bench {
    /// Benchmark name, including the marker prefix (e.g. `BenchmarkFoo-8`).
    pub name: String,
    /// Loop iterations executed by the harness.
    pub iterations: u64,
    /// Nanoseconds per operation.
    pub ns_op: Option<f64>,
    /// Throughput in MB/s.
    pub mb_s: Option<f64>,
    /// Allocations per operation.
    pub allocs_op: Option<u64>,
    /// Bytes allocated per operation.
    pub b_op: Option<u64>,
    /// Position of the first occurrence of this name in its input.
    pub(crate) ord: usize,
}

impl Bench {
    /// Create a record with no measured metrics.
    pub fn new(name: impl Into<String>, iterations: u64) -> Self {
        Self {
            name: name.into(),
            iterations,
            ns_op: None,
            mb_s: None,
            allocs_op: None,
            b_op: None,
            ord: 0,
        }
    }

    /// Parse order of this record within its bench set.
    pub fn ord(&self) -> usize {
        self.ord
    }

    /// The metrics present on this record.
    pub fn measured(&self) -> MetricSet {
        Metric::ALL
            .into_iter()
            .filter(|m| self.value(*m).is_some())
            .collect()
    }

    /// Whether `metric` was reported.
    pub fn is_measured(&self, metric: Metric) -> bool {
        self.value(metric).is_some()
    }

    /// The value of `metric` as a float, if measured.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::NsOp => self.ns_op,
            Metric::MbS => self.mb_s,
            Metric::AllocsOp => self.allocs_op.map(|v| v as f64),
            Metric::BOp => self.b_op.map(|v| v as f64),
        }
    }

    /// Fold a repeated run of the same benchmark into this record.
    ///
    /// Every metric keeps its best (minimum) observed value. A metric measured
    /// by only one of the two runs keeps that run's value. The iteration count
    /// follows the run with the lowest ns/op.
    pub fn absorb(&mut self, other: &Bench) {
        debug_assert_eq!(self.name, other.name);

        if let (Some(mine), Some(theirs)) = (self.ns_op, other.ns_op) {
            if theirs < mine {
                self.iterations = other.iterations;
            }
        } else if self.ns_op.is_none() && other.ns_op.is_some() {
            self.iterations = other.iterations;
        }

        self.ns_op = min_option(self.ns_op, other.ns_op, f64::min);
        self.mb_s = min_option(self.mb_s, other.mb_s, f64::min);
        self.allocs_op = min_option(self.allocs_op, other.allocs_op, u64::min);
        self.b_op = min_option(self.b_op, other.b_op, u64::min);
    }
}

fn min_option<T: Copy>(a: Option<T>, b: Option<T>, min: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(min(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}
