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

//! Change between a before and an after measurement.

/// Placeholder rendered when there is no meaningful change.
pub const UNCHANGED: &str = "~";

/// A before/after pair for one metric.
///
/// Deltas are cheap values derived on demand from a comparison; they are
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    pub before: f64,
    pub after: f64,
}

impl Delta {
    pub fn new(before: f64, after: f64) -> Self {
        Self { before, after }
    }

    /// Whether the measurement changed.
    ///
    /// A zero `before` value is never a change: there is no baseline to
    /// compare against, and the delta renders as `~`.
    pub fn changed(&self) -> bool {
        self.before != 0.0 && self.before != self.after
    }

    /// `after / before`, or `None` when unchanged.
    pub fn ratio(&self) -> Option<f64> {
        self.changed().then(|| self.after / self.before)
    }

    /// Relative change as a fraction (`-0.5` for a halving), 0 when unchanged.
    pub fn relative(&self) -> f64 {
        self.ratio().map_or(0.0, |r| r - 1.0)
    }

    /// Absolute relative change, used for magnitude ordering.
    pub fn magnitude(&self) -> f64 {
        self.relative().abs()
    }

    /// Signed percentage, e.g. `-12.34%`, or `~`.
    pub fn percent(&self) -> String {
        match self.ratio() {
            Some(_) => format!("{:+.2}%", (self.after - self.before) / self.before * 100.0),
            None => UNCHANGED.to_string(),
        }
    }

    /// Signed multiple, e.g. `+1.45x`, or `~`.
    pub fn multiple(&self) -> String {
        match self.ratio() {
            Some(ratio) => format!("{:+.2}x", ratio),
            None => UNCHANGED.to_string(),
        }
    }
}
