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

//! Orderings over comparisons.

use crate::correlate::BenchCmp;
use crate::metric::Metric;
use std::cmp::Ordering;

/// How comparison rows are ordered within each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortOrder {
    /// First appearance in the before run.
    #[default]
    Parse,
    /// Largest change first, computed per metric.
    Magnitude,
}

impl SortOrder {
    /// Sort `cmps` for the table of `metric`.
    pub fn apply(self, cmps: &mut [BenchCmp<'_>], metric: Metric) {
        match self {
            SortOrder::Parse => sort_by_parse_order(cmps),
            SortOrder::Magnitude => sort_by_magnitude(cmps, metric),
        }
    }
}

/// Restore before-run order.
pub fn sort_by_parse_order(cmps: &mut [BenchCmp<'_>]) {
    cmps.sort_by_key(BenchCmp::ord);
}

/// Sort by descending magnitude of the change in `metric`.
///
/// Comparisons where `metric` is not measured on both sides go last. A zero
/// before value counts as unchanged and ranks with the unchanged rows. Equal
/// magnitudes fall back to parse order, so the result does not depend on the
/// incoming order.
pub fn sort_by_magnitude(cmps: &mut [BenchCmp<'_>], metric: Metric) {
    cmps.sort_by(|a, b| compare_magnitude(a, b, metric).then_with(|| a.ord().cmp(&b.ord())));
}

fn compare_magnitude(a: &BenchCmp<'_>, b: &BenchCmp<'_>, metric: Metric) -> Ordering {
    let mag = |c: &BenchCmp<'_>| c.delta(metric).map(|d| d.magnitude());
    match (mag(a), mag(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::correlate;
    use crate::parser::parse_str;

    const BEFORE: &str = "BenchmarkA 1 100 ns/op 10 allocs/op\n\
                          BenchmarkB 1 100 ns/op 10 allocs/op\n\
                          BenchmarkC 1 100 ns/op\n\
                          BenchmarkD 1 100 ns/op 10 allocs/op\n";
    const AFTER: &str = "BenchmarkA 1 95 ns/op 1 allocs/op\n\
                         BenchmarkB 1 150 ns/op 10 allocs/op\n\
                         BenchmarkC 1 10 ns/op\n\
                         BenchmarkD 1 100 ns/op 12 allocs/op\n";

    fn names(cmps: &[BenchCmp<'_>]) -> Vec<String> {
        cmps.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_magnitude_order_per_metric() {
        let before = parse_str(BEFORE).unwrap();
        let after = parse_str(AFTER).unwrap();
        let mut cmps = correlate(&before, &after).comparisons;

        sort_by_magnitude(&mut cmps, Metric::NsOp);
        assert_eq!(names(&cmps), vec!["BenchmarkC", "BenchmarkB", "BenchmarkA", "BenchmarkD"]);

        sort_by_magnitude(&mut cmps, Metric::AllocsOp);
        assert_eq!(names(&cmps), vec!["BenchmarkA", "BenchmarkD", "BenchmarkB", "BenchmarkC"]);
    }

    #[test]
    fn test_parse_order_restores_original() {
        let before = parse_str(BEFORE).unwrap();
        let after = parse_str(AFTER).unwrap();
        let mut cmps = correlate(&before, &after).comparisons;
        sort_by_magnitude(&mut cmps, Metric::NsOp);
        sort_by_parse_order(&mut cmps);
        assert_eq!(names(&cmps), vec!["BenchmarkA", "BenchmarkB", "BenchmarkC", "BenchmarkD"]);
    }

    #[test]
    fn test_unmeasured_sort_last_in_parse_order() {
        let before = parse_str("BenchmarkA 1 1 ns/op\nBenchmarkB 1 1 ns/op 4 B/op\nBenchmarkC 1 1 ns/op\n").unwrap();
        let after = parse_str("BenchmarkA 1 1 ns/op\nBenchmarkB 1 1 ns/op 8 B/op\nBenchmarkC 1 1 ns/op\n").unwrap();
        let mut cmps = correlate(&before, &after).comparisons;
        cmps.reverse();
        sort_by_magnitude(&mut cmps, Metric::BOp);
        assert_eq!(names(&cmps), vec!["BenchmarkB", "BenchmarkA", "BenchmarkC"]);
    }

    #[test]
    fn test_zero_before_ranks_with_unchanged() {
        let before = parse_str(
            "BenchmarkC 1 1 ns/op 8 B/op\nBenchmarkZ 1 1 ns/op 0 B/op\n\
             BenchmarkU 1 1 ns/op 8 B/op\nBenchmarkN 1 1 ns/op\n",
        )
        .unwrap();
        let after = parse_str(
            "BenchmarkC 1 1 ns/op 16 B/op\nBenchmarkZ 1 1 ns/op 64 B/op\n\
             BenchmarkU 1 1 ns/op 8 B/op\nBenchmarkN 1 1 ns/op\n",
        )
        .unwrap();
        let mut cmps = correlate(&before, &after).comparisons;
        cmps.reverse();
        sort_by_magnitude(&mut cmps, Metric::BOp);
        assert_eq!(names(&cmps), vec!["BenchmarkC", "BenchmarkZ", "BenchmarkU", "BenchmarkN"]);
    }

    #[test]
    fn test_magnitude_order_throughput_uses_distance_from_one() {
        // 1.6x outranks 0.5x, which outranks 1.4x
        let before = parse_str(
            "BenchmarkA 1 1 ns/op 100 MB/s\nBenchmarkB 1 1 ns/op 100 MB/s\n\
             BenchmarkC 1 1 ns/op 100 MB/s\n",
        )
        .unwrap();
        let after = parse_str(
            "BenchmarkA 1 1 ns/op 50 MB/s\nBenchmarkB 1 1 ns/op 140 MB/s\n\
             BenchmarkC 1 1 ns/op 160 MB/s\n",
        )
        .unwrap();
        let mut cmps = correlate(&before, &after).comparisons;
        sort_by_magnitude(&mut cmps, Metric::MbS);
        assert_eq!(names(&cmps), vec!["BenchmarkC", "BenchmarkA", "BenchmarkB"]);
    }

    #[test]
    fn test_sort_order_apply() {
        let before = parse_str(BEFORE).unwrap();
        let after = parse_str(AFTER).unwrap();
        let mut cmps = correlate(&before, &after).comparisons;
        SortOrder::Magnitude.apply(&mut cmps, Metric::NsOp);
        assert_eq!(cmps[0].name(), "BenchmarkC");
        SortOrder::Parse.apply(&mut cmps, Metric::NsOp);
        assert_eq!(cmps[0].name(), "BenchmarkA");
        assert_eq!(SortOrder::default(), SortOrder::Parse);
    }
}
