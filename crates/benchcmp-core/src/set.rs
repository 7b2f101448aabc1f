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

//! Ordered, name-keyed collection of benchmark records.

use crate::bench::Bench;
use std::collections::HashMap;

/// All benchmarks from one report, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchSet {
    benches: Vec<Bench>,
    index: HashMap<String, usize>,
}

impl BenchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. A name already present is folded into the existing
    /// record with [`Bench::absorb`] and keeps its original position.
    pub fn insert(&mut self, mut bench: Bench) {
        match self.index.get(&bench.name) {
            Some(&pos) => self.benches[pos].absorb(&bench),
            None => {
                let pos = self.benches.len();
                bench.ord = pos;
                self.index.insert(bench.name.clone(), pos);
                self.benches.push(bench);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Bench> {
        self.index.get(name).map(|&pos| &self.benches[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.benches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benches.is_empty()
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bench> {
        self.benches.iter()
    }

    /// Names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.benches.iter().map(|b| b.name.as_str())
    }
}

impl<'a> IntoIterator for &'a BenchSet {
    type Item = &'a Bench;
    type IntoIter = std::slice::Iter<'a, Bench>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Bench> for BenchSet {
    fn from_iter<I: IntoIterator<Item = Bench>>(iter: I) -> Self {
        let mut set = BenchSet::new();
        for bench in iter {
            set.insert(bench);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns(name: &str, ns: f64) -> Bench {
        Bench {
            ns_op: Some(ns),
            ..Bench::new(name, 1)
        }
    }

    #[test]
    fn test_insert_assigns_ordinals() {
        let set: BenchSet = vec![ns("BenchmarkC", 1.0), ns("BenchmarkA", 2.0)]
            .into_iter()
            .collect();
        assert_eq!(set.get("BenchmarkC").unwrap().ord(), 0);
        assert_eq!(set.get("BenchmarkA").unwrap().ord(), 1);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["BenchmarkC", "BenchmarkA"]);
    }

    #[test]
    fn test_insert_repeat_does_not_grow() {
        let mut set = BenchSet::new();
        set.insert(ns("BenchmarkA", 10.0));
        set.insert(ns("BenchmarkB", 5.0));
        set.insert(ns("BenchmarkA", 7.0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("BenchmarkA").unwrap().ns_op, Some(7.0));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["BenchmarkA", "BenchmarkB"]);
    }

    #[test]
    fn test_lookup_missing() {
        let set = BenchSet::new();
        assert!(set.get("BenchmarkA").is_none());
        assert!(!set.contains("BenchmarkA"));
        assert!(set.is_empty());
    }
}
