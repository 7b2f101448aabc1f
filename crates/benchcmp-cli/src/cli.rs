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

//! Command-line argument definitions.

use crate::commands;
use crate::error::CliError;
use crate::render::OutputFormat;
use benchcmp_core::{CompareOptions, SortOrder};
use clap::Parser;

const USAGE_FOOTER: &str = "\
Each input file should be benchmark output, for example from:
    go test -run=NONE -bench=. > [old,new].txt

benchcmp compares old and new for each benchmark.

If -benchmem is added to the \"go test\" command,
benchcmp will also compare memory allocations.";

/// benchcmp - compare two benchmark runs
///
/// Pairs benchmarks with the same name in OLD and NEW and prints one table
/// per metric (ns/op, MB/s, allocs/op, B/op) with the relative change.
#[derive(Parser, Debug)]
#[command(name = "benchcmp")]
#[command(author, version, about = "benchcmp - compare two benchmark runs", long_about = None)]
#[command(after_help = USAGE_FOOTER)]
pub struct Cli {
    /// Benchmark output of the old run
    #[arg(value_name = "OLD")]
    pub old: String,

    /// Benchmark output of the new run
    #[arg(value_name = "NEW")]
    pub new: String,

    /// Show only benchmarks that have changed
    #[arg(long)]
    pub changed: bool,

    /// Sort benchmarks by magnitude of change
    #[arg(long)]
    pub mag: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// The comparison options selected by the flags.
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            changed_only: self.changed,
            sort: if self.mag {
                SortOrder::Magnitude
            } else {
                SortOrder::Parse
            },
        }
    }

    /// Run the comparison.
    pub fn execute(self) -> Result<(), CliError> {
        let options = self.compare_options();
        commands::compare(&self.old, &self.new, &options, self.format)
    }
}
