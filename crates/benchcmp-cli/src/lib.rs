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

//! benchcmp CLI library.
//!
//! Reads two benchmark reports, pairs benchmarks by name and prints the
//! per-metric change as aligned text or JSON.
//!
//! # Usage
//!
//! ```text
//! benchcmp [--changed] [--mag] [--format text|json] OLD NEW
//! ```
//!
//! - **--changed**: hide rows whose value did not change
//! - **--mag**: sort each table by magnitude of change instead of report order
//!
//! Benchmarks present in only one report produce a warning on stderr.
//!
//! # Configuration
//!
//! - `BENCHCMP_MAX_FILE_SIZE`: maximum input size in bytes (default 1 GB)
//! - `RUST_LOG`: log filter for diagnostics on stderr
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Unreadable inputs, malformed
//! benchmark lines and reports with no benchmark in common are fatal.

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
