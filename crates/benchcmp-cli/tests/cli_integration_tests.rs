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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// Test helper to create a benchcmp command
fn benchcmp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchcmp").expect("Failed to find benchcmp binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// Test helper to create a temporary report file
fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

const OLD: &str = "\
goos: linux
BenchmarkA-8   1000   100 ns/op   50.00 MB/s   4 allocs/op   64 B/op
BenchmarkB-8   1000   50 ns/op
BenchmarkC-8   1000   20 ns/op
PASS
";

const NEW: &str = "\
goos: linux
BenchmarkA-8   1000   80 ns/op   100.00 MB/s   4 allocs/op   32 B/op
BenchmarkC-8   1000   30 ns/op
BenchmarkD-8   1000   10 ns/op
PASS
";

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchcmp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare two benchmark runs"))
        .stdout(predicate::str::contains("--changed"))
        .stdout(predicate::str::contains("--mag"));
}

#[test]
fn test_version_output() {
    benchcmp_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchcmp"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    benchcmp_cmd().assert().failure().code(2);
}

// ===== Comparison Tests =====

#[test]
fn test_compare_text_output() {
    let old = create_temp_file(OLD);
    let new = create_temp_file(NEW);

    benchcmp_cmd()
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmark"))
        .stdout(predicate::str::contains("old ns/op"))
        .stdout(predicate::str::contains("-20.00%"))
        .stdout(predicate::str::contains("+50.00%"))
        .stdout(predicate::str::contains("speedup"))
        .stdout(predicate::str::contains("+2.00x"))
        .stdout(predicate::str::contains("old allocs"))
        .stdout(predicate::str::contains("old bytes"))
        .stdout(predicate::str::contains("-50.00%"))
        .stdout(predicate::str::contains("BenchmarkB-8").not())
        .stdout(predicate::str::contains("BenchmarkD-8").not())
        .stderr(predicate::str::contains("ignoring BenchmarkB-8: missing from after"))
        .stderr(predicate::str::contains("ignoring BenchmarkD-8: missing from before"));
}

#[test]
fn test_warnings_in_first_seen_order() {
    let old = create_temp_file(OLD);
    let new = create_temp_file(NEW);

    let output = benchcmp_cmd()
        .arg(old.path())
        .arg(new.path())
        .output()
        .expect("Failed to run benchcmp");
    let stderr = String::from_utf8_lossy(&output.stderr);
    let b = stderr.find("BenchmarkB-8").expect("warning for B");
    let d = stderr.find("BenchmarkD-8").expect("warning for D");
    assert!(b < d);
}

#[test]
fn test_compare_exact_ns_table() {
    let old = create_temp_file("BenchmarkA 1 100 ns/op\nBenchmarkB 1 9.5 ns/op\n");
    let new = create_temp_file("BenchmarkA 1 80 ns/op\nBenchmarkB 1 9.5 ns/op\n");

    benchcmp_cmd()
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(
            "benchmark      old ns/op     new ns/op     delta\n\
             BenchmarkA     100           80            -20.00%\n\
             BenchmarkB     9.50          9.50          ~\n",
        );
}

#[test]
fn test_changed_only() {
    let old = create_temp_file("BenchmarkA 1 100 ns/op\nBenchmarkB 1 50 ns/op\n");
    let new = create_temp_file("BenchmarkA 1 80 ns/op\nBenchmarkB 1 50 ns/op\n");

    benchcmp_cmd()
        .arg("--changed")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BenchmarkA"))
        .stdout(predicate::str::contains("BenchmarkB").not());
}

#[test]
fn test_magnitude_sort() {
    let old = create_temp_file("BenchmarkSmall 1 100 ns/op\nBenchmarkLarge 1 100 ns/op\n");
    let new = create_temp_file("BenchmarkSmall 1 99 ns/op\nBenchmarkLarge 1 10 ns/op\n");

    let output = benchcmp_cmd()
        .arg("--mag")
        .arg(old.path())
        .arg(new.path())
        .output()
        .expect("Failed to run benchcmp");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let large = stdout.find("BenchmarkLarge").expect("large row");
    let small = stdout.find("BenchmarkSmall").expect("small row");
    assert!(large < small);
}

#[test]
fn test_json_output() {
    let old = create_temp_file(OLD);
    let new = create_temp_file(NEW);

    let output = benchcmp_cmd()
        .args(["--format", "json"])
        .arg(old.path())
        .arg(new.path())
        .output()
        .expect("Failed to run benchcmp");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    let tables = value.as_array().expect("array of tables");
    assert_eq!(tables.len(), 4);
    assert_eq!(tables[0]["metric"], "ns_op");
    assert_eq!(tables[0]["rows"][0]["name"], "BenchmarkA-8");
    assert_eq!(tables[0]["rows"][0]["delta"], "-20.00%");
}

#[test]
fn test_invalid_utf8_noise_is_skipped() {
    let old = create_temp_file("BenchmarkA 1 100 ns/op\nBenchmarkB 1 50 ns/op\n");
    let new = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(
        new.path(),
        b"BenchmarkA 1 80 ns/op\nlog: \xff\xfe garbage\nBenchmarkB 1 50 ns/op\n",
    )
    .expect("Failed to write temp file");

    benchcmp_cmd()
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("-20.00%"))
        .stdout(predicate::str::contains("BenchmarkB"))
        .stderr(predicate::str::contains("warning").not());
}

// ===== Error Tests =====

#[test]
fn test_missing_file() {
    let new = create_temp_file(NEW);

    benchcmp_cmd()
        .arg("/nonexistent/old.txt")
        .arg(new.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/nonexistent/old.txt"));
}

#[test]
fn test_malformed_report() {
    let old = create_temp_file(OLD);
    let new = create_temp_file("BenchmarkA-8 1000 fast ns/op\n");

    benchcmp_cmd()
        .arg(old.path())
        .arg(new.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_no_overlap() {
    let old = create_temp_file("BenchmarkA 1 1 ns/op\n");
    let new = create_temp_file("BenchmarkB 1 1 ns/op\n");

    benchcmp_cmd()
        .arg(old.path())
        .arg(new.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no repeated benchmarks"));
}

#[test]
fn test_file_size_limit() {
    let old = create_temp_file(OLD);
    let new = create_temp_file(NEW);

    benchcmp_cmd()
        .env("BENCHCMP_MAX_FILE_SIZE", "10")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}
