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

//! Table rendering.

use crate::error::CliError;
use benchcmp_core::Table;
use clap::ValueEnum;

/// Spaces between columns.
pub const COLUMN_PADDING: usize = 5;

/// Output format for comparison tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned text, one table per metric
    #[default]
    Text,
    /// JSON array of tables
    Json,
}

/// Render tables in `format`.
pub fn render(tables: &[Table], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(tables)),
        OutputFormat::Json => render_json(tables),
    }
}

/// Render tables as left-aligned columns, separated by blank lines.
pub fn render_text(tables: &[Table]) -> String {
    tables
        .iter()
        .map(render_table)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(table: &Table) -> String {
    let header: [&str; 4] = [
        table.header[0].as_str(),
        table.header[1].as_str(),
        table.header[2].as_str(),
        table.header[3].as_str(),
    ];
    let lines: Vec<[&str; 4]> = std::iter::once(header)
        .chain(table.rows.iter().map(|row| row.cells()))
        .collect();

    let mut widths = [0usize; 4];
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let mut text = String::new();
        for (cell, width) in line.iter().zip(widths) {
            text.push_str(cell);
            let fill = width - cell.chars().count() + COLUMN_PADDING;
            text.extend(std::iter::repeat(' ').take(fill));
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

/// Render tables as pretty-printed JSON.
pub fn render_json(tables: &[Table]) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(tables)?;
    json.push('\n');
    Ok(json)
}
