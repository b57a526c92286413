// llmboard - Coding LLM Benchmark Leaderboard
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

//! Charts command - visualization series as JSON

use super::{load_board, write_output};
use crate::error::CliError;
use llmboard_core::{charts as series, ChartData, ChartKind};
use serde_json::Value;

/// Emit one chart series, or all of them keyed by name.
pub fn charts(
    file: &str,
    chart: Option<ChartKind>,
    pretty: bool,
    output: Option<&str>,
) -> Result<(), CliError> {
    let board = load_board(file)?;

    let value = match chart {
        None => serde_json::to_value(ChartData::build(&board))?,
        Some(ChartKind::PassRate) => serde_json::to_value(series::pass_rate_series(&board))?,
        Some(ChartKind::Languages) => serde_json::to_value(series::language_series(&board))?,
        Some(ChartKind::CostEfficiency) => {
            serde_json::to_value(series::cost_efficiency_series(&board))?
        }
        Some(ChartKind::ErrorAnalysis) => serde_json::to_value(series::error_series(&board))?,
        Some(ChartKind::Radar) => serde_json::to_value(series::radar_series(&board))?,
    };

    let mut json = render(&value, pretty)?;
    json.push('\n');
    write_output(&json, output)
}

fn render(value: &Value, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
