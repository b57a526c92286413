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

//! JSON data files.

use crate::check_limits;
use crate::config::LoadConfig;
use crate::error::LoadError;
use llmboard_core::ModelRecord;
use serde_json::Value as JsonValue;

/// Parse a JSON array of records.
///
/// Same contract as [`from_yaml`](crate::from_yaml).
pub fn from_json(json: &str, config: &LoadConfig) -> Result<Vec<ModelRecord>, LoadError> {
    if json.len() > config.max_document_size {
        return Err(LoadError::DocumentTooLarge {
            size: json.len(),
            max_size: config.max_document_size,
        });
    }

    let value: JsonValue = serde_json::from_str(json)?;
    let items = match value {
        JsonValue::Array(items) => items,
        other => {
            return Err(LoadError::InvalidRoot {
                found: json_kind(&other).to_string(),
            })
        }
    };
    check_limits(items.len(), config)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<ModelRecord>(item)
                .map_err(|e| LoadError::Parse(format!("record {}: {}", index, e)))
        })
        .collect()
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
