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

//! YAML data files.

use crate::config::LoadConfig;
use crate::error::LoadError;
use crate::check_limits;
use llmboard_core::ModelRecord;
use serde_yaml::Value as YamlValue;

/// Parse a YAML document holding a sequence of records.
///
/// # Examples
///
/// ```rust
/// use llmboard_load::{from_yaml, LoadConfig};
///
/// let yaml = r#"
/// - id: 1
///   name: Gemini Flash 1.5 8B
///   passRate: 2.7
///   speed: 88600
///   cost: 0.0
///   details:
///     pass_num_2: 6
///     total_tests: 225
/// "#;
/// let records = from_yaml(yaml, &LoadConfig::default()).unwrap();
/// assert_eq!(records[0].details.pass_num_2, Some(6));
/// ```
pub fn from_yaml(yaml: &str, config: &LoadConfig) -> Result<Vec<ModelRecord>, LoadError> {
    if yaml.len() > config.max_document_size {
        return Err(LoadError::DocumentTooLarge {
            size: yaml.len(),
            max_size: config.max_document_size,
        });
    }

    let value: YamlValue = serde_yaml::from_str(yaml)?;
    let items = match value {
        YamlValue::Sequence(items) => items,
        other => {
            return Err(LoadError::InvalidRoot {
                found: yaml_kind(&other).to_string(),
            })
        }
    };
    check_limits(items.len(), config)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_yaml::from_value::<ModelRecord>(item)
                .map_err(|e| LoadError::Parse(format!("record {}: {}", index, e)))
        })
        .collect()
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "empty document",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_root_rejected() {
        let err = from_yaml("id: 1\nname: x\n", &LoadConfig::default()).unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidRoot {
                found: "mapping".to_string()
            }
        );
    }

    #[test]
    fn test_empty_document_rejected() {
        assert!(from_yaml("", &LoadConfig::default()).is_err());
        assert!(from_yaml("# only a comment\n", &LoadConfig::default()).is_err());
    }

    #[test]
    fn test_empty_sequence_is_empty_collection() {
        assert!(from_yaml("[]", &LoadConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_bad_record_reports_index() {
        let yaml = "- {id: 1, name: a, passRate: 1, speed: 1, cost: 0}\n- {id: 2, name: b}\n";
        match from_yaml(yaml, &LoadConfig::default()) {
            Err(LoadError::Parse(msg)) => assert!(msg.starts_with("record 1:"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_document_size_limit() {
        let config = LoadConfig::builder().max_document_size(4).build();
        assert!(matches!(
            from_yaml("[1, 2, 3]", &config),
            Err(LoadError::DocumentTooLarge { size: 9, max_size: 4 })
        ));
    }

    #[test]
    fn test_record_count_limit() {
        let config = LoadConfig::builder().max_records(1).build();
        let yaml = "- {id: 1, name: a, passRate: 1, speed: 1, cost: 0}\n- {id: 2, name: b, passRate: 1, speed: 1, cost: 0}\n";
        assert!(matches!(
            from_yaml(yaml, &config),
            Err(LoadError::TooManyRecords { count: 2, max_records: 1 })
        ));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            from_yaml("- [unclosed", &LoadConfig::default()),
            Err(LoadError::Parse(_))
        ));
    }
}
