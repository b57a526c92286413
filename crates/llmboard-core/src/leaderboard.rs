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

//! The deduplicated record collection behind every view.

use crate::metrics;
use crate::model::{ModelRecord, Violation};
use crate::view::{sort_and_filter, ViewState};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

/// An immutable collection of benchmark records with unique ids.
///
/// Duplicate ids in the source are dropped on construction (first
/// occurrence wins) so positional ranks stay consistent across views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    records: Vec<ModelRecord>,
    duplicates: usize,
}

impl Leaderboard {
    pub fn new(records: Vec<ModelRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        let mut duplicates = 0;

        for record in records {
            if seen.insert(record.id) {
                kept.push(record);
            } else {
                warn!(id = record.id, name = %record.name, "dropping duplicate record id");
                duplicates += 1;
            }
        }

        Self {
            records: kept,
            duplicates,
        }
    }

    /// Records in source order.
    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&ModelRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of source records dropped for repeating an id.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Latest run date, shown in the page footer.
    pub fn most_recent_date(&self) -> Option<NaiveDate> {
        metrics::most_recent_date(&self.records)
    }

    /// Ordered, filtered view. See [`sort_and_filter`].
    pub fn view(&self, state: &ViewState) -> Vec<&ModelRecord> {
        sort_and_filter(&self.records, state)
    }

    /// Every invariant violation, paired with the offending record id.
    pub fn violations(&self) -> Vec<(u64, Violation)> {
        self.records
            .iter()
            .flat_map(|record| {
                record
                    .violations()
                    .into_iter()
                    .map(move |violation| (record.id, violation))
            })
            .collect()
    }
}

impl From<Vec<ModelRecord>> for Leaderboard {
    fn from(records: Vec<ModelRecord>) -> Self {
        Self::new(records)
    }
}
