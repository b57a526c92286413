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

//! Rendering options.

use std::fmt;

/// Column set of the leaderboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Rank, model, pass rate, speed, cost.
    #[default]
    Simple,
    /// Adds seconds per correct case, first pass rate, date, error counts and badges.
    Detailed,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Simple, ViewMode::Detailed];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Simple => "simple",
            ViewMode::Detailed => "detailed",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`render_page`](crate::render_page) and [`build_site`](crate::build_site).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Page heading and `<title>`.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
    pub view_mode: ViewMode,
    /// Number of leading rows highlighted.
    pub highlight_top: usize,
    /// Embed chart series as JSON for client-side plotting.
    pub include_charts: bool,
    /// Message shown instead of the table when loading failed.
    pub load_error: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Coding LLM Benchmarks".to_string(),
            subtitle: "Polyglot coding benchmark results for various models".to_string(),
            view_mode: ViewMode::Simple,
            highlight_top: 3,
            include_charts: true,
            load_error: None,
        }
    }
}

impl RenderOptions {
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_load_error(mut self, message: impl Into<String>) -> Self {
        self.load_error = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.view_mode, ViewMode::Simple);
        assert_eq!(options.highlight_top, 3);
        assert!(options.load_error.is_none());
    }
}
