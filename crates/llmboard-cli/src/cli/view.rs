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

//! View selection flags shared by `show` and `build`.

use clap::Args;
use llmboard_core::{CategoryFilter, Direction, Language, SortKey, ViewState};
use llmboard_site::ViewMode;

/// Flags selecting the sort column, language, direction and category.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Column to rank by (pass-rate, speed, cost, seconds-per-correct)
    #[arg(short, long, default_value = "pass-rate")]
    pub sort: SortKey,

    /// Show and rank by one language's pass rate (javascript, python, java, cpp, go, rust)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Ascending order (default depends on the sort column)
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Descending order
    #[arg(long)]
    pub desc: bool,

    /// Which models to list (all, open-source, proprietary)
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Detailed view with extra columns and badges
    #[arg(short, long)]
    pub detailed: bool,
}

impl ViewArgs {
    pub fn state(&self) -> ViewState {
        let direction = if self.asc {
            Direction::Ascending
        } else if self.desc {
            Direction::Descending
        } else {
            self.sort.default_direction()
        };
        ViewState::new(self.sort)
            .with_language(self.language.map(Language::key))
            .with_direction(direction)
            .with_category(self.category)
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.detailed {
            ViewMode::Detailed
        } else {
            ViewMode::Simple
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        view: ViewArgs,
    }

    fn parse(args: &[&str]) -> ViewArgs {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).view
    }

    #[test]
    fn test_defaults_to_landing_view() {
        assert_eq!(parse(&[]).state(), ViewState::default());
        assert_eq!(parse(&[]).view_mode(), ViewMode::Simple);
    }

    #[test]
    fn test_sort_key_default_direction() {
        let state = parse(&["--sort", "speed"]).state();
        assert_eq!(state.direction, Direction::Ascending);
        let state = parse(&["--sort", "speed", "--desc"]).state();
        assert_eq!(state.direction, Direction::Descending);
    }

    #[test]
    fn test_language_and_category() {
        let state = parse(&["-l", "c++", "-c", "open-source", "-d"]).state();
        assert_eq!(state.language.as_deref(), Some("cpp"));
        assert_eq!(state.category, CategoryFilter::OpenSource);
    }

    #[test]
    fn test_asc_conflicts_with_desc() {
        let result = TestCli::try_parse_from(["test", "--asc", "--desc"]);
        assert!(result.is_err());
    }
}
