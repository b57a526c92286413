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

//! Core data model and ranking engine for the llmboard leaderboard.
//!
//! The leaderboard displays coding benchmark results for language models:
//! pass rate, speed, cost and error statistics, one record per benchmark
//! run. This crate holds everything between the parsed data file and the
//! rendered page:
//!
//! - [`model`]: [`ModelRecord`] and its sparse [`ModelDetails`]
//! - [`metrics`]: derived values (seconds per correct case, cost efficiency,
//!   latest run date, per-language pass rate)
//! - [`view`]: the pure sort and filter engine driven by a [`ViewState`]
//! - [`leaderboard`]: the id-deduplicated collection
//! - [`charts`]: visualization series
//!
//! Loading lives in `llmboard-load`; rendering in `llmboard-site`.
//!
//! # Examples
//!
//! ```
//! use llmboard_core::{CategoryFilter, Leaderboard, ModelRecord, SortKey, ViewState};
//!
//! let board = Leaderboard::new(vec![
//!     ModelRecord::new(1, "fast", 40.0, 12_000.0, 0.5),
//!     ModelRecord::new(2, "slow", 60.0, 95_000.0, 3.0),
//! ]);
//!
//! // Clicking the speed header ranks fastest first.
//! let state = ViewState::default().select(SortKey::Speed, None);
//! let view = board.view(&state);
//! assert_eq!(view[0].name, "fast");
//!
//! // Clicking it again flips the direction.
//! let state = state.select(SortKey::Speed, None);
//! assert_eq!(board.view(&state)[0].name, "slow");
//!
//! assert_eq!(board.view(&state.with_category(CategoryFilter::OpenSource)).len(), 0);
//! ```

pub mod charts;
pub mod leaderboard;
pub mod metrics;
pub mod model;
pub mod view;

pub use charts::{ChartData, ChartKind};
pub use leaderboard::Leaderboard;
pub use metrics::{
    cost_efficiency_score, language_pass_rate, most_recent_date, seconds_per_correct_case,
};
pub use model::{Language, LanguagePassRates, ModelDetails, ModelRecord, Violation};
pub use view::{rank_key, sort_and_filter, CategoryFilter, Direction, RankKey, SortKey, ViewState};
