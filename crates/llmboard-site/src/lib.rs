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

//! Presentation layer for the llmboard leaderboard.
//!
//! Renders a [`Leaderboard`](llmboard_core::Leaderboard) as a static HTML
//! site ([`build_site`], [`render_page`]) or as terminal text
//! ([`render_table`], [`render_detail`]). Rendering is a pure function of
//! the board, the [`ViewState`](llmboard_core::ViewState) and the
//! [`RenderOptions`]; nothing is measured or mutated after the fact.
//!
//! # Examples
//!
//! ```
//! use llmboard_core::{Leaderboard, ModelRecord, ViewState};
//! use llmboard_site::{render_page, RenderOptions};
//!
//! let board = Leaderboard::new(vec![ModelRecord::new(1, "m", 48.4, 45_200.0, 0.34)]);
//! let html = render_page(&board, &ViewState::default(), &RenderOptions::default());
//! assert!(html.contains("48.4%"));
//! assert!(html.contains("$0.340"));
//! ```

pub mod detail;
pub mod format;
pub mod html;
pub mod options;
pub mod text;

pub use detail::{detail_sections, DetailSection};
pub use html::{build_site, escape, page_file_name, reachable_states, render_page, SitePage, INDEX_PAGE};
pub use options::{RenderOptions, ViewMode};
pub use text::{render_detail, render_table};
