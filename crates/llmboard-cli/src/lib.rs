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

//! llmboard CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **show**: print the ranked table for a view
//! - **detail**: print every field of one record
//! - **build**: render the static HTML page or the whole linked site
//! - **charts**: emit visualization series as JSON
//! - **validate**: report load errors and invariant violations
//!
//! # Examples
//!
//! ```no_run
//! use llmboard_cli::commands::{detail, validate};
//!
//! # fn main() -> Result<(), llmboard_cli::error::CliError> {
//! validate("data/models.yaml")?;
//! detail("data/models.yaml", 4)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
