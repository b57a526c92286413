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

//! Build command - static HTML leaderboard

use super::{write_into, write_output};
use crate::cli::ViewArgs;
use crate::error::CliError;
use llmboard_load::{load, LoadConfig};
use llmboard_site::{build_site, render_page, RenderOptions};
use std::path::Path;
use tracing::info;

/// Options of the `build` command.
#[derive(Debug, Clone, Copy)]
pub struct BuildArgs<'a> {
    /// Output file, or directory with `site`.
    pub output: Option<&'a str>,
    pub site: bool,
    pub title: Option<&'a str>,
    pub highlight: usize,
    pub charts: bool,
    pub view: &'a ViewArgs,
}

/// Render the leaderboard page, or the whole linked site.
///
/// A file that fails to load still produces a page, carrying the error
/// message in place of the table; the command then fails with the load
/// error.
///
/// # Errors
///
/// Returns `Err` if the data file does not load or output cannot be written.
pub fn build(file: &str, args: &BuildArgs<'_>) -> Result<(), CliError> {
    let outcome = load(file, &LoadConfig::default());
    let load_error = outcome.error.clone();

    let mut options = RenderOptions {
        highlight_top: args.highlight,
        include_charts: args.charts,
        view_mode: args.view.view_mode(),
        ..RenderOptions::default()
    };
    if let Some(title) = args.title {
        options.title = title.to_string();
    }
    if let Some(err) = &load_error {
        options.load_error = Some(err.to_string());
    }

    let board = outcome.into_leaderboard();

    match (args.site, args.output) {
        (true, Some(dir)) => {
            let pages = build_site(&board, &options);
            for page in &pages {
                write_into(Path::new(dir), &page.file_name, &page.html)?;
            }
            info!(dir, pages = pages.len(), "wrote site");
        }
        (true, None) => {
            return Err(CliError::InvalidInput(
                "--site requires an output directory".to_string(),
            ))
        }
        (false, output) => {
            write_output(&render_page(&board, &args.view.state(), &options), output)?;
        }
    }

    match load_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
