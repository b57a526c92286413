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

//! CLI command definitions and argument parsing.

mod view;

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use llmboard_core::ChartKind;

pub use view::ViewArgs;

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ranked leaderboard table
    Show {
        /// Benchmark data file (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Print every field of one record
    ///
    /// Absent fields are shown as N/A.
    Detail {
        /// Benchmark data file (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// Record id
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Render the static HTML leaderboard
    ///
    /// Without --site, renders the single page for the given view to OUTPUT
    /// (or stdout). With --site, writes every reachable view page into the
    /// OUTPUT directory, index.html being the default view.
    Build {
        /// Benchmark data file (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file, or output directory with --site
        #[arg(short, long)]
        output: Option<String>,

        /// Write the full linked site instead of one page
        #[arg(long, requires = "output")]
        site: bool,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Number of leading rows to highlight
        #[arg(long, default_value_t = 3)]
        highlight: usize,

        /// Do not embed chart series in the page
        #[arg(long)]
        no_charts: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Emit chart series as JSON
    Charts {
        /// Benchmark data file (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// Single series (pass-rate, languages, cost-efficiency, error-analysis, radar)
        #[arg(long)]
        chart: Option<ChartKind>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a data file for load errors and invariant violations
    ///
    /// Exits with status 1 when the file does not load or any record
    /// violates an invariant.
    Validate {
        /// Benchmark data file (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the data file cannot be loaded, a requested record
    /// does not exist, output cannot be written, or validation fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Show { file, view } => commands::show(&file, &view),
            Commands::Detail { file, id } => commands::detail(&file, id),
            Commands::Build {
                file,
                output,
                site,
                title,
                highlight,
                no_charts,
                view,
            } => commands::build(
                &file,
                &commands::BuildArgs {
                    output: output.as_deref(),
                    site,
                    title: title.as_deref(),
                    highlight,
                    charts: !no_charts,
                    view: &view,
                },
            ),
            Commands::Charts {
                file,
                chart,
                pretty,
                output,
            } => commands::charts(&file, chart, pretty, output.as_deref()),
            Commands::Validate { file } => commands::validate(&file),
        }
    }
}
