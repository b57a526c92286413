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

//! llmboard Command Line Interface

use clap::Parser;
use llmboard_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// llmboard - Coding LLM benchmark leaderboard
///
/// Ranks benchmark runs by pass rate, speed or cost, and renders them as a
/// terminal table, a static HTML site or chart series.
///
/// # Examples
///
/// ```bash
/// # Fastest open-source models
/// llmboard show data/models.yaml --sort speed --category open-source
///
/// # Static site
/// llmboard build data/models.yaml --site -o public
///
/// # Check a data file
/// llmboard validate data/models.yaml
/// ```
#[derive(Parser)]
#[command(name = "llmboard")]
#[command(author, version, about = "llmboard - Coding LLM benchmark leaderboard", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "llmboard=debug" } else { "llmboard=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
