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

//! Static HTML rendering.
//!
//! Every reachable [`ViewState`] gets its own page. Column headers, the
//! language menu and the category menu link to the page of the state the
//! click would produce, so the toggle rule of [`ViewState::select`] carries
//! over to a site with no scripting. Record details are embedded once per
//! page and revealed with the `:target` selector.

use crate::detail::detail_sections;
use crate::format::{self, NOT_APPLICABLE};
use crate::options::{RenderOptions, ViewMode};
use llmboard_core::{
    metrics, CategoryFilter, ChartData, Direction, Language, Leaderboard, ModelRecord, SortKey,
    ViewState,
};
use std::fmt::{self, Write};
use tracing::warn;

/// File name of the landing page.
pub const INDEX_PAGE: &str = "index.html";

const HELPER_TEXT: &str =
    "Click on column headers to sort. Click on model names to view details.";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; }
#app { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
header h1 { margin: 0; font-size: 2rem; }
header h2 { margin: 0.25rem 0 1.5rem; font-weight: 400; color: #94a3b8; }
a { color: inherit; }
.controls { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-bottom: 1rem; }
.controls a { margin-right: 0.5rem; text-decoration: none; color: #94a3b8; }
.controls a.active { color: #e2e8f0; font-weight: 600; }
.helper-text { color: #94a3b8; font-size: 0.875rem; }
.load-error { padding: 1rem; border: 1px solid #ef4444; border-radius: 4px; color: #fca5a5; }
table.leaderboard { width: 100%; border-collapse: collapse; }
.leaderboard th, .leaderboard td { padding: 0.5rem; border-bottom: 1px solid #1e293b; text-align: left; }
.leaderboard th a { text-decoration: none; }
.leaderboard th.active { color: #38bdf8; }
.highlight-row { background: #1e293b; }
.progress-bar { position: relative; background: #1e293b; border-radius: 4px; height: 1.25rem; }
.progress { background: #0ea5e9; height: 100%; border-radius: 4px; }
.progress-text { position: absolute; top: 0; left: 0.5rem; font-size: 0.75rem; line-height: 1.25rem; }
.badge { display: inline-block; margin-left: 0.25rem; padding: 0 0.3rem; border-radius: 3px; font-size: 0.7rem; background: #334155; }
.model-detail { display: none; margin-top: 2rem; padding: 1rem; border: 1px solid #334155; border-radius: 4px; }
.model-detail:target { display: block; }
.model-detail dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1rem; }
.model-detail dt { color: #94a3b8; }
footer { margin-top: 2rem; color: #64748b; font-size: 0.875rem; }
"#;

/// One rendered page of the static site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    pub file_name: String,
    pub html: String,
}

/// Escape text for element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// File name of the page rendering `state` in `mode`.
///
/// The default state in simple mode is [`INDEX_PAGE`].
pub fn page_file_name(state: &ViewState, mode: ViewMode) -> String {
    if *state == ViewState::default() && mode == ViewMode::Simple {
        return INDEX_PAGE.to_string();
    }
    format!(
        "{}-{}-{}-{}-{}.html",
        state.sort_key,
        state.language.as_deref().unwrap_or("overall"),
        state.direction.as_str(),
        state.category.as_str(),
        mode
    )
}

/// Every state reachable from the landing page.
///
/// Header clicks keep the selected language, so each sort key is paired with
/// every language choice.
pub fn reachable_states() -> Vec<ViewState> {
    let languages: Vec<Option<&str>> = std::iter::once(None)
        .chain(Language::ALL.iter().map(|l| Some(l.key())))
        .collect();

    let mut states = Vec::new();
    for key in SortKey::ALL {
        for language in &languages {
            for direction in Direction::ALL {
                for category in CategoryFilter::ALL {
                    states.push(
                        ViewState::new(key)
                            .with_language(*language)
                            .with_direction(direction)
                            .with_category(category),
                    );
                }
            }
        }
    }
    states
}

/// Render every reachable page in both view modes.
///
/// `options.view_mode` is ignored; each state is rendered once per mode.
pub fn build_site(board: &Leaderboard, options: &RenderOptions) -> Vec<SitePage> {
    let states = reachable_states();
    let mut pages = Vec::with_capacity(states.len() * ViewMode::ALL.len());
    for mode in ViewMode::ALL {
        let options = options.clone().with_view_mode(mode);
        for state in &states {
            pages.push(SitePage {
                file_name: page_file_name(state, mode),
                html: render_page(board, state, &options),
            });
        }
    }
    pages
}

/// Render the page for `state`.
pub fn render_page(board: &Leaderboard, state: &ViewState, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(16 * 1024);
    // Writing into a String cannot fail.
    let _ = write_page(&mut out, board, state, options);
    out
}

fn write_page(
    out: &mut String,
    board: &Leaderboard,
    state: &ViewState,
    options: &RenderOptions,
) -> fmt::Result {
    let title = escape(&options.title);
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "<title>{}</title>", title)?;
    writeln!(out, "<style>{}</style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div id=\"app\">")?;
    writeln!(out, "<header>")?;
    writeln!(out, "<h1>{}</h1>", title)?;
    writeln!(out, "<h2>{}</h2>", escape(&options.subtitle))?;
    writeln!(out, "</header>")?;
    writeln!(out, "<main>")?;

    match options.load_error.as_deref() {
        Some(message) => {
            writeln!(
                out,
                "<div class=\"load-error\" role=\"alert\">Unable to load benchmark data: {}</div>",
                escape(message)
            )?;
        }
        None => {
            write_controls(out, state, options.view_mode)?;
            writeln!(out, "<p class=\"helper-text\">{}</p>", HELPER_TEXT)?;
            let rows = board.view(state);
            write_table(out, &rows, state, options)?;
            for record in board.records() {
                write_detail(out, record)?;
            }
            if options.include_charts {
                write_chart_data(out, board)?;
            }
        }
    }

    writeln!(out, "</main>")?;
    write_footer(out, board)?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_link(out: &mut String, href: &str, label: &str, active: bool) -> fmt::Result {
    let class = if active { " class=\"active\"" } else { "" };
    write!(out, "<a href=\"{}\"{}>{}</a>", escape(href), class, escape(label))
}

fn write_controls(out: &mut String, state: &ViewState, mode: ViewMode) -> fmt::Result {
    writeln!(out, "<nav class=\"controls\">")?;

    write!(out, "<div class=\"view-toggle\">")?;
    for candidate in ViewMode::ALL {
        let label = match candidate {
            ViewMode::Simple => "Simple View",
            ViewMode::Detailed => "Detailed View",
        };
        write_link(out, &page_file_name(state, candidate), label, candidate == mode)?;
    }
    writeln!(out, "</div>")?;

    write!(out, "<div class=\"language-dropdown\"><span>Language:</span>")?;
    let overall = state.sort_key == SortKey::PassRate && state.language.is_none();
    write_link(
        out,
        &page_file_name(&state.select(SortKey::PassRate, None), mode),
        &menu_label("All Languages", overall, state.direction),
        overall,
    )?;
    for language in Language::ALL {
        let active = state.sort_key == SortKey::PassRate
            && state.language.as_deref() == Some(language.key());
        write_link(
            out,
            &page_file_name(&state.select(SortKey::PassRate, Some(language.key())), mode),
            &menu_label(language.label(), active, state.direction),
            active,
        )?;
    }
    writeln!(out, "</div>")?;

    write!(out, "<div class=\"model-type-dropdown\"><span>Show:</span>")?;
    for category in CategoryFilter::ALL {
        write_link(
            out,
            &page_file_name(&state.clone().with_category(category), mode),
            category.label(),
            category == state.category,
        )?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "</nav>")
}

fn menu_label(label: &str, active: bool, direction: Direction) -> String {
    if active {
        format!("{} {}", label, direction.arrow())
    } else {
        label.to_string()
    }
}

fn write_sortable_header(
    out: &mut String,
    state: &ViewState,
    mode: ViewMode,
    key: SortKey,
    label: &str,
) -> fmt::Result {
    let active = state.sort_key == key;
    let href = page_file_name(&state.select(key, state.language.as_deref()), mode);
    let text = menu_label(label, active, state.direction);
    let class = if active { "sortable active" } else { "sortable" };
    writeln!(
        out,
        "<th class=\"{} {}\"><a href=\"{}\">{}</a></th>",
        key,
        class,
        escape(&href),
        escape(&text)
    )
}

fn write_table(
    out: &mut String,
    rows: &[&ModelRecord],
    state: &ViewState,
    options: &RenderOptions,
) -> fmt::Result {
    let mode = options.view_mode;
    writeln!(out, "<div class=\"leaderboard-container\">")?;
    writeln!(out, "<table class=\"leaderboard {}-view\">", mode)?;
    writeln!(out, "<thead>")?;
    writeln!(out, "<tr>")?;
    writeln!(out, "<th class=\"rank\">Rank</th>")?;
    writeln!(out, "<th class=\"model\">Model</th>")?;

    let pass_rate_label = match state.language.as_deref() {
        Some(language) => format!("Pass Rate ({})", format::language_label(language)),
        None => "Pass Rate".to_string(),
    };
    write_sortable_header(out, state, mode, SortKey::PassRate, &pass_rate_label)?;
    write_sortable_header(out, state, mode, SortKey::Speed, "Speed")?;
    write_sortable_header(out, state, mode, SortKey::Cost, "Cost")?;
    let columns = if mode == ViewMode::Detailed {
        write_sortable_header(
            out,
            state,
            mode,
            SortKey::SecondsPerCorrectCase,
            "Sec/Correct",
        )?;
        for label in ["First Pass", "Date", "Errors", "Timeouts", "Malformed"] {
            writeln!(out, "<th>{}</th>", label)?;
        }
        11
    } else {
        5
    };
    writeln!(out, "</tr>")?;
    writeln!(out, "</thead>")?;
    writeln!(out, "<tbody>")?;

    if rows.is_empty() {
        writeln!(
            out,
            "<tr class=\"empty-row\"><td colspan=\"{}\">No models match the current filter.</td></tr>",
            columns
        )?;
    }

    for (index, record) in rows.iter().enumerate() {
        write_row(out, index, record, state, options)?;
    }

    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</div>")
}

fn write_row(
    out: &mut String,
    index: usize,
    record: &ModelRecord,
    state: &ViewState,
    options: &RenderOptions,
) -> fmt::Result {
    let class = if index < options.highlight_top {
        "clickable-row highlight-row"
    } else {
        "clickable-row"
    };
    writeln!(out, "<tr class=\"{}\" id=\"row-{}\">", class, record.id)?;
    writeln!(out, "<td class=\"rank\">{}</td>", index + 1)?;

    write!(
        out,
        "<td class=\"model\"><a href=\"#model-{}\">{}</a>",
        record.id,
        escape(&record.name)
    )?;
    if options.view_mode == ViewMode::Detailed {
        for badge in format::badges(record) {
            write!(
                out,
                "<span class=\"badge badge-{}\" title=\"{}\">{}</span>",
                escape(&badge.class),
                escape(&badge.tooltip),
                badge.symbol
            )?;
        }
    }
    writeln!(out, "</td>")?;

    let shown_rate = match state.language.as_deref() {
        Some(language) => {
            metrics::language_pass_rate_for_display(record, language).unwrap_or(0.0)
        }
        None => record.pass_rate,
    };
    writeln!(
        out,
        "<td class=\"pass-rate\"><div class=\"progress-bar\"><div class=\"progress\" style=\"width: {}%\"></div><span class=\"progress-text\">{}</span></div></td>",
        bar_width(shown_rate),
        format::pass_rate_cell(record, state)
    )?;
    writeln!(out, "<td class=\"speed\">{}</td>", format::speed_cell(record))?;
    writeln!(out, "<td class=\"cost\">{}</td>", format::cost_cell(record))?;

    if options.view_mode == ViewMode::Detailed {
        let d = &record.details;
        writeln!(
            out,
            "<td class=\"seconds-per-correct\">{}</td>",
            format::seconds_per_correct_cell(record)
        )?;
        writeln!(out, "<td>{}</td>", format::percent(d.pass_rate_1))?;
        writeln!(out, "<td>{}</td>", escape(&format::text(d.date.as_deref())))?;
        writeln!(out, "<td>{}</td>", format::count(d.error_outputs))?;
        writeln!(out, "<td>{}</td>", format::count(d.test_timeouts))?;
        writeln!(out, "<td>{}</td>", format::count(d.num_malformed_responses))?;
    }

    writeln!(out, "</tr>")
}

fn bar_width(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 100.0)
    }
}

fn write_detail(out: &mut String, record: &ModelRecord) -> fmt::Result {
    writeln!(
        out,
        "<section class=\"model-detail\" id=\"model-{}\">",
        record.id
    )?;
    writeln!(out, "<h3>{}</h3>", escape(&record.name))?;
    for section in detail_sections(record) {
        writeln!(out, "<h4>{}</h4>", escape(section.title))?;
        writeln!(out, "<dl>")?;
        for (label, value) in &section.rows {
            writeln!(
                out,
                "<dt>{}</dt><dd>{}</dd>",
                escape(label),
                escape(value)
            )?;
        }
        writeln!(out, "</dl>")?;
    }
    writeln!(out, "<p><a href=\"#\">Close</a></p>")?;
    writeln!(out, "</section>")
}

fn write_chart_data(out: &mut String, board: &Leaderboard) -> fmt::Result {
    let json = match serde_json::to_string(&ChartData::build(board)) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "chart data not embedded");
            return writeln!(out, "<!-- chart data unavailable -->");
        }
    };
    writeln!(
        out,
        "<script type=\"application/json\" id=\"chart-data\">{}</script>",
        json.replace("</", "<\\/")
    )
}

fn write_footer(out: &mut String, board: &Leaderboard) -> fmt::Result {
    let date = board
        .most_recent_date()
        .map(metrics::format_display_date)
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());
    writeln!(out, "<footer>")?;
    writeln!(out, "<p>Last benchmark added: {}</p>", date)?;
    writeln!(out, "</footer>")
}
