//! Text rendering shared by the widgets.

use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};
use forge_dice::RollOutcome;
use forge_oracle::OracleEntry;

use crate::theme::Theme;

/// A widget title.
pub fn title(theme: Theme, text: &str) -> ColoredString {
    match theme {
        Theme::Light => text.blue().bold(),
        Theme::Dark => text.bright_cyan().bold(),
    }
}

/// Secondary text: timestamps, hints, details lines.
pub fn muted(theme: Theme, text: &str) -> ColoredString {
    match theme {
        Theme::Light => text.dimmed(),
        Theme::Dark => text.bright_black(),
    }
}

/// A number or result the eye should land on.
pub fn highlight(theme: Theme, text: &str) -> ColoredString {
    match theme {
        Theme::Light => text.yellow().bold(),
        Theme::Dark => text.bright_yellow().bold(),
    }
}

/// An oracle answer, green for yes and red for no.
pub fn answer(theme: Theme, text: &str) -> ColoredString {
    let yes = text.starts_with("Yes") || text.starts_with("Likely") || text.starts_with("Possibly");
    match (theme, yes) {
        (Theme::Light, true) => text.green().bold(),
        (Theme::Light, false) => text.red().bold(),
        (Theme::Dark, true) => text.bright_green().bold(),
        (Theme::Dark, false) => text.bright_red().bold(),
    }
}

/// The dice history as a table, newest first.
pub fn dice_history(entries: &[RollOutcome]) -> String {
    if entries.is_empty() {
        return "No rolls yet.".to_string();
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Dice", "Results", "Total", "Time"]);
    for (i, roll) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            roll.summary.clone(),
            roll.grouped_display(),
            roll.total.to_string(),
            roll.timestamp.clone(),
        ]);
    }
    table.to_string()
}

/// The oracle history as a table, newest first.
pub fn oracle_history(entries: &[OracleEntry]) -> String {
    if entries.is_empty() {
        return "No oracle history yet.".to_string();
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Result", "Details"]);
    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), entry.headline(), entry.details()]);
    }
    table.to_string()
}

/// Plain-text history for export: one headline and one details line per entry.
pub fn oracle_history_plain(entries: &[OracleEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}\n  {}", e.headline(), e.details()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text dice history for export, one roll per line.
pub fn dice_history_plain(entries: &[RollOutcome]) -> String {
    entries
        .iter()
        .map(|r| format!("{}  {}", r, r.timestamp))
        .collect::<Vec<_>>()
        .join("\n")
}
