// wordsieve/src/ui.rs
//! Terminal output helpers: status messages on stderr and the scan summary
//! table. Color is applied only when the target stream is a terminal.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use wordsieve_core::ScanSummaryItem;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if io::stderr().is_terminal() {
        let _ = writeln!(io::stderr(), "{}", msg.cyan());
    } else {
        let _ = writeln!(io::stderr(), "{}", msg);
    }
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if io::stderr().is_terminal() {
        let _ = writeln!(io::stderr(), "{}", msg.red());
    } else {
        let _ = writeln!(io::stderr(), "{}", msg);
    }
}

/// Renders the per-term summary of a scan pass.
pub fn render_summary_table(items: &[ScanSummaryItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["term", "occurrences"]);
    for item in items {
        table.add_row(vec![Cell::new(&item.term), Cell::new(item.occurrences)]);
    }
    table
}

/// Prints the scan summary to stderr, keeping stdout clean for content.
pub fn print_summary(items: &[ScanSummaryItem]) {
    if items.is_empty() {
        info_msg("No matches found.");
        return;
    }
    eprintln!("--- Scan Summary ---");
    eprintln!("{}", render_summary_table(items));
}
