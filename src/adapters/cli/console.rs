//! Colored status lines on stderr. stdout is reserved for the summary itself.

use crate::domain::DomainError;
use crate::usecases::SummaryStats;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stderr};

fn print_colored(color: Color, text: &str) {
    let mut err = stderr();
    let _ = err.execute(SetForegroundColor(color));
    let _ = err.execute(Print(text));
    let _ = err.execute(ResetColor);
    let _ = err.flush();
}

pub fn print_saved(path: &std::path::Path) {
    print_colored(
        Color::Green,
        &format!("✅ Summary saved to: {}\n", path.display()),
    );
}

/// The "Summary Statistics" block shown after a CLI run.
pub fn stats_block(stats: &SummaryStats) -> String {
    let mut block = String::from("\n📊 Summary Statistics:\n");
    if let Some(file) = &stats.file {
        block.push_str(&format!("   File: {}\n", file));
    }
    block.push_str(&format!("   Attendees: {}\n", stats.attendees));
    block.push_str(&format!("   Key Points: {}\n", stats.key_points));
    block.push_str(&format!("   Decisions: {}\n", stats.decisions));
    block.push_str(&format!("   Action Items: {}\n", stats.action_items));
    block
}

pub fn print_stats(stats: &SummaryStats) {
    print_colored(Color::Cyan, &stats_block(stats));
}

/// User-facing error line. Missing files get their own wording.
pub fn error_message(err: &DomainError) -> String {
    match err {
        DomainError::NotFound { path } => format!("❌ Error: File not found - {}", path),
        other => format!("❌ Error: {}", other),
    }
}

pub fn print_error(err: &DomainError) {
    print_colored(Color::Red, &format!("{}\n", error_message(err)));
}
