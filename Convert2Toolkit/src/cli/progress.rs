//! CLI progress display utilities
//!
//! Step indicators, the per-project progress bar and coloured outcome lines.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use crate::project::{BuildPhase, BuildProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Package - for project builds
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

// =============================================================================
// Step-Based Progress
// =============================================================================

/// Print a step indicator: `[1/3] 📦 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

// =============================================================================
// Outcome Lines
// =============================================================================

/// Green line for a finished project
pub fn print_success(msg: &str) {
    println!("{}", style(msg).green());
}

/// Yellow line for a skipped or invalid workspace
pub fn print_warning(msg: &str) {
    println!("{}", style(msg).yellow());
}

/// Red line for a failed project
pub fn print_failure(msg: &str) {
    eprintln!("{}", style(msg).red());
}

// =============================================================================
// Progress Bars
// =============================================================================

/// Progress bar style for determinate progress
///
/// Format: `Copying files [████████░░░░░░░░] 50/100`
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .expect("valid template")
}

/// Create a simple progress bar
#[must_use]
pub fn simple_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(bar_style());
    pb.set_message(msg.to_string());
    pb
}

/// Update a bar from a build progress report
pub fn update_bar(pb: &ProgressBar, progress: &BuildProgress) {
    match progress.phase {
        BuildPhase::Complete => pb.finish_and_clear(),
        phase => {
            if pb.is_finished() {
                pb.reset();
            }
            pb.set_length(progress.total as u64);
            pb.set_position(progress.current as u64);
            pb.set_message(phase.as_str());
        }
    }
}
