//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors, expired keys
//! - Cyan: key IDs, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info
//!
//! Status lines go to stderr so stdout stays clean for ciphertext and JSON.

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ encrypted for 2 recipients`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no recipients`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ pass keys with -k or create .opengpg.toml`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  key id       4f54663daabdbaff`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {:<12} {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {:<12} {}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a key ID in cyan.
///
/// Returns a colored string that can be used inline.
pub fn key_id(id: &str) -> String {
    if colors_enabled() {
        style(id).cyan().to_string()
    } else {
        id.to_string()
    }
}

/// Format an expiry status: red when expired, green otherwise.
pub fn expiry_status(expired: bool) -> String {
    let text = if expired { "expired" } else { "valid" };
    if !colors_enabled() {
        text.to_string()
    } else if expired {
        style(text).red().to_string()
    } else {
        style(text).green().to_string()
    }
}

/// Print raw data (ciphertext, JSON) to stdout, uncolored.
pub fn data(content: &str) {
    println!("{}", content);
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// alice
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
