//! ANSI color helpers for terminal output

use assembly_core::{header_text, Role};
use colored::Colorize;

/// Get colored header for a transcript entry
pub fn colored_header(role: Role, index: u64) -> String {
    let text = header_text(role, index);
    match role {
        Role::Prompt => text.cyan().to_string(),
        Role::Response => text.green().to_string(),
    }
}

/// Get colored file name
pub fn colored_file(name: &str) -> String {
    name.white().dimmed().to_string()
}

/// Get colored path
pub fn colored_path(path: &str) -> String {
    path.cyan().bold().to_string()
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored success message
pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}

/// Get colored error message
pub fn error(text: &str) -> String {
    format!("{} {}", "✗".red(), text)
}
