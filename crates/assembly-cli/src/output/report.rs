//! Error reporting shared by commands

use assembly_core::AssemblyError;

use super::colors;
use crate::cli::OutputFormat;

/// Print a run-aborting error in the requested format
pub fn error(format: OutputFormat, err: &AssemblyError) {
    match format {
        OutputFormat::Human => println!("{}", colors::error(&format!("Error: {}", err))),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "status": "error", "message": err.to_string() })
        ),
    }
}
