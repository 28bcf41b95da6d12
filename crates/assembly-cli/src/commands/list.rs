//! List command - show capture files and the header each would receive

use anyhow::Result;
use assembly_core::{assign_headers, find_capture_files};

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::output::{colors, report};

pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    if let Err(e) = settings.check_directories() {
        report::error(cli.format, &e);
        std::process::exit(1);
    }

    let files = find_capture_files(&settings.source_dir, &settings.options.extension)?;
    let headers = assign_headers(files.len(), settings.options.start_index);

    match cli.format {
        OutputFormat::Human => {
            println!(
                "{}",
                colors::header(&format!("Capture files in {}", settings.source_dir.display()))
            );
            println!();
            if files.is_empty() {
                println!("  (none)");
            }
            for (file, (role, index)) in files.iter().zip(&headers) {
                println!(
                    "  {}  {}",
                    colors::colored_header(*role, *index),
                    colors::colored_file(&file.name)
                );
            }
            println!();
            println!("{} {}", colors::label("Files:"), files.len());
        }
        OutputFormat::Json => {
            let entries: Vec<_> = files
                .iter()
                .zip(&headers)
                .map(|(file, (role, index))| {
                    serde_json::json!({
                        "file": file.name,
                        "role": role,
                        "index": index,
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(entries));
        }
    }

    Ok(())
}
