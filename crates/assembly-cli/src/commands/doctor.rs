//! Doctor command - diagnose the capture layout before assembling

use anyhow::Result;
use assembly_core::find_capture_files;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::output::colors;

struct Check {
    name: String,
    passed: bool,
    details: String,
}

impl Check {
    fn directory(name: &str, path: &Path) -> Self {
        let passed = path.is_dir();
        Check {
            name: name.to_string(),
            passed,
            details: if passed {
                format!("Found at {}", path.display())
            } else {
                format!("Not found at {}", path.display())
            },
        }
    }
}

pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let mut checks = vec![Check::directory("Working directory", &settings.working_dir)];

    if !settings.source_explicit {
        checks.push(Check::directory("Chat directory", &settings.chat_dir));
    }
    checks.push(Check::directory("Source directory", &settings.source_dir));
    checks.push(Check::directory(
        "Output directory",
        &settings.output_parent(),
    ));

    let extension = &settings.options.extension;
    if settings.source_dir.is_dir() {
        let check = match find_capture_files(&settings.source_dir, extension) {
            Ok(files) if files.is_empty() => Check {
                name: "Capture files".to_string(),
                passed: false,
                details: format!("No .{} files", extension),
            },
            Ok(files) => Check {
                name: "Capture files".to_string(),
                passed: true,
                details: format!("{} .{} files", files.len(), extension),
            },
            Err(e) => Check {
                name: "Capture files".to_string(),
                passed: false,
                details: e.to_string(),
            },
        };
        checks.push(check);
    }

    let all_passed = checks.iter().all(|c| c.passed);

    match cli.format {
        OutputFormat::Human => {
            println!("{}", colors::header("Transcript Assembly Doctor"));
            println!();

            for check in &checks {
                let status = if check.passed {
                    colors::success(&check.name)
                } else {
                    colors::error(&check.name)
                };
                println!("  {} - {}", status, check.details);
            }

            println!();
            if all_passed {
                println!("{}", colors::success("All checks passed"));
            } else {
                println!("{}", colors::error("Some checks failed"));
            }
        }

        OutputFormat::Json => {
            let output = serde_json::json!({
                "checks": checks.iter().map(|c| serde_json::json!({
                    "name": c.name,
                    "passed": c.passed,
                    "details": c.details
                })).collect::<Vec<_>>(),
                "all_passed": all_passed
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}
