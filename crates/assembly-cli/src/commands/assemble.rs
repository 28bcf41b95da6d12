//! Assemble command - build the transcript and report the result

use anyhow::Result;
use assembly_core::{AssemblyError, AssemblySummary};

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::output::{colors, report};

pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    if let Err(e) = settings.check_directories() {
        report::error(cli.format, &e);
        std::process::exit(1);
    }

    match assembly_core::run(&settings.source_dir, &settings.output, &settings.options) {
        Ok(summary) => {
            report_success(cli, &summary)?;
            Ok(())
        }
        // Nothing to do is not a failure; the previous transcript stays as it was.
        Err(e @ AssemblyError::NoCaptureFiles { .. }) => {
            match cli.format {
                OutputFormat::Human => println!("{}", colors::warning(&e.to_string())),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "status": "empty", "message": e.to_string() })
                ),
            }
            Ok(())
        }
        Err(e) => {
            report::error(cli.format, &e);
            std::process::exit(1);
        }
    }
}

fn report_success(cli: &Cli, summary: &AssemblySummary) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            println!();
            println!("{}", colors::success("Transcript assembled into:"));
            println!("{}", colors::colored_path(&summary.output.display().to_string()));
            println!(
                "{} {}",
                colors::label("Total entries processed:"),
                summary.pairs
            );
            if summary.read_failures > 0 {
                println!(
                    "{}",
                    colors::warning(&format!(
                        "{} file(s) could not be read; placeholders were inserted",
                        summary.read_failures
                    ))
                );
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(summary)?;
            value["status"] = serde_json::json!("ok");
            println!("{}", value);
        }
    }
    Ok(())
}
