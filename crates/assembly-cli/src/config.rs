//! Configuration layering: flags, then config file, then defaults

use anyhow::{Context, Result};
use assembly_core::{AssemblyError, AssemblyOptions, EditorHint};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Name of the chat folder under the working directory
pub const CHAT_DIR: &str = "chat";
/// Name of the capture folder under the chat directory
pub const CAPTURES_DIR: &str = "captures";
/// Default transcript file name inside the chat directory
pub const OUTPUT_FILE: &str = "Transcript_Assembly.md";

/// Contents of a `--config` JSON file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub working_dir: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extension: Option<String>,
    pub start_index: Option<u32>,
    pub editor: Option<EditorHint>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub working_dir: PathBuf,
    pub chat_dir: PathBuf,
    pub source_dir: PathBuf,
    pub output: PathBuf,
    /// Source was given explicitly, so the chat directory is not required
    pub source_explicit: bool,
    pub options: AssemblyOptions,
}

impl Settings {
    /// Check the directories a run depends on, in the order they are needed
    pub fn check_directories(&self) -> std::result::Result<(), AssemblyError> {
        let mut required = vec![("Working", &self.working_dir)];
        if !self.source_explicit {
            required.push(("Chat", &self.chat_dir));
        }
        required.push(("Source", &self.source_dir));

        for (what, path) in required {
            if !path.is_dir() {
                return Err(AssemblyError::DirectoryNotFound {
                    what,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn output_parent(&self) -> PathBuf {
        match self.output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Load settings from the CLI, an optional config file and defaults
pub fn load(cli: &Cli) -> Result<Settings> {
    let file = match &cli.config {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    resolve(cli, file, &cwd)
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read config from {}", path.display()))?;
    serde_json::from_str(&content)
        .context(format!("Failed to parse config {}", path.display()))
}

/// Merge the layers. Flags win over the file, the file over defaults.
pub fn resolve(cli: &Cli, file: FileConfig, cwd: &Path) -> Result<Settings> {
    let working_dir = cli
        .working_dir
        .clone()
        .or_else(|| file.working_dir.as_deref().map(expand_tilde))
        .unwrap_or_else(|| cwd.to_path_buf());
    let chat_dir = working_dir.join(CHAT_DIR);

    let source = cli
        .source
        .clone()
        .or_else(|| file.source.as_deref().map(expand_tilde));
    let source_explicit = source.is_some();
    let source_dir = source.unwrap_or_else(|| chat_dir.join(CAPTURES_DIR));

    let output = cli
        .output
        .clone()
        .or_else(|| file.output.as_deref().map(expand_tilde))
        .unwrap_or_else(|| chat_dir.join(OUTPUT_FILE));

    let defaults = AssemblyOptions::default();
    let extension = cli
        .extension
        .clone()
        .or(file.extension)
        .unwrap_or(defaults.extension);
    let extension = extension.trim_start_matches('.').to_string();
    if extension.is_empty() {
        anyhow::bail!("Capture file extension must not be empty");
    }

    let options = AssemblyOptions::new()
        .with_extension(extension)
        .with_start_index(
            cli.start_index
                .or(file.start_index)
                .unwrap_or(defaults.start_index),
        )
        .with_editor_hint(
            cli.editor
                .map(EditorHint::from)
                .or(file.editor)
                .unwrap_or(defaults.editor_hint),
        );

    Ok(Settings {
        working_dir,
        chat_dir,
        source_dir,
        output,
        source_explicit,
        options,
    })
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
