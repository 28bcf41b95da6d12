//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Assemble captured prompt/response files into a Markdown transcript
#[derive(Parser, Debug)]
#[command(name = "assemble-transcript")]
#[command(author = "Claude Code SDK")]
#[command(version)]
#[command(about = "Assemble captured prompt/response files into a Markdown transcript")]
pub struct Cli {
    /// Working directory holding the `chat/` folder (defaults to the current directory)
    #[arg(long, env = "ASSEMBLE_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,

    /// Directory of capture files (defaults to <working>/chat/captures)
    #[arg(long, short = 's', env = "ASSEMBLE_SOURCE_DIR")]
    pub source: Option<PathBuf>,

    /// Output file (defaults to <working>/chat/Transcript_Assembly.md)
    #[arg(long, short = 'o', env = "ASSEMBLE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Extension of capture files to collect
    #[arg(long, short = 'e')]
    pub extension: Option<String>,

    /// Number of the first prompt/response pair
    #[arg(long)]
    pub start_index: Option<u32>,

    /// Style of the reopen hint after each entry
    #[arg(long)]
    pub editor: Option<EditorArg>,

    /// JSON configuration file
    #[arg(long, short = 'c', env = "ASSEMBLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for the run report
    #[arg(long, short = 'f', default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// List capture files with their assigned headers and exit
    #[arg(long, conflicts_with = "doctor")]
    pub list: bool,

    /// Check that the expected directories and files exist
    #[arg(long)]
    pub doctor: bool,
}

/// Output format for the run report
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON summary object
    Json,
}

/// Editor hint style
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EditorArg {
    Emacs,
    Vim,
    Path,
}

impl From<EditorArg> for assembly_core::EditorHint {
    fn from(arg: EditorArg) -> Self {
        match arg {
            EditorArg::Emacs => assembly_core::EditorHint::Emacs,
            EditorArg::Vim => assembly_core::EditorHint::Vim,
            EditorArg::Path => assembly_core::EditorHint::Path,
        }
    }
}
