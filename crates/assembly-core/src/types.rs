//! Core type definitions for capture files and transcript entries

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which side of a prompt/response pair an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Prompt,
    Response,
}

impl Role {
    /// Role for a 0-based position in the sorted capture list
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Role::Prompt
        } else {
            Role::Response
        }
    }

    /// Header label ("PROMPT" / "RESPONSE")
    pub fn label(&self) -> &'static str {
        match self {
            Role::Prompt => "PROMPT",
            Role::Response => "RESPONSE",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single captured turn on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name, used for ordering
    pub name: String,
}

impl CaptureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Editor hint style appended after each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorHint {
    /// `(find-file "...")` form for emacs
    #[default]
    Emacs,
    /// `:edit ...` form for vim
    Vim,
    /// Bare path
    Path,
}

/// One rendered turn of the transcript
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Sequence index shared by a prompt and its response
    pub index: u64,
    pub role: Role,
    /// Trimmed file content, or a placeholder when the read failed
    pub content: String,
    /// True when `content` is a read-error placeholder
    pub read_failed: bool,
    /// Path shown in the reopen hint
    pub hint_path: String,
    pub hint: EditorHint,
}

impl TranscriptEntry {
    /// Markdown header, e.g. `# PROMPT 3`
    pub fn header(&self) -> String {
        header_text(self.role, self.index)
    }
}

/// Markdown header for a role and sequence index
pub fn header_text(role: Role, index: u64) -> String {
    format!("# {} {}", role.label(), index)
}

/// The full assembled transcript
#[derive(Debug, Clone, Default)]
pub struct TranscriptDocument {
    pub entries: Vec<TranscriptEntry>,
    /// Number of completed prompt/response pairs
    pub pairs: usize,
}

impl TranscriptDocument {
    pub fn read_failures(&self) -> usize {
        self.entries.iter().filter(|e| e.read_failed).count()
    }
}

/// Options controlling discovery and rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyOptions {
    /// File extension to collect, without the dot
    pub extension: String,
    /// First sequence index
    pub start_index: u32,
    pub editor_hint: EditorHint,
    /// Directory the hint paths are relative to (defaults to the output's parent)
    #[serde(default)]
    pub hint_base: Option<PathBuf>,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            start_index: 1,
            editor_hint: EditorHint::default(),
            hint_base: None,
        }
    }
}

impl AssemblyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_editor_hint(mut self, hint: EditorHint) -> Self {
        self.editor_hint = hint;
        self
    }

    pub fn with_hint_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.hint_base = Some(base.into());
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct AssemblySummary {
    pub output: PathBuf,
    pub entries: usize,
    pub pairs: usize,
    pub read_failures: usize,
}
