//! Markdown rendering for transcript entries

use std::path::Path;

use crate::types::{EditorHint, TranscriptDocument, TranscriptEntry};

/// Separator placed after each entry's content
pub const SEPARATOR: &str = "\n---\n";

/// Prefix every line of `content` with `> `
pub fn blockquote(content: &str) -> String {
    content
        .split('\n')
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Path of `file` as shown in the reopen hint.
///
/// Relative to `base` with a `./` prefix when the file lives under it,
/// otherwise the full path.
pub fn hint_path(file: &Path, base: &Path) -> String {
    match file.strip_prefix(base) {
        Ok(rel) => {
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            format!("./{}", rel)
        }
        Err(_) => file.display().to_string(),
    }
}

impl EditorHint {
    /// Human-readable line for reopening `path` in an editor
    pub fn line(&self, path: &str) -> String {
        match self {
            EditorHint::Emacs => format!(
                "Edit this prompt/response in emacs: (find-file \"{}\")",
                path
            ),
            EditorHint::Vim => format!("Edit this prompt/response in vim: :edit {}", path),
            EditorHint::Path => format!("Source: {}", path),
        }
    }
}

/// Render one entry as its Markdown segments
pub fn render_entry(entry: &TranscriptEntry) -> Vec<String> {
    vec![
        entry.header(),
        blockquote(&entry.content),
        SEPARATOR.to_string(),
        format!("{}\n\n", entry.hint.line(&entry.hint_path)),
    ]
}

impl TranscriptDocument {
    /// Render the whole transcript as Markdown
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .flat_map(render_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
