//! Transcript assembly: read captures in order, pair them, write the document

use std::path::{Path, PathBuf};

use crate::discovery::find_capture_files;
use crate::errors::{AssemblyError, Result};
use crate::render::hint_path;
use crate::types::{
    AssemblyOptions, AssemblySummary, CaptureFile, Role, TranscriptDocument, TranscriptEntry,
};

/// Read a capture file as trimmed text.
///
/// `\r\n` and lone `\r` line breaks are normalized to `\n`. On failure the content is a placeholder naming the file and the error,
/// and the second element is `true`.
pub fn read_capture(file: &CaptureFile) -> (String, bool) {
    match std::fs::read_to_string(&file.path) {
        Ok(text) => (normalize_newlines(&text).trim().to_string(), false),
        Err(e) => {
            tracing::warn!(file = %file.path.display(), error = %e, "failed to read capture");
            (format!("[[ERROR READING FILE {}: {}]]", file.name, e), true)
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Role and sequence index for each of `count` captures in order.
///
/// Roles alternate by position; the index starts at `start_index` and
/// advances after each RESPONSE, so an odd count ends on an unpaired PROMPT.
pub fn assign_headers(count: usize, start_index: u32) -> Vec<(Role, u64)> {
    let mut index = u64::from(start_index);
    let mut headers = Vec::with_capacity(count);
    for position in 0..count {
        let role = Role::for_position(position);
        headers.push((role, index));
        if role == Role::Response {
            index += 1;
        }
    }
    headers
}

/// Build the transcript from files already in chronological order
pub fn assemble(
    files: &[CaptureFile],
    options: &AssemblyOptions,
    hint_base: &Path,
) -> TranscriptDocument {
    let headers = assign_headers(files.len(), options.start_index);
    let mut entries = Vec::with_capacity(files.len());

    for (file, (role, index)) in files.iter().zip(headers) {
        let (content, read_failed) = read_capture(file);
        tracing::debug!(file = %file.name, %role, index, "assembling entry");

        entries.push(TranscriptEntry {
            index,
            role,
            content,
            read_failed,
            hint_path: hint_path(&file.path, hint_base),
            hint: options.editor_hint,
        });
    }

    let pairs = entries.iter().filter(|e| e.role == Role::Response).count();
    TranscriptDocument { entries, pairs }
}

/// Write the rendered document, replacing any existing file
pub fn write_document(doc: &TranscriptDocument, output: &Path) -> Result<()> {
    let parent = output_parent(output);
    if !parent.is_dir() {
        return Err(AssemblyError::DirectoryNotFound {
            what: "Output",
            path: parent,
        });
    }

    std::fs::write(output, doc.render()).map_err(|source| AssemblyError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(
        output = %output.display(),
        entries = doc.entries.len(),
        "wrote transcript"
    );
    Ok(())
}

/// Discover, assemble and write in one pass.
///
/// Nothing is written when the source directory is missing or holds no
/// matching files.
pub fn run(source_dir: &Path, output: &Path, options: &AssemblyOptions) -> Result<AssemblySummary> {
    let files = find_capture_files(source_dir, &options.extension)?;
    if files.is_empty() {
        return Err(AssemblyError::NoCaptureFiles {
            dir: source_dir.to_path_buf(),
            extension: options.extension.trim_start_matches('.').to_string(),
        });
    }

    let hint_base = options
        .hint_base
        .clone()
        .unwrap_or_else(|| output_parent(output));
    let doc = assemble(&files, options, &hint_base);
    write_document(&doc, output)?;

    Ok(AssemblySummary {
        output: output.to_path_buf(),
        entries: doc.entries.len(),
        pairs: doc.pairs,
        read_failures: doc.read_failures(),
    })
}

fn output_parent(output: &Path) -> PathBuf {
    match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EditorHint;
    use std::fs;

    fn write_captures(dir: &Path, files: &[(&str, &str)]) {
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
    }

    fn headers(doc: &str) -> Vec<&str> {
        doc.lines().filter(|l| l.starts_with("# ")).collect()
    }

    #[test]
    fn test_assign_headers_odd_count() {
        assert_eq!(
            assign_headers(5, 1),
            vec![
                (Role::Prompt, 1),
                (Role::Response, 1),
                (Role::Prompt, 2),
                (Role::Response, 2),
                (Role::Prompt, 3),
            ]
        );
        assert!(assign_headers(0, 1).is_empty());
    }

    #[test]
    fn test_assign_headers_past_u32_max() {
        let max = u64::from(u32::MAX);
        assert_eq!(
            assign_headers(3, u32::MAX),
            vec![
                (Role::Prompt, max),
                (Role::Response, max),
                (Role::Prompt, max + 1),
            ]
        );
    }

    #[test]
    fn test_mixed_line_endings_are_quoted() {
        let tmp = tempfile::tempdir().unwrap();
        write_captures(tmp.path(), &[("a.md", "l1\rl2\r\nl3\r\n")]);
        let files = vec![CaptureFile::new(tmp.path().join("a.md"))];

        let doc = assemble(&files, &AssemblyOptions::default(), tmp.path());
        assert_eq!(doc.entries[0].content, "l1\nl2\nl3");
        let rendered = doc.render();
        assert!(rendered.starts_with("# PROMPT 1\n> l1\n> l2\n> l3\n"));
        assert!(!rendered.contains('\r'));
    }

    #[test]
    fn test_even_count_pairs_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let captures = tmp.path().join("captures");
        fs::create_dir(&captures).unwrap();
        write_captures(
            &captures,
            &[("a.md", "Q1"), ("b.md", "A1"), ("c.md", "Q2"), ("d.md", "A2")],
        );
        let output = tmp.path().join("Transcript_Assembly.md");

        let summary = run(&captures, &output, &AssemblyOptions::default()).unwrap();
        assert_eq!(summary.pairs, 2);
        assert_eq!(summary.entries, 4);

        let doc = fs::read_to_string(&output).unwrap();
        assert_eq!(
            headers(&doc),
            vec!["# PROMPT 1", "# RESPONSE 1", "# PROMPT 2", "# RESPONSE 2"]
        );
        assert!(doc.starts_with("# PROMPT 1\n> Q1\n\n---\n"));
        assert!(doc.contains("# RESPONSE 2\n> A2\n\n---\n"));
        assert!(doc.contains("(find-file \"./captures/c.md\")"));
    }

    #[test]
    fn test_odd_count_leaves_trailing_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        write_captures(tmp.path(), &[("1.md", "Q1"), ("2.md", "A1"), ("3.md", "Q2")]);
        let output = tmp.path().join("out.md");

        let summary = run(tmp.path(), &output, &AssemblyOptions::default()).unwrap();
        assert_eq!(summary.pairs, 1);

        let doc = fs::read_to_string(&output).unwrap();
        assert_eq!(headers(&doc), vec!["# PROMPT 1", "# RESPONSE 1", "# PROMPT 2"]);
    }

    #[test]
    fn test_start_index_offsets_numbering() {
        let tmp = tempfile::tempdir().unwrap();
        let files = vec![
            CaptureFile::new(tmp.path().join("a.md")),
            CaptureFile::new(tmp.path().join("b.md")),
        ];
        write_captures(tmp.path(), &[("a.md", "Q"), ("b.md", "A")]);

        let options = AssemblyOptions::new().with_start_index(5);
        let doc = assemble(&files, &options, tmp.path());
        assert_eq!(doc.entries[0].header(), "# PROMPT 5");
        assert_eq!(doc.entries[1].header(), "# RESPONSE 5");
        assert_eq!(doc.pairs, 1);
    }

    #[test]
    fn test_content_is_trimmed_and_quoted() {
        let tmp = tempfile::tempdir().unwrap();
        write_captures(tmp.path(), &[("a.md", "\n\n  line1\nline2  \n\n")]);
        let files = vec![CaptureFile::new(tmp.path().join("a.md"))];

        let doc = assemble(&files, &AssemblyOptions::default(), tmp.path());
        assert_eq!(doc.entries[0].content, "line1\nline2");
        assert!(doc.render().contains("> line1\n> line2\n"));
    }

    #[test]
    fn test_unreadable_file_gets_placeholder() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.md"), "Q1").unwrap();
        fs::write(tmp.path().join("b.md"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        fs::write(tmp.path().join("c.md"), "Q2").unwrap();
        let output = tmp.path().join("out.md");

        let summary = run(tmp.path(), &output, &AssemblyOptions::default()).unwrap();
        assert_eq!(summary.read_failures, 1);
        assert_eq!(summary.entries, 3);

        let doc = fs::read_to_string(&output).unwrap();
        assert!(doc.contains("# RESPONSE 1\n> [[ERROR READING FILE b.md: "));
        assert!(doc.contains("# PROMPT 2\n> Q2"));
    }

    #[test]
    fn test_empty_dir_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let captures = tmp.path().join("captures");
        fs::create_dir(&captures).unwrap();
        let output = tmp.path().join("out.md");
        fs::write(&output, "previous transcript").unwrap();

        let err = run(&captures, &output, &AssemblyOptions::default()).unwrap_err();
        assert!(matches!(err, AssemblyError::NoCaptureFiles { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous transcript");
    }

    #[test]
    fn test_missing_source_dir_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out.md");

        let err = run(
            &tmp.path().join("missing"),
            &output,
            &AssemblyOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_missing_directory());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_output_parent() {
        let tmp = tempfile::tempdir().unwrap();
        write_captures(tmp.path(), &[("a.md", "Q1")]);
        let output = tmp.path().join("no-such-dir").join("out.md");

        let err = run(tmp.path(), &output, &AssemblyOptions::default()).unwrap_err();
        assert!(matches!(err, AssemblyError::DirectoryNotFound { what: "Output", .. }));
    }

    #[test]
    fn test_hint_base_override() {
        let tmp = tempfile::tempdir().unwrap();
        write_captures(tmp.path(), &[("a.md", "Q1")]);
        let output = tmp.path().join("out.md");

        let options = AssemblyOptions::new()
            .with_editor_hint(EditorHint::Path)
            .with_hint_base("/somewhere/else");
        run(tmp.path(), &output, &options).unwrap();

        let doc = fs::read_to_string(&output).unwrap();
        let expected = format!("Source: {}", tmp.path().join("a.md").display());
        assert!(doc.contains(&expected));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let tmp = tempfile::tempdir().unwrap();
        let captures = tmp.path().join("captures");
        fs::create_dir(&captures).unwrap();
        write_captures(&captures, &[("a.md", "Q1"), ("b.md", "A1")]);
        let output = tmp.path().join("out.md");
        fs::write(&output, "stale content that should disappear").unwrap();

        run(&captures, &output, &AssemblyOptions::default()).unwrap();
        let doc = fs::read_to_string(&output).unwrap();
        assert!(!doc.contains("stale content"));
        assert!(doc.starts_with("# PROMPT 1"));
    }
}
