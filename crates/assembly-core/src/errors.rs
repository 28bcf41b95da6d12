//! Error types for transcript assembly

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an assembly run.
///
/// A capture file that cannot be read is not an error: its content is
/// replaced with a placeholder and the run continues.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("{what} directory not found at {}", .path.display())]
    DirectoryNotFound { what: &'static str, path: PathBuf },

    #[error("No {extension} files found in {}. Nothing to assemble.", .dir.display())]
    NoCaptureFiles { dir: PathBuf, extension: String },

    #[error("Error reading files from source directory {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Error writing to output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssemblyError {
    /// True for the missing-directory condition
    pub fn is_missing_directory(&self) -> bool {
        matches!(self, AssemblyError::DirectoryNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
