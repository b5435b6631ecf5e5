// crates/include_snippet/src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the boundary between a page and the code directory.
///
/// The `Display` text is what ends up in the rendered page when a tag
/// cannot be expanded, so it is written for the page author.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("Invalid include_snippet markup '{0}': expected '<label> <path>'")]
    InvalidMarkup(String),

    #[error("Invalid snippet label in '{0}': the label must not be empty")]
    InvalidLabel(String),

    #[error("Code directory '{}' cannot be a symlink", .0.display())]
    SymlinkedCodeDir(PathBuf),

    #[error("File {} is outside the code directory '{}'", .file.display(), .code_root.display())]
    OutsideCodeDir { file: PathBuf, code_root: PathBuf },

    #[error("File {} could not be found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Snippet '{label}' could not be found in {}", .file.display())]
    SnippetNotFound { label: String, file: PathBuf },

    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
