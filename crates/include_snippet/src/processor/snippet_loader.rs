// crates/include_snippet/src/processor/snippet_loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CodeRoot, SiteConfig};
use crate::error::IncludeError;
use crate::scanner::extract_from_content;

/// What a tag asks for: a labeled region of a file under the code root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetRequest {
    pub label: String,
    pub path: String,
}

/// Trait that abstracts reading a snippet out of the code directory.
pub trait SnippetLoader: Send + Sync {
    fn load(&self, request: &SnippetRequest) -> Result<String, IncludeError>;
}

/// Reads snippets from the file system below a [`CodeRoot`].
#[derive(Clone, Debug)]
pub struct DefaultSnippetLoader {
    code_root: CodeRoot,
}

impl DefaultSnippetLoader {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            code_root: config.code_root(),
        }
    }

    pub fn code_root(&self) -> &Path {
        self.code_root.path()
    }

    /// Runs the directory and file checks and returns the file to read.
    fn resolve(&self, relative: &str) -> Result<PathBuf, IncludeError> {
        let root = self.code_root.path();
        let is_symlink = fs::symlink_metadata(root)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if is_symlink {
            return Err(IncludeError::SymlinkedCodeDir(root.to_path_buf()));
        }

        let file = self.code_root.join(relative);
        if !self.code_root.contains(&file) {
            return Err(IncludeError::OutsideCodeDir {
                file,
                code_root: root.to_path_buf(),
            });
        }
        if !file.is_file() {
            return Err(IncludeError::FileNotFound(file));
        }
        Ok(file)
    }
}

impl SnippetLoader for DefaultSnippetLoader {
    fn load(&self, request: &SnippetRequest) -> Result<String, IncludeError> {
        let file = self.resolve(&request.path)?;
        log::debug!("extracting '{}' from {}", request.label, file.display());

        let content = fs::read_to_string(&file).map_err(|source| IncludeError::Io {
            path: file.clone(),
            source,
        })?;

        extract_from_content(&request.label, &content).ok_or_else(|| {
            IncludeError::SnippetNotFound {
                label: request.label.clone(),
                file,
            }
        })
    }
}

/// Public API function to load a snippet through any [`SnippetLoader`].
pub fn load_with_loader(
    loader: &dyn SnippetLoader,
    request: &SnippetRequest,
) -> Result<String, IncludeError> {
    loader.load(request)
}
