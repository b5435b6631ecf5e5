// crates/include_snippet/src/config.rs

use std::env;
use std::path::{Component, Path, PathBuf};

/// Directory, relative to the site source, that snippet paths resolve
/// against when nothing else is configured.
pub const DEFAULT_CODE_DIR: &str = "downloads/code";

/// Environment variable that overrides the code directory.
pub const CODE_DIR_ENV: &str = "INCLUDE_SNIPPET_CODE_DIR";

/// Site settings the tag needs: where the site lives and which directory
/// under it holds the code files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub source: PathBuf,
    pub code_dir: String,
}

impl SiteConfig {
    /// Leading slashes of `code_dir` are dropped so it always stays
    /// relative to `source`.
    pub fn new<P: Into<PathBuf>>(source: P, code_dir: Option<&str>) -> Self {
        let code_dir = code_dir
            .map(|dir| dir.trim_start_matches('/'))
            .filter(|dir| !dir.is_empty())
            .unwrap_or(DEFAULT_CODE_DIR)
            .to_string();
        Self {
            source: source.into(),
            code_dir,
        }
    }

    /// Uses `INCLUDE_SNIPPET_CODE_DIR` if it is set.
    pub fn from_env<P: Into<PathBuf>>(source: P) -> Self {
        let code_dir = env::var(CODE_DIR_ENV).ok();
        Self::new(source, code_dir.as_deref())
    }

    /// Absolute, normalized `source/code_dir`. Relative sources are taken
    /// from the current directory, which is read but never changed.
    pub fn code_root(&self) -> CodeRoot {
        let joined = self.source.join(&self.code_dir);
        let absolute = if joined.is_absolute() {
            joined
        } else {
            env::current_dir()
                .map(|cwd| cwd.join(&joined))
                .unwrap_or(joined)
        };
        CodeRoot(normalize(&absolute))
    }
}

/// The directory every snippet path is resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeRoot(PathBuf);

impl CodeRoot {
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Joins a page-supplied path onto the root. Leading slashes are
    /// stripped and `.`/`..` are resolved lexically; the result may still
    /// point outside the root, which callers check with [`CodeRoot::contains`].
    pub fn join(&self, relative: &str) -> PathBuf {
        normalize(&self.0.join(relative.trim_start_matches('/')))
    }

    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.0)
    }
}

/// Lexical equivalent of Ruby's `expand_path` for an absolute path.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
