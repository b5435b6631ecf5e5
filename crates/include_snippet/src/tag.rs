// crates/include_snippet/src/tag.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::IncludeError;
use crate::processor::{load_with_loader, SnippetLoader, SnippetRequest};

/// Tag name as written in pages: `{% include_snippet <label> <path> %}`.
pub const TAG_NAME: &str = "include_snippet";

// Everything up to the last whitespace run is the label, the final token
// is the path.
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:(.*)\s+)?(\S+)$").unwrap());

/// A parsed `include_snippet` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeSnippetTag {
    request: SnippetRequest,
}

impl IncludeSnippetTag {
    /// Parses the markup between the tag name and the closing `%}`,
    /// e.g. `hello world javascripts/test.java`.
    pub fn parse(markup: &str) -> Result<Self, IncludeError> {
        let trimmed = markup.trim();
        let caps = MARKUP_RE
            .captures(trimmed)
            .ok_or_else(|| IncludeError::InvalidMarkup(trimmed.to_string()))?;

        let label = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if label.is_empty() {
            return Err(IncludeError::InvalidLabel(trimmed.to_string()));
        }
        let path = caps[2].to_string();

        Ok(Self {
            request: SnippetRequest {
                label: label.to_string(),
                path,
            },
        })
    }

    pub fn label(&self) -> &str {
        &self.request.label
    }

    pub fn path(&self) -> &str {
        &self.request.path
    }

    pub fn request(&self) -> &SnippetRequest {
        &self.request
    }

    /// Expands the tag. Failures are rendered as their message so the page
    /// author sees them in the output.
    pub fn render(&self, loader: &dyn SnippetLoader) -> String {
        match load_with_loader(loader, &self.request) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{} '{}': {}", TAG_NAME, self.request.label, err);
                err.to_string()
            }
        }
    }
}
