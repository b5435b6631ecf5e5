// crates/include_snippet/src/page.rs

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::processor::SnippetLoader;
use crate::tag::IncludeSnippetTag;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%\s*include_snippet\s+(.*?)\s*%\}").unwrap());

/// Expands every `{% include_snippet ... %}` tag in `page`. Text outside
/// the tags is copied unchanged.
pub fn render_page(page: &str, loader: &dyn SnippetLoader) -> String {
    TAG_RE
        .replace_all(page, |caps: &Captures| match IncludeSnippetTag::parse(&caps[1]) {
            Ok(tag) => tag.render(loader),
            Err(err) => {
                log::warn!("{}", err);
                err.to_string()
            }
        })
        .into_owned()
}
