// crates/include_snippet/src/processor/mod.rs

pub mod snippet_loader;

pub use snippet_loader::{load_with_loader, DefaultSnippetLoader, SnippetLoader, SnippetRequest};
