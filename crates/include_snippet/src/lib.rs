// crates/include_snippet/src/lib.rs

//! `include_snippet` — pulls a labeled region of a source file into a
//! rendered page.
//!
//! A code file marks its regions like this:
//!
//! ```text
//! // snippet hello world
//! fn hello() {
//!     // snippet_exclude_begin
//!     debug_only();
//!     // snippet_exclude_end
//!     println!("hello");
//! }
//! // end of snippet
//! ```
//!
//! and a page pulls it in with `{% include_snippet hello world src/hello.rs %}`.
//!
//! The scanner in [`scanner`] is pure. Everything touching the file
//! system goes through [`processor::SnippetLoader`].

pub mod config;
pub mod error;
pub mod page;
pub mod processor;
pub mod scanner;
pub mod tag;

pub use config::SiteConfig;
pub use error::IncludeError;
pub use page::render_page;
pub use processor::{DefaultSnippetLoader, SnippetLoader, SnippetRequest};
pub use scanner::{extract, extract_from_content, RegionState, SnippetScanner};
pub use tag::IncludeSnippetTag;
