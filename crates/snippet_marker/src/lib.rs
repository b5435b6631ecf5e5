// crates/snippet_marker/src/lib.rs

//! Marker vocabulary recognised inside source files that carry
//! includable snippets. Every marker is matched as a plain substring of a
//! line, so it can sit behind whatever comment syntax the host language uses.

/// Prefix of the line that opens a region. The label follows after a
/// single space, e.g. `// snippet hello world`.
pub const SNIPPET_OPEN: &str = "snippet";

/// Closes the currently open region.
pub const END_OF_SNIPPET: &str = "end of snippet";

/// Starts a span inside a region whose lines are left out.
pub const EXCLUDE_BEGIN: &str = "snippet_exclude_begin";

/// Ends the span started by [`EXCLUDE_BEGIN`].
pub const EXCLUDE_END: &str = "snippet_exclude_end";

/// Builds the exact text that opens the region for `label`.
pub fn open_marker(label: &str) -> String {
    format!("{} {}", SNIPPET_OPEN, label)
}
