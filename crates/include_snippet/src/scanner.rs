// crates/include_snippet/src/scanner.rs

use snippet_marker::{open_marker, END_OF_SNIPPET, EXCLUDE_BEGIN, EXCLUDE_END};

/// Where the scanner currently is relative to the requested region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionState {
    /// No region for the label is open.
    Outside,
    /// Inside the region; lines are kept.
    Included,
    /// Inside an exclusion span of the region; lines are dropped.
    Excluded,
}

/// Single-pass scanner that collects the lines of every region opened by
/// `snippet <label>`.
///
/// Each line goes through the same fixed sequence of checks:
///
/// 1. `end of snippet` closes the region,
/// 2. `snippet_exclude_begin` starts an exclusion span,
/// 3. the line is kept if the region is open and not excluded,
/// 4. `snippet_exclude_end` ends the exclusion span,
/// 5. `snippet <label>` opens the region if none is open.
///
/// Because the keep-check sits between the transitions, marker lines of
/// well-formed input never end up in the output. Exclusion markers outside
/// a region are ignored; inside one they toggle without any nesting check.
#[derive(Debug)]
pub struct SnippetScanner {
    open_marker: String,
    state: RegionState,
    matched: bool,
    line_no: usize,
    buffer: String,
}

impl SnippetScanner {
    pub fn new(label: &str) -> Self {
        Self {
            open_marker: open_marker(label),
            state: RegionState::Outside,
            matched: false,
            line_no: 0,
            buffer: String::new(),
        }
    }

    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Feeds one line, terminator included. The line is copied verbatim
    /// when it is kept.
    pub fn feed(&mut self, line: &str) {
        self.line_no += 1;

        if line.contains(END_OF_SNIPPET) && self.state != RegionState::Outside {
            log::debug!("region closed at line {}", self.line_no);
            self.state = RegionState::Outside;
        }
        // Exclusion markers only mean something inside a region.
        if line.contains(EXCLUDE_BEGIN) && self.state == RegionState::Included {
            self.state = RegionState::Excluded;
        }
        if self.state == RegionState::Included {
            self.buffer.push_str(line);
        }
        if line.contains(EXCLUDE_END) && self.state == RegionState::Excluded {
            self.state = RegionState::Included;
        }
        // A label line inside an exclusion span leaves the span in force.
        if line.contains(&self.open_marker) {
            self.matched = true;
            if self.state == RegionState::Outside {
                log::debug!("'{}' opened at line {}", self.open_marker, self.line_no);
                self.state = RegionState::Included;
            }
        }
    }

    /// Ends the pass. Returns `None` if the label never opened a region.
    pub fn finish(self) -> Option<String> {
        if self.state != RegionState::Outside {
            log::warn!(
                "'{}' is not closed by '{}'; keeping everything up to end of input",
                self.open_marker,
                END_OF_SNIPPET
            );
        }
        if self.matched {
            Some(self.buffer)
        } else {
            None
        }
    }
}

/// Extracts the region for `label` from already-split lines.
pub fn extract<'a, I>(label: &str, lines: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = SnippetScanner::new(label);
    for line in lines {
        scanner.feed(line);
    }
    scanner.finish()
}

/// Same as [`extract`], splitting `content` into lines that keep their
/// terminators.
pub fn extract_from_content(label: &str, content: &str) -> Option<String> {
    extract(label, content.split_inclusive('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction() {
        let lines = ["a\n", "snippet X\n", "b\n", "c\n", "end of snippet\n", "d\n"];
        assert_eq!(extract("X", lines), Some("b\nc\n".to_string()));
    }

    #[test]
    fn test_exclusion_span_is_dropped() {
        let lines = [
            "snippet X\n",
            "b\n",
            "snippet_exclude_begin\n",
            "secret\n",
            "snippet_exclude_end\n",
            "c\n",
            "end of snippet\n",
        ];
        assert_eq!(extract("X", lines), Some("b\nc\n".to_string()));
    }

    #[test]
    fn test_label_not_found_is_none() {
        let lines = ["snippet X\n", "b\n", "end of snippet\n"];
        assert_eq!(extract("Y", lines), None);
    }

    #[test]
    fn test_empty_region_is_distinct_from_missing() {
        let lines = ["// snippet X\n", "// end of snippet\n"];
        assert_eq!(extract("X", lines), Some(String::new()));
    }

    #[test]
    fn test_marker_lines_never_emitted() {
        let content = "// snippet demo\nbody\n// end of snippet\n";
        let result = extract_from_content("demo", content).unwrap();
        assert!(!result.contains("snippet demo"));
        assert!(!result.contains("end of snippet"));
        assert_eq!(result, "body\n");
    }

    #[test]
    fn test_sequential_regions_do_not_leak() {
        let content = concat!(
            "snippet first\n",
            "one\n",
            "end of snippet\n",
            "between\n",
            "snippet second\n",
            "two\n",
            "end of snippet\n",
        );
        assert_eq!(extract_from_content("first", content).as_deref(), Some("one\n"));
        assert_eq!(extract_from_content("second", content).as_deref(), Some("two\n"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let content = "x\nsnippet X\ny\nend of snippet\n";
        let first = extract_from_content("X", content);
        let second = extract_from_content("X", content);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unterminated_region_runs_to_end() {
        let content = "head\nsnippet X\nb\nc";
        assert_eq!(extract_from_content("X", content), Some("b\nc".to_string()));
    }

    #[test]
    fn test_exclusion_outside_region_is_ignored() {
        let content = concat!(
            "snippet_exclude_begin\n",
            "snippet X\n",
            "kept\n",
            "end of snippet\n",
        );
        assert_eq!(extract_from_content("X", content), Some("kept\n".to_string()));
    }

    #[test]
    fn test_exclusion_does_not_survive_region_close() {
        let content = concat!(
            "snippet X\n",
            "a\n",
            "snippet_exclude_begin\n",
            "end of snippet\n",
            "snippet X\n",
            "b\n",
            "end of snippet\n",
        );
        assert_eq!(extract_from_content("X", content), Some("a\nb\n".to_string()));
    }

    #[test]
    fn test_mismatched_exclusion_markers_toggle_permissively() {
        let content = concat!(
            "snippet X\n",
            "snippet_exclude_end\n",
            "a\n",
            "snippet_exclude_begin\n",
            "snippet_exclude_begin\n",
            "hidden\n",
            "snippet_exclude_end\n",
            "b\n",
            "end of snippet\n",
        );
        // A stray end marker in an included span is ordinary text.
        assert_eq!(
            extract_from_content("X", content),
            Some("snippet_exclude_end\na\nb\n".to_string())
        );
    }

    #[test]
    fn test_label_line_inside_exclusion_keeps_it_excluded() {
        let content = concat!(
            "snippet X\n",
            "a\n",
            "snippet_exclude_begin\n",
            "// see snippet X\n",
            "secret\n",
            "snippet_exclude_end\n",
            "b\n",
            "end of snippet\n",
        );
        assert_eq!(extract_from_content("X", content), Some("a\nb\n".to_string()));
    }

    #[test]
    fn test_prefix_label_inside_exclusion_keeps_it_excluded() {
        let mut scanner = SnippetScanner::new("X");
        scanner.feed("snippet X\n");
        scanner.feed("snippet_exclude_begin\n");
        scanner.feed("snippet Xylophone\n");
        assert_eq!(scanner.state(), RegionState::Excluded);
        scanner.feed("hidden\n");
        scanner.feed("snippet_exclude_end\n");
        scanner.feed("kept\n");
        assert_eq!(scanner.finish(), Some("kept\n".to_string()));
    }

    #[test]
    fn test_label_matches_anywhere_in_line() {
        let content = "    // snippet hello world\nbody\n    // end of snippet\n";
        assert_eq!(
            extract_from_content("hello world", content),
            Some("body\n".to_string())
        );
    }

    #[test]
    fn test_crlf_terminators_are_preserved() {
        let content = "snippet X\r\na\r\nend of snippet\r\n";
        assert_eq!(extract_from_content("X", content), Some("a\r\n".to_string()));
    }

    #[test]
    fn test_state_transitions() {
        let mut scanner = SnippetScanner::new("X");
        assert_eq!(scanner.state(), RegionState::Outside);
        scanner.feed("snippet X\n");
        assert_eq!(scanner.state(), RegionState::Included);
        scanner.feed("snippet_exclude_begin\n");
        assert_eq!(scanner.state(), RegionState::Excluded);
        scanner.feed("snippet_exclude_end\n");
        assert_eq!(scanner.state(), RegionState::Included);
        scanner.feed("end of snippet\n");
        assert_eq!(scanner.state(), RegionState::Outside);
        assert_eq!(scanner.finish(), Some(String::new()));
    }
}
