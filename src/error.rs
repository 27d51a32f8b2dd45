use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn source(&self) -> &'code str {
        self.code
    }

    /// The input from the error position onwards
    pub fn remaining(&self) -> &'code str {
        self.code.get(self.loc..).unwrap_or("")
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on rendering (tab width, wide and zero-width
    /// characters). The byte offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = self.code.get(..self.loc).unwrap_or(self.code);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: before.len() - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Whether a failure came from a single primitive or from an exhausted choice
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// A primitive's expectation was not met at the current position
    Local,
    /// Every alternative of a required choice failed
    Aggregate,
}

/// A recoverable parse failure.
///
/// Carries where the failure happened, what would have been accepted there,
/// and (through the borrowed source) the unconsumed input for diagnostics.
/// `expected` may be empty, e.g. for `take_while1` finding nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure<'code> {
    loc: CodeLoc<'code>,
    expected: Cow<'static, str>,
    kind: FailureKind,
    snippet_limit: Option<usize>,
}

impl<'code> ParseFailure<'code> {
    pub fn new(
        loc: CodeLoc<'code>,
        expected: impl Into<Cow<'static, str>>,
        kind: FailureKind,
    ) -> Self {
        Self {
            loc,
            expected: expected.into(),
            kind,
            snippet_limit: None,
        }
    }

    pub fn with_snippet_limit(mut self, limit: Option<usize>) -> Self {
        self.snippet_limit = limit;
        self
    }

    pub fn position(&self) -> usize {
        self.loc.position()
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// The unconsumed input at the failure position
    pub fn remaining(&self) -> &'code str {
        self.loc.remaining()
    }

    pub(crate) fn expected_text(&self) -> Cow<'static, str> {
        self.expected.clone()
    }

    pub(crate) fn with_kind(mut self, kind: FailureKind) -> Self {
        self.kind = kind;
        self
    }

    fn snippet(&self) -> Cow<'code, str> {
        let remaining = self.remaining();
        match self.snippet_limit {
            Some(limit) => match remaining.char_indices().nth(limit) {
                Some((cut, _)) => format!("{}...", &remaining[..cut]).into(),
                None => remaining.into(),
            },
            None => remaining.into(),
        }
    }

    /// Render a multi-line diagnostic with the surrounding source lines
    pub fn report(&self) -> String {
        let pos = self.loc.readable_position();
        let mut out = format!(
            "Expected {} at line {}, byte offset {} (absolute position: {})\n\n",
            if self.expected.is_empty() {
                "something else"
            } else {
                self.expected.as_ref()
            },
            pos.line,
            pos.byte_offset,
            self.loc.position()
        );
        for line in self.loc.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl<'code> fmt::Display for ParseFailure<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Offset {}]: Expected {}; Input: \"{}\"",
            self.loc.position(),
            self.expected,
            self.snippet()
        )
    }
}

impl<'code> Error for ParseFailure<'code> {}

#[derive(Debug, thiserror::Error)]
pub enum ParallaxError<'code> {
    /// Structured failure; the only kind choice and repetition recover from
    #[error("{0}")]
    Failure(ParseFailure<'code>),

    #[error("start offset {start} is not a character boundary of the {len}-byte input")]
    InvalidStart { start: usize, len: usize },

    #[error("[Offset {position}]: repetition succeeded without consuming input")]
    NoProgress { position: usize },

    /// Non-parse error raised from inside a grammar; never intercepted
    #[error("parse aborted: {0}")]
    Aborted(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl<'code> From<ParseFailure<'code>> for ParallaxError<'code> {
    fn from(failure: ParseFailure<'code>) -> Self {
        ParallaxError::Failure(failure)
    }
}

impl<'code> ParallaxError<'code> {
    pub fn aborted(error: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        ParallaxError::Aborted(error.into())
    }

    /// Whether an enclosing choice or repetition may recover from this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParallaxError::Failure(_))
    }

    pub fn failure(&self) -> Option<&ParseFailure<'code>> {
        match self {
            ParallaxError::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local<'a>(code: &'a str, loc: usize, expected: &'static str) -> ParseFailure<'a> {
        ParseFailure::new(CodeLoc::new(code, loc), expected, FailureKind::Local)
    }

    #[test]
    fn test_display_format() {
        let failure = local("abc", 1, "\"z\"");
        assert_eq!(
            failure.to_string(),
            "[Offset 1]: Expected \"z\"; Input: \"bc\""
        );
    }

    #[test]
    fn test_display_at_end() {
        let failure = local("abc", 3, "digit");
        assert_eq!(
            failure.to_string(),
            "[Offset 3]: Expected digit; Input: \"\""
        );
    }

    #[test]
    fn test_display_with_snippet_limit() {
        let failure = local("hello world", 0, "x").with_snippet_limit(Some(5));
        assert_eq!(
            failure.to_string(),
            "[Offset 0]: Expected x; Input: \"hello...\""
        );

        let short = local("hi", 0, "x").with_snippet_limit(Some(5));
        assert_eq!(short.to_string(), "[Offset 0]: Expected x; Input: \"hi\"");
    }

    #[test]
    fn test_codeloc_eos_empty_data() {
        let loc = CodeLoc::new("", 0);
        assert_eq!(loc.remaining(), "");
        assert_eq!(
            loc.readable_position(),
            ReadablePosition {
                line: 1,
                byte_offset: 0
            }
        );
    }

    #[test]
    fn test_codeloc_readable_position_eos() {
        let loc = CodeLoc::new("line1\nline2", 11);
        let pos = loc.readable_position();

        // Should be on line 2, with byte offset 5 (past "line2")
        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_codeloc_after_newline() {
        let loc = CodeLoc::new("hello\n", 6);
        let pos = loc.readable_position();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 0);
    }

    #[test]
    fn test_codeloc_context_lines_window() {
        let loc = CodeLoc::new("a\nb\nc\nd\ne\nf\ng", 6);
        let context = loc.context_lines().join("\n");

        assert!(!context.contains("1 | a"));
        assert!(context.contains("2 | b"));
        assert!(context.contains("  > 4 | d"));
        assert!(context.contains("6 | f"));
        assert!(!context.contains("7 | g"));
    }

    #[test]
    fn test_codeloc_pointer() {
        let loc = CodeLoc::new("let x = ?;", 8);
        let context = loc.context_lines();

        assert_eq!(context[0], "  > 1 | let x = ?;");
        assert_eq!(context[1], format!("{}^--- here", " ".repeat(8 + 8)));
    }

    #[test]
    fn test_report_output() {
        let failure = local("hello\nworld", 8, "\"x\"");
        let report = failure.report();

        assert!(report.contains("Expected \"x\" at line 2, byte offset 2"));
        assert!(report.contains("world"));
        assert!(report.contains("^--- here"));
    }

    #[test]
    fn test_error_recoverability() {
        let failure: ParallaxError = local("a", 0, "b").into();
        assert!(failure.is_recoverable());
        assert_eq!(failure.failure().map(|f| f.position()), Some(0));

        let aborted = ParallaxError::aborted("predicate exploded");
        assert!(!aborted.is_recoverable());
        assert!(aborted.failure().is_none());
        assert_eq!(aborted.to_string(), "parse aborted: predicate exploded");
    }

    #[test]
    fn test_failure_display_and_source() {
        let error: ParallaxError = local("xyz", 0, "digit").into();
        assert_eq!(
            error.to_string(),
            "[Offset 0]: Expected digit; Input: \"xyz\""
        );
        assert!(error.source().is_none());
    }
}
