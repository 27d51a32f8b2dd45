/// What repetition combinators do when an iteration succeeds without consuming input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroWidth {
    /// Abort the parse with [`ParallaxError::NoProgress`](crate::ParallaxError::NoProgress)
    #[default]
    Fail,
    /// End the repetition, discarding the zero-width value
    Stop,
}

/// Configuration options for the parsing engine.
///
/// A copy travels inside every [`TextCursor`](crate::TextCursor), so every
/// combinator in a grammar sees the same settings without any shared state.
///
/// # Example
///
/// ```rust
/// use parallax::{Config, ZeroWidth};
///
/// // Use default configuration
/// let config = Config::default();
///
/// // Or customize it
/// let config = Config {
///     zero_width: ZeroWidth::Stop,
///     snippet_limit: Some(40),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Behaviour of `many`/`many1` on a successful iteration that consumed nothing
    pub zero_width: ZeroWidth,

    /// Maximum number of characters of remaining input shown in rendered failures
    pub snippet_limit: Option<usize>,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            zero_width: ZeroWidth::Fail,
            snippet_limit: None,
        }
    }

    pub const fn with_zero_width(mut self, zero_width: ZeroWidth) -> Self {
        self.zero_width = zero_width;
        self
    }

    pub const fn with_snippet_limit(mut self, limit: usize) -> Self {
        self.snippet_limit = Some(limit);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
