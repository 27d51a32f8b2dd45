use crate::config::Config;
use crate::error::{CodeLoc, FailureKind, ParallaxError, ParseFailure};
use std::borrow::Cow;

/// A read position into a borrowed UTF-8 input.
///
/// Cursors are `Copy`: a parser receives one by value and returns the advanced
/// cursor on success. Holding on to an older copy is how every combinator
/// backtracks, since nothing a failed attempt did can reach it.
///
/// Positions are byte offsets into the source and always sit on a character
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCursor<'code> {
    source: &'code str,
    /// Byte position in the source (0-based, at most `source.len()`)
    position: usize,
    config: Config,
}

impl<'code> TextCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        TextCursor {
            source,
            position: 0,
            config: Config::default(),
        }
    }

    /// Create a cursor at `position`, which must lie on a character boundary
    /// within (or at the end of) the source.
    pub fn at(source: &'code str, position: usize) -> Result<Self, ParallaxError<'code>> {
        if !source.is_char_boundary(position) {
            return Err(ParallaxError::InvalidStart {
                start: position,
                len: source.len(),
            });
        }
        Ok(TextCursor {
            source,
            position,
            config: Config::default(),
        })
    }

    pub fn with_config(self, config: Config) -> Self {
        TextCursor { config, ..self }
    }

    /// Get the character at the current position, if any
    pub fn value(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance past the current character.
    ///
    /// At the end of input this returns a cursor still positioned at the end.
    pub fn next(self) -> Self {
        match self.value() {
            Some(ch) => self.advance(ch.len_utf8()),
            None => self,
        }
    }

    /// Advance by `len` bytes. Callers guarantee the new position is a char boundary.
    pub(crate) fn advance(self, len: usize) -> Self {
        TextCursor {
            position: self.position + len,
            ..self
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The full input this cursor reads from
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The unconsumed tail of the input
    pub fn remaining(&self) -> &'code str {
        &self.source[self.position..]
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Consume the cursor and return the source and current position
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.position)
    }

    /// Build a local failure at the current position
    pub fn failure(&self, expected: impl Into<Cow<'static, str>>) -> ParseFailure<'code> {
        ParseFailure::new(
            CodeLoc::new(self.source, self.position),
            expected,
            FailureKind::Local,
        )
        .with_snippet_limit(self.config.snippet_limit)
    }

    /// Same as [`TextCursor::failure`], already wrapped for returning from a parser
    pub fn fail(&self, expected: impl Into<Cow<'static, str>>) -> ParallaxError<'code> {
        ParallaxError::Failure(self.failure(expected))
    }
}
