//! Imperative grammar bodies.
//!
//! A [`Scope`] owns a cursor for the duration of one body and hands it to every
//! parser the body runs, so a grammar reads as a sequence of ordinary calls:
//!
//! ```
//! use parallax::{alt, optional, scoped, take_while1, Parser, TextCursor};
//!
//! let assignment = scoped(|s| {
//!     let name = s.run(&take_while1(|c: char| c.is_alphabetic()))?;
//!     s.run(&optional(" "))?;
//!     s.run(&"=")?;
//!     s.run(&optional(" "))?;
//!     let value = s.run(&alt(("true", "false")))?;
//!     Ok((name, value == "true"))
//! });
//!
//! let ((name, value), cursor) = assignment.parse(TextCursor::new("debug = true")).unwrap();
//! assert_eq!(name, "debug");
//! assert!(value);
//! assert!(cursor.eos());
//! ```
//!
//! A scoped parser works on a copy of its caller's cursor and only returns the
//! advanced copy on success, so a body that bails out with `?` halfway through
//! leaves nothing behind.

use crate::cursor::TextCursor;
use crate::error::ParallaxError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// The cursor-threading context handed to a [`scoped`] body
#[derive(Debug)]
pub struct Scope<'code> {
    cursor: TextCursor<'code>,
}

impl<'code> Scope<'code> {
    pub fn new(cursor: TextCursor<'code>) -> Self {
        Scope { cursor }
    }

    /// Run `parser` at the current position, advancing past what it consumed
    pub fn run<P>(&mut self, parser: &P) -> Result<P::Output, ParallaxError<'code>>
    where
        P: Parser<'code> + ?Sized,
    {
        let (value, cursor) = parser.parse(self.cursor)?;
        self.cursor = cursor;
        Ok(value)
    }

    pub fn cursor(&self) -> TextCursor<'code> {
        self.cursor
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn remaining(&self) -> &'code str {
        self.cursor.remaining()
    }

    pub fn at_end(&self) -> bool {
        self.cursor.eos()
    }

    /// A local failure at the current position, for `return Err(s.fail(..))`
    pub fn fail(&self, expected: impl Into<Cow<'static, str>>) -> ParallaxError<'code> {
        self.cursor.fail(expected)
    }

    pub fn into_cursor(self) -> TextCursor<'code> {
        self.cursor
    }
}

/// Parser built from a closure over a [`Scope`]
pub struct Scoped<F> {
    body: F,
}

impl<'code, F, O> Parser<'code> for Scoped<F>
where
    F: Fn(&mut Scope<'code>) -> Result<O, ParallaxError<'code>>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, O> {
        let mut scope = Scope::new(cursor);
        let value = (self.body)(&mut scope)?;
        Ok((value, scope.into_cursor()))
    }
}

pub fn scoped<'code, F, O>(body: F) -> Scoped<F>
where
    F: Fn(&mut Scope<'code>) -> Result<O, ParallaxError<'code>>,
{
    Scoped { body }
}
