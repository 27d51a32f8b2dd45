use crate::cursor::TextCursor;
use crate::error::ParallaxError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Advance past `expected` if the input continues with it, failing without
/// consuming anything otherwise.
pub(crate) fn match_literal<'code>(
    cursor: TextCursor<'code>,
    expected: &str,
) -> Result<TextCursor<'code>, ParallaxError<'code>> {
    if cursor.remaining().starts_with(expected) {
        Ok(cursor.advance(expected.len()))
    } else {
        Err(cursor.fail(format!("\"{}\"", expected)))
    }
}

/// Parser that matches an exact string
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let cursor = match_literal(cursor, &self.expected)?;
        Ok((self.expected.clone(), cursor))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
