use crate::cursor::TextCursor;
use crate::error::ParallaxError;
use crate::literal::match_literal;

/// The value and advanced cursor of a successful parse, or why it failed
pub type ParseResult<'code, O> = Result<(O, TextCursor<'code>), ParallaxError<'code>>;

/// A type-erased parser, used to put parsers of different types into one choice
pub type BoxedParser<'a, 'code, O> = Box<dyn Parser<'code, Output = O> + 'a>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. The caller's cursor is never touched, so a
    /// failure consumes nothing.
    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output>;

    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// Any function from a cursor to a parse result is a parser
impl<'code, F, O> Parser<'code> for F
where
    F: Fn(TextCursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, O> {
        self(cursor)
    }
}

/// A string literal parses itself
impl<'code> Parser<'code> for &'static str {
    type Output = &'static str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let cursor = match_literal(cursor, self)?;
        Ok((*self, cursor))
    }
}

impl<'a, 'code, O> Parser<'code> for BoxedParser<'a, 'code, O> {
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, O> {
        (**self).parse(cursor)
    }
}
