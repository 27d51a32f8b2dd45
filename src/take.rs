use crate::cursor::TextCursor;
use crate::parser::{ParseResult, Parser};

/// Capture the longest prefix whose characters all satisfy `keep`
fn scan<'code>(
    cursor: TextCursor<'code>,
    keep: impl Fn(char) -> bool,
) -> (&'code str, TextCursor<'code>) {
    let remaining = cursor.remaining();
    let end = remaining
        .char_indices()
        .find(|&(_, ch)| !keep(ch))
        .map_or(remaining.len(), |(index, _)| index);

    (&remaining[..end], cursor.advance(end))
}

/// Parser that consumes characters while a predicate holds. Never fails.
pub struct TakeWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(scan(cursor, &self.predicate))
    }
}

/// Parser that consumes characters until a predicate holds. Never fails.
pub struct TakeTill<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for TakeTill<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(scan(cursor, |ch| !(self.predicate)(ch)))
    }
}

/// Runs a span parser and rejects an empty span.
///
/// The failure is reported at the starting position with an empty expectation,
/// so an enclosing choice contributes nothing of its own to the message.
pub struct NonEmpty<P> {
    parser: P,
}

impl<P> NonEmpty<P> {
    pub fn new(parser: P) -> Self {
        NonEmpty { parser }
    }
}

impl<'code, P> Parser<'code> for NonEmpty<P>
where
    P: Parser<'code>,
    P::Output: AsRef<str>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (span, next) = self.parser.parse(cursor)?;
        if span.as_ref().is_empty() {
            return Err(cursor.fail(""));
        }
        Ok((span, next))
    }
}

pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile { predicate }
}

pub fn take_till<F>(predicate: F) -> TakeTill<F>
where
    F: Fn(char) -> bool,
{
    TakeTill { predicate }
}

pub fn take_while1<F>(predicate: F) -> NonEmpty<TakeWhile<F>>
where
    F: Fn(char) -> bool,
{
    NonEmpty::new(take_while(predicate))
}

pub fn take_till1<F>(predicate: F) -> NonEmpty<TakeTill<F>>
where
    F: Fn(char) -> bool,
{
    NonEmpty::new(take_till(predicate))
}
