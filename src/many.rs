use crate::config::ZeroWidth;
use crate::cursor::TextCursor;
use crate::error::{ParallaxError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Values collected by a repetition, the cursor after the last success, and
/// the failure that ended it
type Repetition<'code, O> = (Vec<O>, TextCursor<'code>, Option<ParseFailure<'code>>);

/// Apply `parser` until it fails, returning the collected values, the cursor
/// after the last success, and the failure that ended the loop.
///
/// An iteration that succeeds without consuming input is handled according to
/// the cursor's [`ZeroWidth`] setting.
fn repeat<'code, P>(
    parser: &P,
    mut cursor: TextCursor<'code>,
) -> Result<Repetition<'code, P::Output>, ParallaxError<'code>>
where
    P: Parser<'code>,
{
    let mut results = Vec::new();

    loop {
        match parser.parse(cursor) {
            Ok((value, next_cursor)) => {
                if next_cursor.position() == cursor.position() {
                    match cursor.config().zero_width {
                        ZeroWidth::Fail => {
                            return Err(ParallaxError::NoProgress {
                                position: cursor.position(),
                            });
                        }
                        ZeroWidth::Stop => {
                            trace!(
                                count = results.len(),
                                position = cursor.position(),
                                "repetition stopped without progress"
                            );
                            return Ok((results, cursor, None));
                        }
                    }
                }
                results.push(value);
                cursor = next_cursor;
            }
            Err(ParallaxError::Failure(failure)) => {
                trace!(
                    count = results.len(),
                    position = cursor.position(),
                    "repetition stopped"
                );
                return Ok((results, cursor, Some(failure)));
            }
            Err(error) => return Err(error),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        // Many matches zero or more, so the trailing failure is not propagated
        let (results, cursor, _) = repeat(&self.parser, cursor)?;
        Ok((results, cursor))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (results, next, failure) = repeat(&self.parser, cursor)?;
        if results.is_empty() {
            // Only reachable without a failure when a zero-width match was stopped
            let failure = failure.unwrap_or_else(|| cursor.failure(""));
            return Err(ParallaxError::Failure(failure));
        }
        Ok((results, next))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
