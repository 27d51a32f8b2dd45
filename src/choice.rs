use crate::cursor::TextCursor;
use crate::error::{FailureKind, ParallaxError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use tracing::trace;

/// An ordered collection of candidate parsers sharing one output type.
///
/// Implemented for tuples of up to eight parsers, arrays and `Vec`s. Use
/// [`Parser::boxed`] to mix parser types in an array or `Vec`.
pub trait Alternatives<'code> {
    type Output;

    /// Run the candidate at `index` from `cursor`, or `None` past the last one
    fn attempt(
        &self,
        index: usize,
        cursor: TextCursor<'code>,
    ) -> Option<ParseResult<'code, Self::Output>>;
}

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn attempt(
        &self,
        index: usize,
        cursor: TextCursor<'code>,
    ) -> Option<ParseResult<'code, Self::Output>> {
        self.get(index).map(|parser| parser.parse(cursor))
    }
}

impl<'code, P, const N: usize> Alternatives<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn attempt(
        &self,
        index: usize,
        cursor: TextCursor<'code>,
    ) -> Option<ParseResult<'code, Self::Output>> {
        self.get(index).map(|parser| parser.parse(cursor))
    }
}

macro_rules! impl_alternatives {
    ($($parser:ident $index:tt),+) => {
        impl<'code, O, $($parser),+> Alternatives<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code, Output = O>,)+
        {
            type Output = O;

            fn attempt(
                &self,
                index: usize,
                cursor: TextCursor<'code>,
            ) -> Option<ParseResult<'code, O>> {
                match index {
                    $($index => Some(self.$index.parse(cursor)),)+
                    _ => None,
                }
            }
        }
    };
}

impl_alternatives!(P0 0);
impl_alternatives!(P0 0, P1 1);
impl_alternatives!(P0 0, P1 1, P2 2);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

enum Selection<'code, O> {
    Matched(O, TextCursor<'code>),
    /// Fewer than two entries were tried; carries the failure of the single
    /// candidate, if there was one
    Unmatched(Option<ParseFailure<'code>>),
}

fn aggregate_expected(
    message: Option<&Cow<'static, str>>,
    expected: &[Cow<'static, str>],
) -> Cow<'static, str> {
    match (message, expected.is_empty()) {
        (Some(message), false) => format!("{} (missing {})", message, expected.join(" or ")).into(),
        (None, false) => expected.join(" or ").into(),
        (Some(message), true) => message.clone(),
        (None, true) => Cow::Borrowed("something else"),
    }
}

/// Try every candidate from the same starting cursor and commit to the first
/// success. The override message counts as one tried entry.
fn select<'code, A>(
    alternatives: &A,
    message: Option<&Cow<'static, str>>,
    cursor: TextCursor<'code>,
) -> Result<Selection<'code, A::Output>, ParallaxError<'code>>
where
    A: Alternatives<'code>,
{
    let mut expected = Vec::new();
    let mut tried = usize::from(message.is_some());
    let mut last_failure = None;
    let mut index = 0;

    while let Some(result) = alternatives.attempt(index, cursor) {
        match result {
            Ok((value, next)) => return Ok(Selection::Matched(value, next)),
            Err(ParallaxError::Failure(failure)) => {
                trace!(
                    index,
                    position = cursor.position(),
                    expected = failure.expected(),
                    "alternative failed"
                );
                if !failure.expected().is_empty() {
                    expected.push(failure.expected_text());
                }
                last_failure = Some(failure);
            }
            Err(error) => return Err(error),
        }
        tried += 1;
        index += 1;
    }

    if tried > 1 {
        let failure = cursor
            .failure(aggregate_expected(message, &expected))
            .with_kind(FailureKind::Aggregate);
        return Err(ParallaxError::Failure(failure));
    }

    Ok(Selection::Unmatched(last_failure))
}

/// Ordered choice that doubles as an optional.
///
/// With two or more tried entries a total miss is an aggregate failure. With a
/// single candidate (and no message) a miss yields `None` and consumes nothing.
pub struct Choice<A> {
    alternatives: A,
    message: Option<Cow<'static, str>>,
}

impl<A> Choice<A> {
    pub fn new(alternatives: A) -> Self {
        Choice {
            alternatives,
            message: None,
        }
    }

    /// Describe what the whole choice expects when every candidate fails
    pub fn expecting(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<'code, A> Parser<'code> for Choice<A>
where
    A: Alternatives<'code>,
{
    type Output = Option<A::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match select(&self.alternatives, self.message.as_ref(), cursor)? {
            Selection::Matched(value, next) => Ok((Some(value), next)),
            Selection::Unmatched(_) => Ok((None, cursor)),
        }
    }
}

/// Ordered choice that always produces a value or fails.
///
/// Behaves as [`Choice`] except that a lone candidate's failure is raised
/// instead of turned into `None`.
pub struct Alt<A> {
    alternatives: A,
    message: Option<Cow<'static, str>>,
}

impl<A> Alt<A> {
    pub fn new(alternatives: A) -> Self {
        Alt {
            alternatives,
            message: None,
        }
    }

    pub fn expecting(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<'code, A> Parser<'code> for Alt<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match select(&self.alternatives, self.message.as_ref(), cursor)? {
            Selection::Matched(value, next) => Ok((value, next)),
            Selection::Unmatched(Some(failure)) => Err(ParallaxError::Failure(failure)),
            Selection::Unmatched(None) => Err(cursor.fail(
                self.message
                    .clone()
                    .unwrap_or(Cow::Borrowed("something else")),
            )),
        }
    }
}

pub fn choice<A>(alternatives: A) -> Choice<A> {
    Choice::new(alternatives)
}

pub fn alt<A>(alternatives: A) -> Alt<A> {
    Alt::new(alternatives)
}

/// Run `parser` if it matches, yielding `None` without consuming input otherwise
pub fn optional<P>(parser: P) -> Choice<(P,)> {
    Choice::new((parser,))
}
