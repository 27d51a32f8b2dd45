use crate::cursor::TextCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. For longer
/// sequences a [`scoped`](crate::scoped) body usually reads better.
///
/// Example:
/// ```
/// use parallax::and::AndExt;
/// use parallax::take::take_while1;
/// use parallax::{Parser, TextCursor};
///
/// let cursor = TextCursor::new("x=42");
/// let ((name, _), cursor) = take_while1(|c: char| c.is_alphabetic())
///     .and("=")
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(name, "x");
/// assert_eq!(cursor.position(), 2);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_and_both_succeed() {
        let cursor = TextCursor::new("A5xyz");
        let parser = literal("A").and(literal("5"));

        let ((first, second), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(first, "A");
        assert_eq!(second, "5");
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = TextCursor::new("Bxyz");
        let error = and("A", "x").parse(cursor).unwrap_err();
        assert_eq!(error.failure().unwrap().expected(), "\"A\"");
    }

    #[test]
    fn test_and_second_fails() {
        let cursor = TextCursor::new("Axyz");
        let error = and("A", "5").parse(cursor).unwrap_err();

        // reported where the second parser started
        assert_eq!(error.failure().unwrap().position(), 1);
    }

    #[test]
    fn test_and_chain() {
        let cursor = TextCursor::new("A5B");
        let parser = literal("A").and("5").and("B");

        let (((a, five), b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(a, "A");
        assert_eq!(five, "5");
        assert_eq!(b, "B");
        assert!(cursor.eos());
    }
}
