use crate::cursor::TextCursor;
use crate::error::ParallaxError;
use crate::parser::{ParseResult, Parser};
use std::error::Error;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, U> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Parser combinator whose mapping function may fail.
///
/// A mapping error is not a parse failure: it aborts the whole parse instead
/// of letting an enclosing choice try something else.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'code, P, F, U, E> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, U> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped = (self.mapper)(value).map_err(ParallaxError::aborted)?;
        Ok((mapped, cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::alt;
    use crate::literal::literal;
    use crate::take::take_while1;

    #[derive(Debug, PartialEq)]
    enum Token {
        Keyword,
        Number(u32),
    }

    fn digits<'code>() -> impl Parser<'code, Output = &'code str> {
        take_while1(|c: char| c.is_ascii_digit())
    }

    #[test]
    fn test_map_to_enum() {
        let cursor = TextCursor::new("let");
        let (token, cursor) = literal("let")
            .map(|_| Token::Keyword)
            .parse(cursor)
            .unwrap();

        assert_eq!(token, Token::Keyword);
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let cursor = TextCursor::new("5");
        let parser = digits()
            .map(|s| s.len())
            .map(|len| format!("Length: {}", len));

        let (result, _) = parser.parse(cursor).unwrap();
        assert_eq!(result, "Length: 1");
    }

    #[test]
    fn test_map_with_alt_common_enum() {
        let cursor = TextCursor::new("42");
        let parser = alt((
            literal("let").map(|_| Token::Keyword),
            digits().map(|s: &str| Token::Number(s.len() as u32)),
        ));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Number(2));
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_preserves_errors() {
        let cursor = TextCursor::new("xyz");
        let error = map(literal("A"), |s| s.len()).parse(cursor).unwrap_err();

        assert!(error.is_recoverable());
    }

    #[test]
    fn test_try_map_success() {
        let cursor = TextCursor::new("255");
        let (value, _) = digits().try_map(|s| s.parse::<u8>()).parse(cursor).unwrap();

        assert_eq!(value, 255);
    }

    #[test]
    fn test_try_map_aborts() {
        let cursor = TextCursor::new("256");
        let error = digits()
            .try_map(|s| s.parse::<u8>())
            .parse(cursor)
            .unwrap_err();

        assert!(!error.is_recoverable());
        assert!(error.to_string().starts_with("parse aborted:"));
    }

    #[test]
    fn test_try_map_error_escapes_choice() {
        let cursor = TextCursor::new("256");
        let parser = alt((
            digits().try_map(|s| s.parse::<u8>()),
            digits().map(|_| 0u8),
        ));

        assert!(matches!(
            parser.parse(cursor),
            Err(ParallaxError::Aborted(_))
        ));
    }
}
