//! Top-level entry point: bind a parser to an input and run it.

use crate::config::Config;
use crate::cursor::TextCursor;
use crate::error::ParallaxError;
use crate::parser::Parser;
use tracing::debug;

/// A parser together with the configuration it runs under.
///
/// The engine owns no parse state; every call builds a fresh cursor, so one
/// engine can serve any number of inputs.
pub struct Engine<P> {
    parser: P,
    config: Config,
}

impl<P> Engine<P> {
    pub fn new(parser: P) -> Self {
        Engine {
            parser,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Run the parser from the start of `input`
    pub fn parse<'code>(
        &self,
        input: &'code str,
    ) -> Result<(P::Output, TextCursor<'code>), ParallaxError<'code>>
    where
        P: Parser<'code>,
    {
        self.parse_at(input, 0)
    }

    /// Run the parser from byte offset `start`.
    ///
    /// The returned cursor marks where the parser stopped, which need not be
    /// the end of the input.
    pub fn parse_at<'code>(
        &self,
        input: &'code str,
        start: usize,
    ) -> Result<(P::Output, TextCursor<'code>), ParallaxError<'code>>
    where
        P: Parser<'code>,
    {
        let cursor = TextCursor::at(input, start)?.with_config(self.config);
        run(&self.parser, cursor)
    }
}

/// Parse `input` from the beginning with the default configuration
pub fn parse<'code, P>(
    parser: &P,
    input: &'code str,
) -> Result<(P::Output, TextCursor<'code>), ParallaxError<'code>>
where
    P: Parser<'code> + ?Sized,
{
    parse_at(parser, input, 0)
}

/// Parse `input` from byte offset `start` with the default configuration
pub fn parse_at<'code, P>(
    parser: &P,
    input: &'code str,
    start: usize,
) -> Result<(P::Output, TextCursor<'code>), ParallaxError<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let cursor = TextCursor::at(input, start)?;
    run(parser, cursor)
}

fn run<'code, P>(
    parser: &P,
    cursor: TextCursor<'code>,
) -> Result<(P::Output, TextCursor<'code>), ParallaxError<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let start = cursor.position();
    debug!(start, len = cursor.source().len(), "parse started");

    let result = parser.parse(cursor);
    match &result {
        Ok((_, cursor)) => debug!(start, position = cursor.position(), "parse finished"),
        Err(error) => debug!(start, %error, "parse failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZeroWidth;
    use crate::many::many;
    use crate::take::{take_while, take_while1};

    #[test]
    fn test_parse_from_start() {
        let engine = Engine::new("let");
        let (value, cursor) = engine.parse("let x").unwrap();

        assert_eq!(value, "let");
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), " x");
    }

    #[test]
    fn test_parse_at_offset() {
        let engine = Engine::new(take_while1(|c: char| c.is_alphabetic()));
        let (word, cursor) = engine.parse_at("let x", 4).unwrap();

        assert_eq!(word, "x");
        assert!(cursor.eos());
    }

    #[test]
    fn test_parse_at_end_of_input() {
        let letters = take_while(|c: char| c.is_alphabetic());
        let (span, cursor) = parse_at(&letters, "abc", 3).unwrap();
        assert_eq!(span, "");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_invalid_start_past_end() {
        let error = parse_at(&"a", "abc", 4).unwrap_err();
        assert!(matches!(
            error,
            ParallaxError::InvalidStart { start: 4, len: 3 }
        ));
    }

    #[test]
    fn test_invalid_start_inside_char() {
        let error = Engine::new("b").parse_at("éb", 1).unwrap_err();
        assert!(matches!(
            error,
            ParallaxError::InvalidStart { start: 1, .. }
        ));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_failure_propagates_unchanged() {
        let error = parse(&"let", "var").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.position(), 0);
        assert_eq!(failure.expected(), "\"let\"");
        assert_eq!(
            error.to_string(),
            "[Offset 0]: Expected \"let\"; Input: \"var\""
        );
    }

    #[test]
    fn test_engine_config_reaches_cursor() {
        let config = Config::new().with_zero_width(ZeroWidth::Stop);
        let digits = many(take_while(|c: char| c.is_ascii_digit()));
        let engine = Engine::new(digits).with_config(config);
        assert_eq!(engine.config(), config);

        let (spans, cursor) = engine.parse("12ab").unwrap();
        assert_eq!(spans, vec!["12"]);
        assert_eq!(cursor.position(), 2);

        let default = Engine::new(many(take_while(|c: char| c.is_ascii_digit())));
        assert!(matches!(
            default.parse("12ab"),
            Err(ParallaxError::NoProgress { position: 2 })
        ));
    }

    #[test]
    fn test_engine_matches_free_functions() {
        let digits = take_while1(|c: char| c.is_ascii_digit());
        let engine = Engine::new(take_while1(|c: char| c.is_ascii_digit()));

        for (input, start) in [("12ab", 0), ("ab34", 2), ("abc", 1)] {
            let from_engine = engine.parse_at(input, start);
            let from_free = parse_at(&digits, input, start);

            match (from_engine, from_free) {
                (Ok((left, left_cursor)), Ok((right, right_cursor))) => {
                    assert_eq!(left, right);
                    assert_eq!(left_cursor, right_cursor);
                }
                (Err(left), Err(right)) => assert_eq!(left.to_string(), right.to_string()),
                (left, right) => panic!("diverged on {:?}: {:?} vs {:?}", input, left, right),
            }
        }
    }

    #[test]
    fn test_engine_is_reusable() {
        let engine = Engine::new(take_while1(|c: char| c.is_ascii_digit()));

        assert_eq!(engine.parse("1").unwrap().0, "1");
        assert_eq!(engine.parse("234").unwrap().0, "234");
        assert!(engine.parse("x").is_err());
    }
}
