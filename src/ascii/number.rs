use crate::choice::{alt, optional};
use crate::cursor::TextCursor;
use crate::parser::{ParseResult, Parser};
use crate::take::take_while1;

const OUT_OF_RANGE: &str = "integer within i64 range";

/// ASCII decimal digit (0-9)
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Parser for an optionally negative decimal integer
pub struct Number;

impl<'code> Parser<'code> for Number {
    type Output = i64;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, i64> {
        let (sign, cursor) = optional("-").parse(cursor)?;
        let digits_start = cursor;
        let (digits, cursor) = alt((take_while1(is_digit),))
            .expecting("digit")
            .parse(cursor)?;

        // Accumulate as a negative number so that i64::MIN is representable
        let negative = digits.bytes().try_fold(0i64, |acc, byte| {
            acc.checked_mul(10)?.checked_sub(i64::from(byte - b'0'))
        });
        let value = match (negative, sign.is_some()) {
            (Some(value), true) => Some(value),
            (Some(value), false) => value.checked_neg(),
            (None, _) => None,
        };

        match value {
            Some(value) => Ok((value, cursor)),
            None => Err(digits_start.fail(OUT_OF_RANGE)),
        }
    }
}

/// Parser that matches an ASCII integer, e.g. `42` or `-7`
pub fn number() -> Number {
    Number
}
