use crate::cursor::TextCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds only when all input has been consumed
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, ()> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(cursor.fail("end of input"))
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
