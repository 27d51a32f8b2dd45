use crate::map::MapExt;
use crate::parser::Parser;
use crate::take::take_while;

/// Space, horizontal tab, vertical tab, carriage return or line feed
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\r' | '\n')
}

/// Parser that skips any run of ASCII whitespace, including none
pub fn spaces<'code>() -> impl Parser<'code, Output = ()> {
    take_while(is_space).map(|_| ())
}
