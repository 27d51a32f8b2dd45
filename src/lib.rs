//! # Parallax - Backtracking Parser Combinators
//!
//! Parallax builds parsers for UTF-8 text out of small composable pieces:
//! literals, predicate-driven spans, ordered choice, repetition and plain
//! Rust functions.
//!
//! - **Failures are values**: every parser returns a `Result`, and a failed
//!   attempt never moves the caller's cursor
//! - **Diagnostics**: failures carry the byte offset, what was expected and
//!   the unconsumed input, rendered as `[Offset P]: Expected E; Input: "..."`
//! - **Static dispatch**: string literals, functions, tuples of alternatives
//!   and [`scoped`] bodies are all parsers through the [`Parser`] trait
//!
//! ```
//! use parallax::ascii::is_digit;
//! use parallax::{alt, end_of_input, optional, parse, scoped};
//!
//! let signed = scoped(|s| {
//!     let minus = s.run(&optional("-"))?;
//!     let digits = s.run(&alt((parallax::take_while1(is_digit),)).expecting("digit"))?;
//!     s.run(&end_of_input())?;
//!     Ok((minus.is_some(), digits))
//! });
//!
//! let ((negative, digits), cursor) = parse(&signed, "-42").unwrap();
//! assert!(negative);
//! assert_eq!(digits, "42");
//! assert_eq!(cursor.position(), 3);
//!
//! let error = parse(&signed, "abc").unwrap_err();
//! assert_eq!(error.to_string(), "[Offset 0]: Expected digit; Input: \"abc\"");
//! ```

pub mod and;
pub mod ascii;
pub mod choice;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod eof;
pub mod error;
pub mod literal;
pub mod many;
pub mod map;
pub mod parser;
pub mod scope;
pub mod take;

pub use and::{AndExt, and};
pub use choice::{Alternatives, alt, choice, optional};
pub use config::{Config, ZeroWidth};
pub use cursor::TextCursor;
pub use engine::{Engine, parse, parse_at};
pub use eof::end_of_input;
pub use error::{CodeLoc, FailureKind, ParallaxError, ParseFailure};
pub use literal::literal;
pub use many::{many, many1};
pub use map::{MapExt, map};
pub use parser::{BoxedParser, ParseResult, Parser};
pub use scope::{Scope, scoped};
pub use take::{take_till, take_till1, take_while, take_while1};
