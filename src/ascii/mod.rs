pub mod number;
pub mod whitespace;

pub use number::{Number, is_digit, number};
pub use whitespace::{is_space, spaces};
