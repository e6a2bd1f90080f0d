mod error;
mod parse;
pub mod vint;

#[cfg(test)]
mod tests;

pub use self::error::{ebml_err, Error, ErrorClass, ErrorKind};
pub use self::parse::*;
pub use self::vint::UNKNOWN_SIZE;
