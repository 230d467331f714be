//! Soundex encoding of personal names.

mod code;
mod encoder;
mod fold;

pub use code::{CODE_DIGITS, ParseCodeError, PhoneticCode};
pub use encoder::{encode, sounds_alike};
pub use fold::normalize_letters;
