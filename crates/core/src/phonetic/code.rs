use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of digits following the leading letter.
pub const CODE_DIGITS: usize = 3;

/// A four character Soundex code: one uppercase letter followed by three digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneticCode([u8; CODE_DIGITS + 1]);

impl PhoneticCode {
    /// Assemble a code from an uppercase leading letter and its digit stream.
    pub(crate) fn from_parts(letter: u8, digits: [u8; CODE_DIGITS]) -> Self {
        debug_assert!(letter.is_ascii_uppercase());
        debug_assert!(digits.iter().all(u8::is_ascii_digit));
        Self([letter, digits[0], digits[1], digits[2]])
    }

    /// Return the leading letter.
    #[must_use]
    pub fn letter(self) -> char {
        char::from(self.0[0])
    }

    /// Return the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both constructors only ever store ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PhoneticCode").field(&self.as_str()).finish()
    }
}

/// Error returned when parsing a string that is not shaped like a code.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a phonetic code (expected one letter and three digits)")]
pub struct ParseCodeError(String);

impl FromStr for PhoneticCode {
    type Err = ParseCodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == CODE_DIGITS + 1
            && bytes[0].is_ascii_alphabetic()
            && bytes[1..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(ParseCodeError(value.to_string()));
        }

        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1],
            bytes[2],
            bytes[3],
        ]))
    }
}

impl Serialize for PhoneticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhoneticCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
