use tracing::trace;

use super::code::{CODE_DIGITS, PhoneticCode};
use super::fold::normalize_letters;
use crate::error::EncodeError;

/// How a letter behaves once it follows the leading letter of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sound {
    /// A vowel, `H`, `W` or `Y`: emits nothing, and a repeated consonant class
    /// after it counts again.
    Separator,
    /// A consonant in one of the six digit classes.
    Digit(u8),
}

fn sound_of(letter: u8) -> Sound {
    match letter {
        b'B' | b'F' | b'P' | b'V' => Sound::Digit(b'1'),
        b'C' | b'G' | b'J' | b'K' | b'Q' | b'S' | b'X' | b'Z' => Sound::Digit(b'2'),
        b'D' | b'T' => Sound::Digit(b'3'),
        b'L' => Sound::Digit(b'4'),
        b'M' | b'N' => Sound::Digit(b'5'),
        b'R' => Sound::Digit(b'6'),
        _ => Sound::Separator,
    }
}

/// Encode `name` as an American Soundex code.
///
/// The input is ASCII-folded and stripped of everything but letters first,
/// so case, punctuation and accents never change the result. The leading
/// letter is kept as is; its class still suppresses an identical class
/// directly after it (`Pfister` is `P236`).
///
/// # Errors
///
/// Returns [`EncodeError::EmptyInput`] when no letters survive normalization.
pub fn encode(name: &str) -> Result<PhoneticCode, EncodeError> {
    let letters = normalize_letters(name);
    let mut bytes = letters.bytes();
    let first = bytes.next().ok_or(EncodeError::EmptyInput)?;

    let mut digits = [b'0'; CODE_DIGITS];
    let mut written = 0;
    let mut previous = match sound_of(first) {
        Sound::Digit(digit) => Some(digit),
        Sound::Separator => None,
    };

    for letter in bytes {
        if written == CODE_DIGITS {
            break;
        }
        match sound_of(letter) {
            Sound::Digit(digit) => {
                if previous != Some(digit) {
                    digits[written] = digit;
                    written += 1;
                }
                previous = Some(digit);
            }
            Sound::Separator => previous = None,
        }
    }

    let code = PhoneticCode::from_parts(first, digits);
    trace!(name, %code, "encoded name");
    Ok(code)
}

/// Return `true` when both names encode to the same code.
///
/// A name without encodable letters never sounds like anything.
#[must_use]
pub fn sounds_alike(left: &str, right: &str) -> bool {
    match (encode(left), encode(right)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}
