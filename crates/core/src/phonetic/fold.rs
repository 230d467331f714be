//! ASCII folding applied before encoding.
//!
//! Names are decomposed with Unicode NFD so accented Latin letters split into a
//! base letter plus combining marks; the marks are dropped. A handful of Latin
//! letters that do not decompose are spelled out through a small table.
//! Everything else (digits, punctuation, scripts without a Latin base letter)
//! is discarded.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Return the uppercase `A`-`Z` letter stream of `name`.
#[must_use]
pub fn normalize_letters(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.nfd() {
        if ch.is_ascii_alphabetic() {
            out.push(ch.to_ascii_uppercase());
            continue;
        }
        if ch.is_ascii() || is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if let Some(spelled) = spell_out(lower) {
                out.push_str(spelled);
            }
        }
    }
    out
}

fn spell_out(ch: char) -> Option<&'static str> {
    let spelled = match ch {
        'ß' => "SS",
        'æ' => "AE",
        'œ' => "OE",
        'ø' => "O",
        'đ' | 'ð' => "D",
        'ł' => "L",
        'þ' => "TH",
        'ı' => "I",
        _ => return None,
    };
    Some(spelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_uppercases() {
        assert_eq!(normalize_letters("O'Brien-Smith 3rd"), "OBRIENSMITHRD");
    }

    #[test]
    fn folds_accented_latin_letters() {
        assert_eq!(normalize_letters("José Núñez"), "JOSENUNEZ");
        assert_eq!(normalize_letters("Müller"), "MULLER");
    }

    #[test]
    fn spells_out_undecomposable_letters() {
        assert_eq!(normalize_letters("Strauß"), "STRAUSS");
        assert_eq!(normalize_letters("Ørsted"), "ORSTED");
        assert_eq!(normalize_letters("Łukasz"), "LUKASZ");
        assert_eq!(normalize_letters("Æsir"), "AESIR");
    }

    #[test]
    fn drops_scripts_without_latin_base() {
        assert_eq!(normalize_letters("כהן"), "");
        assert_eq!(normalize_letters("Иван Ivan"), "IVAN");
    }
}
