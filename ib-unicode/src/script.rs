/*!
Japanese script classification by Unicode code point ranges.

All ranges are inclusive. The Hiragana range starts at U+3040 rather than
U+3041 (the first assigned Hiragana), so the unassigned U+3040 is also
treated as Hiragana.

Methods only classify characters of the script itself. Spaces, ASCII
punctuation and symbols are not part of any script, unless noted.

```
use ib_unicode::script::{CharScriptExt, StrScriptExt};

assert!('し'.is_hiragana());
assert!("日本".is_kanji());
assert!(!"しょ う".is_hiragana());
assert_eq!("すず日き".hiragana(), "すずき");
```
*/
use crate::Sealed;

pub const HIRAGANA_START: u32 = 0x3040;
pub const HIRAGANA_END: u32 = 0x309F;
pub const KATAKANA_START: u32 = 0x30A0;
pub const KATAKANA_END: u32 = 0x30FF;
/// Common and uncommon kanji.
pub const KANJI_START: u32 = 0x4E00;
pub const KANJI_END: u32 = 0x9FAF;
pub const RARE_KANJI_START: u32 = 0x3400;
pub const RARE_KANJI_END: u32 = 0x4DBF;
pub const JAPANESE_PUNCTUATION_START: u32 = 0x3000;
pub const JAPANESE_PUNCTUATION_END: u32 = 0x303F;

/// Checks if the character is in the inclusive code point range `start..=end`.
///
/// ```
/// use ib_unicode::script::{is_char_in_range, HIRAGANA_END, HIRAGANA_START};
///
/// assert!(is_char_in_range('し', HIRAGANA_START, HIRAGANA_END));
/// assert!(!is_char_in_range('シ', HIRAGANA_START, HIRAGANA_END));
/// ```
#[inline]
pub const fn is_char_in_range(c: char, start: u32, end: u32) -> bool {
    let c = c as u32;
    start <= c && c <= end
}

pub trait CharScriptExt: Sealed {
    fn is_hiragana(self) -> bool;

    fn is_katakana(self) -> bool;

    /// Hiragana or Katakana.
    fn is_kana(self) -> bool;

    /// Common, uncommon and rare kanji.
    fn is_kanji(self) -> bool;

    /// Japanese symbols and punctuation, including the ideographic space `U+3000`.
    fn is_japanese_punctuation(self) -> bool;
}

impl CharScriptExt for char {
    #[inline]
    fn is_hiragana(self) -> bool {
        is_char_in_range(self, HIRAGANA_START, HIRAGANA_END)
    }

    #[inline]
    fn is_katakana(self) -> bool {
        is_char_in_range(self, KATAKANA_START, KATAKANA_END)
    }

    #[inline]
    fn is_kana(self) -> bool {
        self.is_hiragana() || self.is_katakana()
    }

    #[inline]
    fn is_kanji(self) -> bool {
        is_char_in_range(self, KANJI_START, KANJI_END)
            || is_char_in_range(self, RARE_KANJI_START, RARE_KANJI_END)
    }

    #[inline]
    fn is_japanese_punctuation(self) -> bool {
        is_char_in_range(self, JAPANESE_PUNCTUATION_START, JAPANESE_PUNCTUATION_END)
    }
}

/// String-level predicates are true if *every* char satisfies the char-level one.
///
/// An empty string is vacuously of every script.
pub trait StrScriptExt: Sealed {
    fn is_hiragana(&self) -> bool;

    fn is_katakana(&self) -> bool;

    fn is_kanji(&self) -> bool;

    fn is_japanese_punctuation(&self) -> bool;

    /// Only the Hiragana characters from the string.
    fn hiragana(&self) -> String;

    /// Only the Katakana characters from the string.
    fn katakana(&self) -> String;
}

impl StrScriptExt for str {
    fn is_hiragana(&self) -> bool {
        self.chars().all(CharScriptExt::is_hiragana)
    }

    fn is_katakana(&self) -> bool {
        self.chars().all(CharScriptExt::is_katakana)
    }

    fn is_kanji(&self) -> bool {
        self.chars().all(CharScriptExt::is_kanji)
    }

    fn is_japanese_punctuation(&self) -> bool {
        self.chars().all(CharScriptExt::is_japanese_punctuation)
    }

    fn hiragana(&self) -> String {
        self.chars().filter(|&c| c.is_hiragana()).collect()
    }

    fn katakana(&self) -> String {
        self.chars().filter(|&c| c.is_katakana()).collect()
    }
}
