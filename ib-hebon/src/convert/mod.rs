/*!
Script converters.

All converters share the [`Converter`] interface, so callers can swap
scripts without caring how each one spells its variants.

```
use ib_hebon::{Converter, HebonRomanizer, HiraganaToKatakana};

let converters: [&dyn Converter; 2] = [&HebonRomanizer::default(), &HiraganaToKatakana];
let converted: Vec<String> = converters.iter().map(|c| c.convert("さとう")).collect();
assert_eq!(converted, ["satō", "サトウ"]);
```
*/
use ib_unicode::kana;

use crate::Result;

pub mod scan;
pub mod variant;

pub trait Converter {
    fn convert(&self, s: &str) -> String;

    /// All accepted spellings of [`convert()`](Self::convert).
    ///
    /// Defaults to the single conversion.
    fn convert_to_variants(&self, s: &str) -> Result<Vec<String>> {
        Ok(vec![self.convert(s)])
    }
}

/// Shifts Hiragana to Katakana, see [`ib_unicode::kana`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HiraganaToKatakana;

impl Converter for HiraganaToKatakana {
    fn convert(&self, s: &str) -> String {
        kana::to_katakana(s)
    }
}

/// Shifts Katakana to Hiragana, see [`ib_unicode::kana`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KatakanaToHiragana;

impl Converter for KatakanaToHiragana {
    fn convert(&self, s: &str) -> String {
        kana::to_hiragana(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift() {
        assert_eq!(HiraganaToKatakana.convert("わにかに　が　すごい　だ"), "ワニカニ　ガ　スゴイ　ダ");
        assert_eq!(KatakanaToHiragana.convert("ワニカニ　ガ　スゴイ　ダ"), "わにかに　が　すごい　だ");
        assert_eq!(KatakanaToHiragana.convert("エーイチ"), "えーいち");
        assert_eq!(HiraganaToKatakana.convert("日本 romaji"), "日本 romaji");
    }

    #[test]
    fn single_variant() {
        assert_eq!(
            HiraganaToKatakana.convert_to_variants("さとう").unwrap(),
            ["サトウ"]
        );
        assert_eq!(KatakanaToHiragana.convert_to_variants("").unwrap(), [""]);
    }
}
