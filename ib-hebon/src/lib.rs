//! A Japanese passport-style (ヘボン式) romanizer with spelling variants.
//!
//! ## Usage
//! ```rust
//! use ib_hebon::HebonRomanizer;
//!
//! let romanizer = HebonRomanizer::default();
//! assert_eq!(romanizer.romanize("さとう"), "satō");
//! assert_eq!(romanizer.romanize("かっぱ たった"), "kappa tatta");
//! assert_eq!(romanizer.romanize_variants("おうの")?, ["ono", "ohno", "oono"]);
//!
//! let romanizer = HebonRomanizer::builder().katakana(true).build();
//! assert_eq!(romanizer.romanize("キョウト"), "kyōto");
//! # Ok::<(), ib_hebon::Error>(())
//! ```
//!
//! ## Design
//! The romanization is done in two steps:
//! 1. [`convert::scan`] romanizes Hiragana into one canonical spelling, with
//!    long vowels in macrons (`ō`, `ū`, `ē`).
//! 2. [`convert::variant`] expands each macron into the spellings accepted by
//!    the passport, using the generic [`combo::ComboBuilder`].
//!
//! The syllables come from a [`LookupTable`], which is built once and shared
//! by default.
//!
//! ## Features
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
use std::borrow::Cow;

use bon::bon;
use ib_unicode::kana;

pub mod combo;
pub mod convert;
pub mod data;
mod error;
mod table;

pub use convert::{Converter, HiraganaToKatakana, KatakanaToHiragana};
pub use error::{Error, Result};
pub use table::LookupTable;

use convert::{scan, variant};

/// The default of [`HebonRomanizerBuilder::max_variants()`].
pub const DEFAULT_MAX_VARIANTS: u64 = 4096;

/// [Hepburn romanization](https://en.wikipedia.org/wiki/Hepburn_romanization)
/// as used by the Japanese passport (ヘボン式).
#[derive(Clone, Copy)]
pub struct HebonRomanizer<'t> {
    table: &'t LookupTable,
    katakana: bool,
    max_variants: u64,
}

#[bon]
impl<'t> HebonRomanizer<'t> {
    /// Create a romanizer, or see [`HebonRomanizer::default()`] for the defaults.
    #[builder(builder_type = HebonRomanizerBuilder)]
    pub fn new(
        /// Defaults to [`LookupTable::shared()`].
        #[builder(default = LookupTable::shared())]
        table: &'t LookupTable,
        /// Shift Katakana to Hiragana before romanizing.
        /// Otherwise Katakana is kept as is.
        #[builder(default = false)]
        katakana: bool,
        /// The max number of spelling variants
        /// [`romanize_variants()`](Self::romanize_variants) can return.
        #[builder(default = DEFAULT_MAX_VARIANTS)]
        max_variants: u64,
    ) -> Self {
        Self {
            table,
            katakana,
            max_variants,
        }
    }

    /// Romanize the text with long vowels in macrons.
    ///
    /// Chars without a romaji, e.g. kanji, are kept as is.
    ///
    /// ## Example
    /// ```
    /// use ib_hebon::HebonRomanizer;
    ///
    /// let romanizer = HebonRomanizer::default();
    /// assert_eq!(romanizer.romanize("たかとお"), "takatō");
    /// assert_eq!(romanizer.romanize("ちゅう"), "chū");
    /// assert_eq!(romanizer.romanize("すずき日本"), "suzuki日本");
    /// ```
    pub fn romanize<S: ?Sized + AsRef<str>>(&self, s: &S) -> String {
        let s = s.as_ref();
        let hiragana: Cow<str> = if self.katakana {
            kana::to_hiragana(s).into()
        } else {
            s.into()
        };
        scan::romanize(self.table, &hiragana)
    }

    /// Romanize the text into all its accepted spellings.
    ///
    /// The first one is the spelling without any long vowel mark. See
    /// [`convert::variant`] for the spellings and [`combo`] for the order.
    ///
    /// Fails with [`Error::TooManyVariants`] if there would be more than
    /// [`max_variants`](HebonRomanizerBuilder::max_variants) spellings.
    ///
    /// ## Example
    /// ```
    /// use ib_hebon::HebonRomanizer;
    ///
    /// let romanizer = HebonRomanizer::default();
    /// assert_eq!(romanizer.romanize_variants("さと")?, ["sato"]);
    /// assert_eq!(romanizer.romanize_variants("ようだ")?, ["yoda", "yohda", "yooda"]);
    /// # Ok::<(), ib_hebon::Error>(())
    /// ```
    pub fn romanize_variants<S: ?Sized + AsRef<str>>(&self, s: &S) -> Result<Vec<String>> {
        variant::expand(&self.romanize(s), self.max_variants)
    }
}

impl Default for HebonRomanizer<'static> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Converter for HebonRomanizer<'_> {
    fn convert(&self, s: &str) -> String {
        self.romanize(s)
    }

    fn convert_to_variants(&self, s: &str) -> Result<Vec<String>> {
        self.romanize_variants(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn romanize() {
        let romanizer = HebonRomanizer::default();
        assert_eq!(romanizer.romanize("さと"), "sato");
        assert_eq!(romanizer.romanize("さとう"), "satō");
        assert_eq!(romanizer.romanize("たかとお"), "takatō");
        assert_eq!(
            romanizer.romanize("かっぱ たった しゅっしゅ ちゃっちゃ やっつ"),
            "kappa tatta shusshu chaccha yattsu"
        );
        assert_eq!(romanizer.romanize(&String::from("きょうと")), "kyōto");
    }

    #[test]
    fn variants() {
        let romanizer = HebonRomanizer::default();
        let cases: &[(&str, &[&str])] = &[
            ("さと", &["sato"]),
            ("おうの", &["ono", "ohno", "oono"]),
            ("おおの", &["ono", "ohno", "oono"]),
            ("おおや", &["oya", "ohya", "ooya"]),
            ("いおう", &["io", "ioh", "ioo"]),
            ("かこう", &["kako", "kakoh", "kakoo"]),
            ("よぼう", &["yobo", "yoboh", "yoboo"]),
            ("ようだ", &["yoda", "yohda", "yooda"]),
            ("どうした", &["doshita", "dohshita", "dooshita"]),
            ("まつのお", &["matsuno", "matsunoh", "matsunoo"]),
            ("おうのちゅう", &["onochu", "ohnochu", "oonochu"]),
            ("たのうえ", &["tanoe", "tanohe", "tanooe"]),
            ("こうえん", &["koen", "kohen", "kooen"]),
            ("みょうえん", &["myoen", "myohen", "myooen"]),
            ("ぎょうと", &["gyoto", "gyohto", "gyooto"]),
            ("きょうと", &["kyoto", "kyohto", "kyooto"]),
            ("しょうと", &["shoto", "shohto", "shooto"]),
            ("じょうと", &["joto", "johto", "jooto"]),
            ("りょうと", &["ryoto", "ryohto", "ryooto"]),
            ("ちょうと", &["choto", "chohto", "chooto"]),
            ("きょう日", &["kyou日", "kyohu日", "kyoou日"]),
            ("ええいち", &["eeichi"]),
            ("うえい", &["uei"]),
            ("ちゅう", &["chu"]),
            ("", &[""]),
        ];
        for &(hiragana, variants) in cases {
            assert_eq!(romanizer.romanize_variants(hiragana).unwrap(), variants, "{hiragana}");
        }
    }

    #[test]
    fn variants_without_macron() {
        let romanizer = HebonRomanizer::default();
        for s in [
            "さと",
            "まつお",
            "やまぐち",
            "かっぱ たった しゅっしゅ ちゃっちゃ やっつ",
            "わにかに　が　すごい　だ",
            "ゆうた",
            "日本",
            "エーイチ",
            "Ελλάς",
        ] {
            assert_eq!(romanizer.romanize_variants(s).unwrap(), [romanizer.romanize(s)], "{s}");
        }
    }

    #[test]
    fn katakana() {
        let romanizer = HebonRomanizer::builder().katakana(true).build();
        assert_eq!(romanizer.romanize("ワニカニ　ガ　スゴイ　ダ"), "wanikani ga sugoi da");
        assert_eq!(romanizer.romanize("サトウ"), "satō");
        assert_eq!(romanizer.romanize("さトウ"), "satō");
        assert_eq!(romanizer.romanize_variants("オウノ").unwrap(), ["ono", "ohno", "oono"]);

        // Kept as is by default
        let romanizer = HebonRomanizer::default();
        assert_eq!(romanizer.romanize("ワニカニ"), "ワニカニ");
        assert_eq!(romanizer.romanize("さトウ"), "saトウ");
    }

    #[test]
    fn pass_through() {
        let romanizer = HebonRomanizer::default();
        for s in ["日本", "エーイチ", "romaji", "Ελλάς", "Mосква"] {
            assert_eq!(romanizer.romanize(s), s);
        }
    }

    #[test]
    fn too_many_variants() {
        let romanizer = HebonRomanizer::builder().max_variants(2).build();
        assert_eq!(romanizer.romanize_variants("さと").unwrap(), ["sato"]);
        assert!(matches!(
            romanizer.romanize_variants("おうの"),
            Err(Error::TooManyVariants { size: 3, limit: 2 })
        ));

        let romanizer = HebonRomanizer::builder().max_variants(3).build();
        assert_eq!(romanizer.romanize_variants("おうの").unwrap().len(), 3);
        assert!(romanizer.romanize_variants("こうよう").is_err());
    }

    #[test]
    fn custom_table() {
        let table = LookupTable::from_pairs([("か", "ka"), ("こう", "kō")]).unwrap();
        let romanizer = HebonRomanizer::builder().table(&table).build();
        assert_eq!(romanizer.romanize("かこう"), "kakō");
        assert_eq!(romanizer.romanize("さと"), "さと");
        assert_eq!(romanizer.romanize_variants("かこう").unwrap(), ["kako", "kakoh", "kakoo"]);
    }

    #[test]
    fn converter() {
        let romanizer = HebonRomanizer::default();
        let converter: &dyn Converter = &romanizer;
        assert_eq!(converter.convert("さとう"), "satō");
        assert_eq!(
            converter.convert_to_variants("さとう").unwrap(),
            ["sato", "satoh", "satoo"]
        );
    }
}
