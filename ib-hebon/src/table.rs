/*!
Syllable to romaji lookup table.
*/
use std::sync::LazyLock;

use daachorse::{CharwiseDoubleArrayAhoCorasick, CharwiseDoubleArrayAhoCorasickBuilder, MatchKind};
use tracing::debug;

use crate::{Error, Result, data};

static SHARED: LazyLock<LookupTable> = LazyLock::new(LookupTable::passport);

/// An immutable map from kana syllables to their romajis.
///
/// Lookups are exact: a key only matches a syllable that is entirely the key.
/// A syllable without an entry is [`None`], which is distinct from an entry
/// mapping to an empty romaji.
///
/// ## Example
/// ```
/// use ib_hebon::LookupTable;
///
/// let table = LookupTable::shared();
/// assert_eq!(table.get("しゃ"), Some("sha"));
/// assert_eq!(table.get("とう"), Some("tō"));
/// assert_eq!(table.get("さと"), None);
/// ```
#[derive(Clone)]
pub struct LookupTable {
    ac: CharwiseDoubleArrayAhoCorasick<u32>,
    romajis: Vec<String>,
}

impl LookupTable {
    /// Build a table from `(syllable, romaji)` pairs.
    ///
    /// Fails with [`Error::Table`](crate::Error::Table) if a syllable is empty or duplicated.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let (kanas, romajis): (Vec<K>, Vec<String>) =
            pairs.into_iter().map(|(k, v)| (k, v.into())).unzip();
        let ac = CharwiseDoubleArrayAhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(kanas.iter().map(<K as AsRef<str>>::as_ref))
            .map_err(Error::Table)?;
        debug!(entries = romajis.len(), "built lookup table");
        Ok(Self { ac, romajis })
    }

    /// The built-in passport-style table, see [`data::kana`].
    pub fn passport() -> Self {
        Self::from_pairs(
            data::kana::PASSPORT_KANAS
                .iter()
                .zip(data::kana::PASSPORT_ROMAJIS)
                .map(|(&kana, &romaji)| (kana, romaji)),
        )
        .expect("built-in kanas are unique")
    }

    /// The process-wide [`passport()`](Self::passport) table.
    ///
    /// Built once on first access. Can be read from any thread.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    pub fn get(&self, syllable: &str) -> Option<&str> {
        let m = self
            .ac
            .leftmost_find_iter(syllable)
            .next()
            .filter(|m| m.start() == 0 && m.end() == syllable.len())?;
        self.romajis.get(m.value() as usize).map(String::as_str)
    }

    /// Look up a single-char syllable.
    pub fn get_char(&self, c: char) -> Option<&str> {
        let mut buf = [0; 4];
        self.get(c.encode_utf8(&mut buf))
    }

    pub fn contains(&self, syllable: &str) -> bool {
        self.get(syllable).is_some()
    }

    pub fn len(&self) -> usize {
        self.romajis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.romajis.is_empty()
    }
}
