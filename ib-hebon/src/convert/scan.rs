/*!
The Hiragana scanner producing the canonical romanization.

The scanner tries a chunk of 2 chars at the cursor first, then 1 char. For
each chunk, the first rule that yields a romaji wins:
1. A `っ` that is not the last char doubles the first letter of the next romaji.
2. A chunk containing `う` without an entry of its own, where the first `う`
   of the input is neither its first nor last char, is a contraction:
   - If the romaji so far ends with `o`, the *first* `o` of the romaji so far
     gets a macron and the chunk is romanized as its second char. If the
     second char has no romaji, the macron stays and the scan falls back to
     the next narrower chunk.
   - Otherwise the chunk is romanized as its first char.
3. The entry of the chunk.

A char without any romaji is kept as is.

After the scan, if the romaji ends with `uu`, every `uu` in it becomes `ū`.

## Known limitations
The macron of a contraction goes to the first `o` of the romaji so far, not
the nearest one, e.g. `ともきょうと` → `tōmokyoto`. The two coincide for
single names with one long vowel.
*/
use tracing::{debug_span, trace};

use crate::LookupTable;

pub const SOKUON: char = 'っ';
pub const CONTRACTED_U: char = 'う';
pub const MACRON_O: char = 'ō';
pub const MACRON_U_STR: &str = "ū";

const MAX_CHUNK: usize = crate::data::kana::KANA_MAX_CHARS;

enum Rule<'t> {
    Sokuon,
    /// Macron without a romaji, e.g. `う日` after `kyo`.
    Backfill,
    Contraction(&'t str),
    Romaji(&'t str),
}

struct Scan<'t, 'h> {
    table: &'t LookupTable,
    hiragana: &'h [char],
    /// Index of the first `う`, if it is a mid-word one.
    mid_u: Option<usize>,
    cursor: usize,
    geminate: bool,
    /// Not append-only: contractions rewrite an earlier `o`.
    romaji: Vec<char>,
}

impl<'t, 'h> Scan<'t, 'h> {
    fn new(table: &'t LookupTable, hiragana: &'h [char]) -> Self {
        let mid_u = hiragana
            .iter()
            .position(|&c| c == CONTRACTED_U)
            .filter(|&i| i != 0 && i != hiragana.len() - 1);
        Self {
            table,
            hiragana,
            mid_u,
            cursor: 0,
            geminate: false,
            romaji: Vec::with_capacity(hiragana.len() * 3),
        }
    }

    fn rule(&self, chunk: &[char]) -> Option<Rule<'t>> {
        if chunk == [SOKUON] && self.cursor < self.hiragana.len() - 1 {
            return Some(Rule::Sokuon);
        }

        let mut buf = [0; 4 * MAX_CHUNK];
        let mut len = 0;
        for c in chunk {
            len += c.encode_utf8(&mut buf[len..]).len();
        }
        // Only encoded chars were written
        let syllable = std::str::from_utf8(&buf[..len]).ok()?;
        let romaji = self.table.get(syllable);

        if romaji.is_none() && self.mid_u.is_some() && chunk.contains(&CONTRACTED_U) {
            return if self.romaji.last() == Some(&'o') {
                Some(
                    chunk
                        .get(1)
                        .and_then(|&c| self.table.get_char(c))
                        .map_or(Rule::Backfill, Rule::Contraction),
                )
            } else {
                self.table.get_char(chunk[0]).map(Rule::Romaji)
            };
        }

        romaji.map(Rule::Romaji)
    }

    fn push(&mut self, romaji: &str) {
        if self.geminate {
            if let Some(c) = romaji.chars().next() {
                trace!(cursor = self.cursor, %c, "geminate");
                self.romaji.push(c);
            }
            self.geminate = false;
        }
        self.romaji.extend(romaji.chars());
    }

    fn backfill_macron(&mut self) {
        if let Some(i) = self.romaji.iter().position(|&c| c == 'o') {
            trace!(cursor = self.cursor, at = i, "backfill macron");
            self.romaji[i] = MACRON_O;
        }
    }

    fn step(&mut self) {
        let hiragana = self.hiragana;
        let rest = hiragana.len() - self.cursor;
        for width in (1..=MAX_CHUNK.min(rest)).rev() {
            let chunk = &hiragana[self.cursor..self.cursor + width];
            let Some(rule) = self.rule(chunk) else {
                continue;
            };
            match rule {
                Rule::Sokuon => self.geminate = true,
                Rule::Backfill => {
                    self.backfill_macron();
                    continue;
                }
                Rule::Contraction(romaji) => {
                    self.backfill_macron();
                    self.push(romaji);
                }
                Rule::Romaji(romaji) => self.push(romaji),
            }
            self.cursor += width;
            return;
        }

        self.romaji.push(hiragana[self.cursor]);
        self.cursor += 1;
    }

    fn finish(self) -> String {
        let romaji: String = self.romaji.into_iter().collect();
        if romaji.ends_with("uu") {
            romaji.replace("uu", MACRON_U_STR)
        } else {
            romaji
        }
    }
}

/// Romanize Hiragana text with long vowels in macrons.
///
/// Convert Katakana to Hiragana first, or it will be kept as is.
///
/// ```
/// use ib_hebon::{LookupTable, convert::scan::romanize};
///
/// let table = LookupTable::shared();
/// assert_eq!(romanize(table, "さとう"), "satō");
/// assert_eq!(romanize(table, "きょうと"), "kyōto");
/// assert_eq!(romanize(table, "日本"), "日本");
/// ```
pub fn romanize(table: &LookupTable, hiragana: &str) -> String {
    let _span = debug_span!("romanize", len = hiragana.len()).entered();

    let hiragana: Vec<char> = hiragana.chars().collect();
    let mut scan = Scan::new(table, &hiragana);
    while scan.cursor < hiragana.len() {
        scan.step();
    }
    scan.finish()
}
