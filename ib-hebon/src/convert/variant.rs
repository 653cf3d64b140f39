/*!
Spelling variants of a canonical romanization.

The macrons of [`romanize()`](super::scan::romanize) are not used in the
Japanese passport. Each is spelled in one of the officially accepted ways:

| Macron | Spellings          |
| ------ | ------------------ |
| `ō`    | `o`, `oh`, `oo`    |
| `ū`    | `u`                |
| `ē`    | `ee`               |

E.g. `ōno` (おうの・おおの) can be spelled as `ono`, `ohno` or `oono`.
*/
use tracing::debug;

use crate::{Error, Result, combo::ComboBuilder};

/// Accepted spellings of a macron vowel, or `None` if `c` is not one.
pub fn macron_spellings(c: char) -> Option<&'static [&'static str]> {
    match c {
        'ō' => Some(&["o", "oh", "oo"]),
        'ū' => Some(&["u"]),
        'ē' => Some(&["ee"]),
        _ => None,
    }
}

/// Expand a romanization into all its spellings, in the order of
/// [`ComboBuilder::build()`].
///
/// Fails with [`Error::TooManyVariants`] if there would be more than
/// `max_variants` spellings. The spellings are not deduplicated.
///
/// ```
/// use ib_hebon::convert::variant::expand;
///
/// assert_eq!(expand("ōno", 16).unwrap(), ["ono", "ohno", "oono"]);
/// assert_eq!(expand("sato", 16).unwrap(), ["sato"]);
/// ```
pub fn expand(romaji: &str, max_variants: u64) -> Result<Vec<String>> {
    let mut builder = ComboBuilder::new();
    for (i, c) in romaji.char_indices() {
        builder.new_group()?;
        match macron_spellings(c) {
            Some(spellings) => builder.variants(spellings.iter().copied()),
            None => builder.variant(&romaji[i..i + c.len_utf8()]),
        };
    }
    if builder.is_empty() {
        return Ok(vec![String::new()]);
    }

    let size = builder.product_size()?;
    debug!(size, "expand spelling variants");
    if size > max_variants {
        return Err(Error::TooManyVariants {
            size,
            limit: max_variants,
        });
    }

    Ok(builder
        .build()?
        .into_iter()
        .map(|spellings| spellings.concat())
        .collect())
}
