/*!
Shifting between Hiragana and Katakana.

The two scripts share a 1:1 positional mapping: a Katakana code point is the
Hiragana one plus [`KANA_OFFSET`]. Only characters whose counterpart is also a
kana are shifted (ぁ U+3041 ..= ゖ U+3096 and ァ U+30A1 ..= ヶ U+30F6). The rest,
including the prolonged sound mark `ー`, `ゝゞ`/`ヽヾ` and non-Japanese text,
is kept as is.
*/

pub const KANA_OFFSET: u32 = 0x60;

const HIRAGANA_SHIFTABLE_START: u32 = 0x3041;
const HIRAGANA_SHIFTABLE_END: u32 = 0x3096;

#[inline]
fn is_shiftable_hiragana(cp: u32) -> bool {
    (HIRAGANA_SHIFTABLE_START..=HIRAGANA_SHIFTABLE_END).contains(&cp)
}

/// ```
/// use ib_unicode::kana::hiragana_to_katakana;
///
/// assert_eq!(hiragana_to_katakana('が'), 'ガ');
/// assert_eq!(hiragana_to_katakana('日'), '日');
/// ```
#[inline]
pub fn hiragana_to_katakana(c: char) -> char {
    let cp = c as u32;
    if is_shiftable_hiragana(cp) {
        char::from_u32(cp + KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

#[inline]
pub fn katakana_to_hiragana(c: char) -> char {
    let cp = c as u32;
    match cp.checked_sub(KANA_OFFSET) {
        Some(h) if is_shiftable_hiragana(h) => char::from_u32(h).unwrap_or(c),
        _ => c,
    }
}

/// Converts Hiragana in the string to Katakana, keeping everything else.
///
/// ```
/// use ib_unicode::kana::to_katakana;
///
/// assert_eq!(to_katakana("らーめん123"), "ラーメン123");
/// ```
pub fn to_katakana(s: &str) -> String {
    s.chars().map(hiragana_to_katakana).collect()
}

/// Converts Katakana in the string to Hiragana, keeping everything else.
///
/// ```
/// use ib_unicode::kana::to_hiragana;
///
/// assert_eq!(to_hiragana("ワニカニ　が"), "わにかに　が");
/// ```
pub fn to_hiragana(s: &str) -> String {
    s.chars().map(katakana_to_hiragana).collect()
}
