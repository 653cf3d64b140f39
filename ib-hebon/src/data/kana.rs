/*!
Passport-style (ヘボン式) romajis of Hiragana syllables.

[`PASSPORT_KANAS`] and [`PASSPORT_ROMAJIS`] are parallel: the romaji of
`PASSPORT_KANAS[i]` is `PASSPORT_ROMAJIS[i]`. Keep each row of the two arrays
the same length.

Long vowels of the o-row (`おう`, `とお`...) and `ええ` are listed as
syllables of their own and romanized with a macron.
*/

/// Max number of chars in a kana.
pub const KANA_MAX_CHARS: usize = 2;

pub const PASSPORT_KANAS: &[&str] = &[
    "あ", "い", "う", "え", "お",
    "か", "き", "く", "け", "こ",
    "が", "ぎ", "ぐ", "げ", "ご",
    "さ", "し", "す", "せ", "そ",
    "ざ", "じ", "ず", "ぜ", "ぞ",
    "た", "ち", "つ", "て", "と",
    "だ", "ぢ", "づ", "で", "ど",
    "な", "に", "ぬ", "ね", "の",
    "は", "ひ", "ふ", "へ", "ほ",
    "ば", "び", "ぶ", "べ", "ぼ",
    "ぱ", "ぴ", "ぷ", "ぺ", "ぽ",
    "ま", "み", "む", "め", "も",
    "や", "ゆ", "よ",
    "ら", "り", "る", "れ", "ろ",
    "わ", "ゐ", "ゑ", "を",
    "ん", "ゔ",
    // Small kanas
    "ぁ", "ぃ", "ぅ", "ぇ", "ぉ",
    "ゃ", "ゅ", "ょ", "っ", "ゎ", "ゕ", "ゖ",
    // Yōon
    "きゃ", "きゅ", "きょ",
    "ぎゃ", "ぎゅ", "ぎょ",
    "しゃ", "しゅ", "しょ",
    "じゃ", "じゅ", "じょ",
    "ちゃ", "ちゅ", "ちょ",
    "ぢゃ", "ぢゅ", "ぢょ",
    "にゃ", "にゅ", "にょ",
    "ひゃ", "ひゅ", "ひょ",
    "びゃ", "びゅ", "びょ",
    "ぴゃ", "ぴゅ", "ぴょ",
    "みゃ", "みゅ", "みょ",
    "りゃ", "りゅ", "りょ",
    // Long vowels
    "おう", "こう", "ごう", "そう", "ぞう", "とう", "どう",
    "のう", "ほう", "ぼう", "ぽう", "もう", "よう", "ろう",
    "おお", "こお", "ごお", "そお", "ぞお", "とお", "どお",
    "のお", "ほお", "ぼお", "ぽお", "もお", "よお", "ろお",
    "ええ",
    // Punctuation
    "\u{3000}", "、", "。",
];

pub const PASSPORT_ROMAJIS: &[&str] = &[
    "a", "i", "u", "e", "o",
    "ka", "ki", "ku", "ke", "ko",
    "ga", "gi", "gu", "ge", "go",
    "sa", "shi", "su", "se", "so",
    "za", "ji", "zu", "ze", "zo",
    "ta", "chi", "tsu", "te", "to",
    "da", "ji", "zu", "de", "do",
    "na", "ni", "nu", "ne", "no",
    "ha", "hi", "fu", "he", "ho",
    "ba", "bi", "bu", "be", "bo",
    "pa", "pi", "pu", "pe", "po",
    "ma", "mi", "mu", "me", "mo",
    "ya", "yu", "yo",
    "ra", "ri", "ru", "re", "ro",
    "wa", "i", "e", "o",
    "n", "vu",
    // Small kanas
    "a", "i", "u", "e", "o",
    "ya", "yu", "yo", "tsu", "wa", "ka", "ke",
    // Yōon
    "kya", "kyu", "kyo",
    "gya", "gyu", "gyo",
    "sha", "shu", "sho",
    "ja", "ju", "jo",
    "cha", "chu", "cho",
    "ja", "ju", "jo",
    "nya", "nyu", "nyo",
    "hya", "hyu", "hyo",
    "bya", "byu", "byo",
    "pya", "pyu", "pyo",
    "mya", "myu", "myo",
    "rya", "ryu", "ryo",
    // Long vowels
    "ō", "kō", "gō", "sō", "zō", "tō", "dō",
    "nō", "hō", "bō", "pō", "mō", "yō", "rō",
    "ō", "kō", "gō", "sō", "zō", "tō", "dō",
    "nō", "hō", "bō", "pō", "mō", "yō", "rō",
    "ē",
    // Punctuation
    " ", ",", ".",
];
