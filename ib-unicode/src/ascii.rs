/*!
ASCII checks, for telling romaji apart from Japanese text.
*/

/// Index of the first byte `>= 0x80`, i.e. the first byte not of an ASCII char.
///
/// ```
/// use ib_unicode::ascii::find_non_ascii_byte;
///
/// assert_eq!(find_non_ascii_byte(b"sato"), None);
/// assert_eq!(find_non_ascii_byte("satō".as_bytes()), Some(3));
/// assert_eq!(find_non_ascii_byte("しょう".as_bytes()), Some(0));
/// ```
#[cfg_attr(feature = "perf-ascii", inline)]
pub fn find_non_ascii_byte(b: &[u8]) -> Option<usize> {
    #[cfg(not(feature = "perf-ascii"))]
    return b.iter().position(|&b| b > 0x7F);
    #[cfg(feature = "perf-ascii")]
    // SIMD on x86_64
    bstr::ByteSlice::find_non_ascii_byte(b)
}

/// Checks if a string is non-empty and consists of ASCII characters only.
///
/// Unlike [`str::is_ascii()`], an empty string is not considered ASCII,
/// since there is no script to speak of.
///
/// ```
/// use ib_unicode::ascii::is_ascii_text;
///
/// assert!(is_ascii_text("Roma ji!"));
/// assert!(!is_ascii_text("Romăji"));
/// assert!(!is_ascii_text(""));
/// ```
#[inline]
pub fn is_ascii_text(s: &str) -> bool {
    !s.is_empty() && find_non_ascii_byte(s.as_bytes()).is_none()
}
