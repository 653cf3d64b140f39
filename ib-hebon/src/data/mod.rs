#[rustfmt::skip]
pub mod kana;
