//! Unicode utils.
/*!
## Features
- Japanese [script](script) classification: Hiragana, Katakana, Kanji and Japanese punctuation
- [Kana](kana) shifting between Hiragana and Katakana
- Fast [ASCII](ascii) checks

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod ascii;
pub mod kana;
pub mod script;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

impl Sealed for char {}
impl Sealed for str {}
