#![warn(rust_2018_idioms)]

//! Contextual glyph selection for Perso-Arabic text.
//!
//! Farsi letters take one of four shapes (isolated, initial, medial, final) depending on whether
//! their neighbours are letters of the joining alphabet. [to_glyph] replaces every letter of a
//! logical string with the matching Unicode presentation form, one char out per char in, so the
//! text can be drawn by renderers that do no shaping of their own.
//!
//! ```
//! use farsi_shaping::{reverse_numbers_and_english_alphabet, to_glyph};
//!
//! // سلام
//! assert_eq!(
//!     to_glyph("\u{0633}\u{0644}\u{0627}\u{0645}"),
//!     "\u{FEB3}\u{FEE0}\u{FE8E}\u{FEE1}"
//! );
//! assert_eq!(reverse_numbers_and_english_alphabet("v1.2"), "2.1v");
//! ```

/// The built-in Farsi letter table.
pub mod alphabet;
pub mod error;
pub mod letter;
pub mod shaper;
pub mod shaping;
pub mod table;
pub mod tag;
pub mod text;
/// Character classes used by the text utilities.
pub mod unicode;

pub use crate::error::TableError;
pub use crate::letter::{Form, Letter};
pub use crate::shaper::{Shaper, TextOptions};
pub use crate::shaping::{
    select_form, select_glyph, shape_chars, to_glyph, to_glyph_with, to_logical,
};
pub use crate::table::{farsi, AlphabetTable};
pub use crate::text::{
    foreign_runs, remove_all_non_farsi_chars, remove_tashkeel, remove_tatweel, reverse,
    reverse_foreign_runs, reverse_numbers_and_english_alphabet, smart_length, RunReplacement,
};
