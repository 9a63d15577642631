//! Contextual glyph selection.
//!
//! Each character is shaped from its immediate neighbours only. A neighbour joins if it is any
//! shape of an alphabet letter; everything else (spaces, digits, diacritics, tatweel) breaks the
//! connection and is passed through unchanged.

use crate::letter::Form;
use crate::table::{self, AlphabetTable};

/// Choose the positional form for a letter between `prev` and `next`.
///
/// `None` marks the start or end of the text.
pub fn select_form(table: &AlphabetTable, prev: Option<char>, next: Option<char>) -> Form {
    let prev = prev.and_then(|ch| table.classify(ch));
    let next_joins = next.is_some_and(|ch| table.contains(ch));

    match (prev, next_joins) {
        // joining from the right is blocked, so this letter starts a new connection
        (Some(prev), true) if table.is_non_connecting_after(prev) => Form::Initial,
        (Some(_), true) => Form::Medial,
        (None, true) => Form::Initial,
        (Some(prev), false) if table.is_non_connecting_after(prev) => Form::Isolated,
        (Some(_), false) => Form::Final,
        (None, false) => Form::Isolated,
    }
}

/// Presentation code point for `cur`, or `cur` itself if it is not in the alphabet.
pub fn select_glyph(
    table: &AlphabetTable,
    prev: Option<char>,
    cur: char,
    next: Option<char>,
) -> char {
    match table.classify(cur) {
        Some(letter) => letter.glyph(select_form(table, prev, next)),
        None => cur,
    }
}

/// Shape every character of `text`. The output has one char per input char.
pub fn shape_chars(table: &AlphabetTable, text: &[char]) -> Vec<char> {
    text.iter()
        .enumerate()
        .map(|(i, &cur)| {
            let prev = i.checked_sub(1).map(|j| text[j]);
            let next = text.get(i + 1).copied();
            select_glyph(table, prev, cur, next)
        })
        .collect()
}

/// Replace each character of `text` with its positional glyph in the Farsi alphabet.
pub fn to_glyph(text: &str) -> String {
    to_glyph_with(table::farsi(), text)
}

/// [to_glyph] over a caller-supplied alphabet.
pub fn to_glyph_with(table: &AlphabetTable, text: &str) -> String {
    let chars = text.chars().collect::<Vec<_>>();
    shape_chars(table, &chars).into_iter().collect()
}

/// Map presentation forms back to their logical code points.
pub fn to_logical(table: &AlphabetTable, text: &str) -> String {
    text.chars()
        .map(|ch| table.classify(ch).map_or(ch, |letter| letter.base))
        .collect()
}
