//! Text utilities that operate on the same alphabet data as the shaper.
//!
//! All functions iterate by `char`, never by byte.

use std::ops::Range;

use itertools::Itertools;

use crate::table;
use crate::unicode::{is_foreign_run_char, is_tashkeel, is_tatweel};

/// Reverse `text` char-wise.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Number of chars in `text`, not counting tashkeel.
pub fn smart_length(text: &str) -> usize {
    text.chars().filter(|&ch| !is_tashkeel(ch)).count()
}

pub fn remove_tashkeel(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().filter(|&ch| !is_tashkeel(ch)));
    out
}

pub fn remove_tatweel(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().filter(|&ch| !is_tatweel(ch)));
    out
}

/// Keep only the chars of `text` that belong to the Farsi alphabet.
///
/// Spaces and punctuation are dropped too, so this is not suitable for general text.
pub fn remove_all_non_farsi_chars(text: &str) -> String {
    table::farsi().retain_alphabet(text)
}

/// How [reverse_foreign_runs] writes the reversed runs back.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RunReplacement {
    /// Reverse each run where it stands.
    #[default]
    ByPosition,
    /// Replace every literal occurrence of each distinct run text, in first-occurrence order.
    ///
    /// Identical runs always get identical output, and a replacement can rewrite text that a
    /// later run would have matched.
    ByMatch,
}

/// Iterator over the byte ranges of the maximal `[A-Za-z0-9,.]` runs in a string.
#[derive(Clone, Debug)]
pub struct ForeignRuns<'a> {
    text: &'a str,
    pos: usize,
}

pub fn foreign_runs(text: &str) -> ForeignRuns<'_> {
    ForeignRuns { text, pos: 0 }
}

impl<'a> Iterator for ForeignRuns<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos + self.text[self.pos..].find(is_foreign_run_char)?;
        let end = self.text[start..]
            .find(|ch: char| !is_foreign_run_char(ch))
            .map_or(self.text.len(), |len| start + len);
        self.pos = end;
        Some(start..end)
    }
}

/// Reverse every run of Latin letters, digits, `,` and `.` in place, leaving the rest of `text`
/// untouched.
pub fn reverse_foreign_runs(text: &str, replacement: RunReplacement) -> String {
    match replacement {
        RunReplacement::ByPosition => {
            let mut out = String::with_capacity(text.len());
            let mut last = 0;
            for run in foreign_runs(text) {
                out.push_str(&text[last..run.start]);
                out.extend(text[run.start..run.end].chars().rev());
                last = run.end;
            }
            out.push_str(&text[last..]);
            out
        }
        RunReplacement::ByMatch => {
            let mut out = text.to_owned();
            for run in foreign_runs(text).map(|run| &text[run]).unique() {
                out = out.replace(run, &reverse(run));
            }
            out
        }
    }
}

/// Reverse each run of `[A-Za-z0-9,.]` in place.
///
/// Used after reversing a whole line for a left-to-right renderer, so embedded numbers and Latin
/// words read correctly again.
pub fn reverse_numbers_and_english_alphabet(text: &str) -> String {
    reverse_foreign_runs(text, RunReplacement::ByPosition)
}
