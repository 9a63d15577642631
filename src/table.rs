//! Alphabet tables and the letter classifier.

use std::collections::hash_map::Entry;

use lazy_static::lazy_static;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use unicode_joining_type::JoiningType;

use crate::alphabet::{FARSI_LETTERS, FARSI_NON_CONNECTING_AFTER};
use crate::error::TableError;
use crate::letter::Letter;

lazy_static! {
    static ref FARSI: AlphabetTable =
        match AlphabetTable::new(FARSI_LETTERS, FARSI_NON_CONNECTING_AFTER) {
            Ok(table) => table,
            Err(err) => panic!("invalid Farsi alphabet table: {}", err),
        };
}

/// The built-in Farsi alphabet.
pub fn farsi() -> &'static AlphabetTable {
    &FARSI
}

/// A validated joining alphabet.
///
/// Every code point of every letter (base and the four presentation forms) is indexed to its
/// owning letter, so classification is a single lookup whichever shape the input is in.
#[derive(Clone, Debug)]
pub struct AlphabetTable {
    letters: Vec<Letter>,
    index: FxHashMap<char, usize>,
    // base code points
    non_connecting_after: FxHashSet<char>,
}

impl AlphabetTable {
    /// Build a table from `letters` and the letters that never connect to their follower.
    ///
    /// `non_connecting_after` entries may be any code point of the letter they name. Fails if a
    /// code point belongs to more than one letter, if a non-connecting entry is not in the
    /// alphabet or if a base code point is not a letter.
    pub fn new(
        letters: &[Letter],
        non_connecting_after: &[char],
    ) -> Result<AlphabetTable, TableError> {
        let mut index =
            FxHashMap::with_capacity_and_hasher(letters.len() * 5, Default::default());

        for (i, letter) in letters.iter().enumerate() {
            if !letter.is_letter() {
                return Err(TableError::NotALetter {
                    name: letter.name,
                    ch: letter.base,
                });
            }

            for ch in letter.code_points() {
                match index.entry(ch) {
                    Entry::Vacant(entry) => {
                        entry.insert(i);
                    }
                    Entry::Occupied(entry) if *entry.get() != i => {
                        return Err(TableError::Collision {
                            ch,
                            first: letters[*entry.get()].name,
                            second: letter.name,
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        let mut set = FxHashSet::default();
        for &ch in non_connecting_after {
            match index.get(&ch) {
                Some(&i) => {
                    set.insert(letters[i].base);
                }
                None => return Err(TableError::UnknownNonConnecting(ch)),
            }
        }

        debug!(
            "alphabet table: {} letters, {} code points, {} non-connecting",
            letters.len(),
            index.len(),
            set.len()
        );

        Ok(AlphabetTable {
            letters: letters.to_vec(),
            index,
            non_connecting_after: set,
        })
    }

    /// Build a table whose non-connecting letters are derived from Unicode joining types.
    ///
    /// A letter connects to its follower only if its base is dual-joining, left-joining or
    /// join-causing.
    pub fn with_joining_types(letters: &[Letter]) -> Result<AlphabetTable, TableError> {
        let mut non_connecting = Vec::new();
        for letter in letters {
            if letter.joining_type() == JoiningType::Transparent {
                warn!(
                    "{} (U+{:04X}) is transparent, treating it as non-connecting",
                    letter.name,
                    u32::from(letter.base)
                );
            }
            if !letter.joins_following() {
                non_connecting.push(letter.base);
            }
        }
        AlphabetTable::new(letters, &non_connecting)
    }

    /// Find the letter `ch` is a shape of.
    ///
    /// Digits, Latin, punctuation, diacritics, tatweel and U+0000 are never found.
    pub fn classify(&self, ch: char) -> Option<&Letter> {
        self.index.get(&ch).map(|&i| &self.letters[i])
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// Whether `letter` blocks joining toward the letter after it.
    pub fn is_non_connecting_after(&self, letter: &Letter) -> bool {
        self.non_connecting_after.contains(&letter.base)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Drop every char of `text` that is not in the alphabet, spaces and punctuation included.
    pub fn retain_alphabet(&self, text: &str) -> String {
        text.chars().filter(|&ch| self.contains(ch)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Form;

    const BEH: Letter = Letter::new(
        "BEH", '\u{0628}', '\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}',
    );
    const REH: Letter = Letter::new(
        "REH", '\u{0631}', '\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}',
    );

    #[test]
    fn test_classifier_consistency() {
        let table = farsi();
        for letter in table.letters() {
            for ch in letter.code_points() {
                assert_eq!(table.classify(ch), Some(letter), "{:?}", ch);
            }
        }
    }

    #[test]
    fn test_not_found() {
        let table = farsi();
        for ch in ['\0', 'a', 'Z', '1', '\u{06F1}', ' ', ',', '.', '\u{064E}', '\u{0640}'] {
            assert_eq!(table.classify(ch), None, "{:?}", ch);
        }
    }

    #[test]
    fn test_presentation_form_classifies_to_base() {
        let table = farsi();
        let letter = table.classify('\u{FB94}').unwrap();
        assert_eq!(letter.name, "GAF");
        assert_eq!(letter.base, '\u{06AF}');
        assert_eq!(letter.form_of('\u{FB94}'), Some(Form::Initial));
    }

    #[test]
    fn test_collision() {
        let fake = Letter::new(
            "FAKE", '\u{0631}', '\u{FB00}', '\u{FB01}', '\u{FB02}', '\u{FB03}',
        );
        match AlphabetTable::new(&[REH, BEH, fake], &[]) {
            Err(TableError::Collision { ch, first, second }) => {
                assert_eq!(ch, '\u{0631}');
                assert_eq!(first, "REH");
                assert_eq!(second, "FAKE");
            }
            other => panic!("expected collision, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_non_connecting() {
        assert_eq!(
            AlphabetTable::new(&[BEH], &['\u{0631}']).unwrap_err(),
            TableError::UnknownNonConnecting('\u{0631}')
        );
    }

    #[test]
    fn test_not_a_letter() {
        let digit = Letter::new("ONE", '1', '1', '1', '1', '1');
        assert_eq!(
            AlphabetTable::new(&[BEH, digit], &[]).unwrap_err(),
            TableError::NotALetter {
                name: "ONE",
                ch: '1'
            }
        );
    }

    #[test]
    fn test_non_connecting_by_presentation_form() {
        let table = AlphabetTable::new(&[BEH, REH], &['\u{FEAE}']).unwrap();
        assert!(table.is_non_connecting_after(&REH));
        assert!(!table.is_non_connecting_after(&BEH));
    }

    #[test]
    fn test_farsi_matches_joining_types() {
        let derived = AlphabetTable::with_joining_types(FARSI_LETTERS).unwrap();
        let table = farsi();
        assert_eq!(derived.non_connecting_after, table.non_connecting_after);
        assert_eq!(table.non_connecting_after.len(), FARSI_NON_CONNECTING_AFTER.len());
    }

    #[test]
    fn test_retain_alphabet() {
        let table = AlphabetTable::new(&[BEH, REH], &[]).unwrap();
        assert_eq!(table.retain_alphabet("\u{0628} x\u{0631}\u{062A}"), "\u{0628}\u{0631}");
        assert_eq!(table.retain_alphabet(""), "");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AlphabetTable>();
        assert_eq!(farsi().len(), 42);
    }
}
