//! A configurable pipeline around glyph selection.

use bitflags::bitflags;
use log::trace;

use crate::shaping::shape_chars;
use crate::table::{self, AlphabetTable};
use crate::text::{reverse_foreign_runs, RunReplacement};
use crate::unicode::{is_tashkeel, is_tatweel};

bitflags! {
    /// Transforms a [Shaper] applies before and after glyph selection.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextOptions: u8 {
        /// Remove tashkeel first. Marks are not letters, so left in place they break joins.
        const STRIP_TASHKEEL = 1 << 0;
        /// Remove tatweel first.
        const STRIP_TATWEEL  = 1 << 1;
        /// Drop every char that is not in the alphabet, spaces included.
        const ALPHABET_ONLY  = 1 << 2;
        /// Reverse the shaped text for a left-to-right renderer, then restore the reading order
        /// of Latin and numeric runs.
        const VISUAL_ORDER   = 1 << 3;
    }
}

/// Shapes text with a fixed table and set of options.
///
/// ```
/// use farsi_shaping::{Shaper, TextOptions};
///
/// let shaper = Shaper::new().options(TextOptions::STRIP_TASHKEEL);
/// assert_eq!(shaper.shape("\u{0628}\u{064E}\u{0627}"), "\u{FE91}\u{FE8E}");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Shaper<'a> {
    table: &'a AlphabetTable,
    options: TextOptions,
    run_replacement: RunReplacement,
}

impl Shaper<'static> {
    /// A shaper for the built-in Farsi alphabet with no extra transforms.
    pub fn new() -> Shaper<'static> {
        Shaper::with_table(table::farsi())
    }
}

impl Default for Shaper<'static> {
    fn default() -> Self {
        Shaper::new()
    }
}

impl<'a> Shaper<'a> {
    pub fn with_table(table: &'a AlphabetTable) -> Shaper<'a> {
        Shaper {
            table,
            options: TextOptions::empty(),
            run_replacement: RunReplacement::default(),
        }
    }

    pub fn options(mut self, options: TextOptions) -> Self {
        self.options = options;
        self
    }

    /// How Latin and numeric runs are restored under [TextOptions::VISUAL_ORDER].
    pub fn run_replacement(mut self, run_replacement: RunReplacement) -> Self {
        self.run_replacement = run_replacement;
        self
    }

    pub fn table(&self) -> &'a AlphabetTable {
        self.table
    }

    pub fn shape(&self, text: &str) -> String {
        trace!("shaping {} bytes, options {:?}", text.len(), self.options);

        let chars = text.chars().filter(|&ch| self.keep(ch)).collect::<Vec<_>>();
        let shaped = shape_chars(self.table, &chars);

        if self.options.contains(TextOptions::VISUAL_ORDER) {
            let reversed = shaped.into_iter().rev().collect::<String>();
            reverse_foreign_runs(&reversed, self.run_replacement)
        } else {
            shaped.into_iter().collect()
        }
    }

    fn keep(&self, ch: char) -> bool {
        let options = self.options;
        !(options.contains(TextOptions::STRIP_TASHKEEL) && is_tashkeel(ch)
            || options.contains(TextOptions::STRIP_TATWEEL) && is_tatweel(ch)
            || options.contains(TextOptions::ALPHABET_ONLY) && !self.table.contains(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::to_glyph;

    // بَا
    const BEH_FATHA_ALEF: &str = "\u{0628}\u{064E}\u{0627}";

    #[test]
    fn test_default_matches_to_glyph() {
        let text = "\u{0633}\u{0644}\u{0627}\u{0645} 12 \u{0640}\u{064E}";
        assert_eq!(Shaper::new().shape(text), to_glyph(text));
        assert_eq!(Shaper::default().shape(""), "");
    }

    #[test]
    fn test_tashkeel_breaks_joining() {
        assert_eq!(
            Shaper::new().shape(BEH_FATHA_ALEF),
            "\u{FE8F}\u{064E}\u{FE8D}"
        );
        assert_eq!(
            Shaper::new()
                .options(TextOptions::STRIP_TASHKEEL)
                .shape(BEH_FATHA_ALEF),
            "\u{FE91}\u{FE8E}"
        );
    }

    #[test]
    fn test_strip_tatweel() {
        // بـا
        let text = "\u{0628}\u{0640}\u{0627}";
        assert_eq!(Shaper::new().shape(text), "\u{FE8F}\u{0640}\u{FE8D}");
        assert_eq!(
            Shaper::new()
                .options(TextOptions::STRIP_TATWEEL)
                .shape(text),
            "\u{FE91}\u{FE8E}"
        );
    }

    #[test]
    fn test_alphabet_only() {
        // ب ا joins once the space is gone
        let text = "\u{0628} \u{0627}!";
        let shaper = Shaper::new().options(TextOptions::ALPHABET_ONLY);
        assert_eq!(shaper.shape(text), "\u{FE91}\u{FE8E}");
    }

    #[test]
    fn test_visual_order() {
        // سلام 123
        let text = "\u{0633}\u{0644}\u{0627}\u{0645} 123";
        let shaper = Shaper::new().options(TextOptions::VISUAL_ORDER);
        assert_eq!(shaper.shape(text), "123 \u{FEE1}\u{FE8E}\u{FEE0}\u{FEB3}");
    }

    #[test]
    fn test_visual_order_by_match() {
        let text = "12 \u{0628} 21";
        let by_position = Shaper::new().options(TextOptions::VISUAL_ORDER);
        let by_match = by_position.run_replacement(RunReplacement::ByMatch);
        assert_eq!(by_position.shape(text), "21 \u{FE8F} 12");
        assert_eq!(by_match.shape(text), "12 \u{FE8F} 12");
    }

    #[test]
    fn test_custom_table() {
        use crate::letter::Letter;

        let reh = Letter::new(
            "REH", '\u{0631}', '\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}',
        );
        let table = AlphabetTable::with_joining_types(&[reh]).unwrap();
        let shaper = Shaper::with_table(&table);
        assert!(std::ptr::eq(shaper.table(), &table));
        assert_eq!(shaper.shape("\u{0631}\u{0631}"), "\u{FEAD}\u{FEAD}");
    }
}
