/// Arabic vowel marks (tashkeel).
pub const TASHKEEL: [char; 8] = [
    '\u{064B}', // Fathatan
    '\u{064C}', // Dammatan
    '\u{064D}', // Kasratan
    '\u{064E}', // Fatha
    '\u{064F}', // Damma
    '\u{0650}', // Kasra
    '\u{0651}', // Shadda
    '\u{0652}', // Sukun
];

/// ARABIC TATWEEL, the elongation character.
pub const TATWEEL: char = '\u{0640}';

pub fn is_tashkeel(ch: char) -> bool {
    TASHKEEL.contains(&ch)
}

pub fn is_tatweel(ch: char) -> bool {
    ch == TATWEEL
}

/// Latin letters, ASCII digits and the `,`/`.` separators that appear inside numbers.
pub fn is_foreign_run_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ',' || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_general_category::{get_general_category, GeneralCategory};

    #[test]
    fn test_tashkeel_are_nonspacing_marks() {
        for ch in TASHKEEL {
            assert!(is_tashkeel(ch));
            assert_eq!(get_general_category(ch), GeneralCategory::NonspacingMark);
        }
        assert!(!is_tashkeel('\u{0653}'));
        assert!(!is_tashkeel(TATWEEL));
    }

    #[test]
    fn test_tashkeel_set_is_exact() {
        for ch in ('\u{0600}'..='\u{06FF}').filter(|&ch| is_tashkeel(ch)) {
            assert!(TASHKEEL.contains(&ch), "{:?}", ch);
        }
        assert_eq!(
            ('\u{0600}'..='\u{06FF}').filter(|&ch| is_tashkeel(ch)).count(),
            TASHKEEL.len()
        );
        assert!(!is_tashkeel('\u{064A}'));
    }

    #[test]
    fn test_foreign_run_char() {
        for ch in ['a', 'Z', '0', '9', ',', '.'] {
            assert!(is_foreign_run_char(ch));
        }
        for ch in [' ', '-', '\u{06F1}', '\u{0661}', '\u{0628}', 'é'] {
            assert!(!is_foreign_run_char(ch));
        }
    }
}
