//! The Farsi joining alphabet.
//!
//! Presentation forms come from the Arabic Presentation Forms-A and -B blocks.

use crate::letter::Letter;

macro_rules! letter {
    ($name:ident, $base:literal, $isol:literal, $fina:literal, $init:literal, $medi:literal) => {
        Letter::new(stringify!($name), $base, $isol, $fina, $init, $medi)
    };
}

pub const FARSI_LETTERS: &[Letter] = &[
    letter!(HAMZA, '\u{0621}', '\u{FE80}', '\u{FE80}', '\u{FE80}', '\u{FE80}'),
    letter!(ALEF_WITH_MADDA_ABOVE, '\u{0622}', '\u{FE81}', '\u{FE82}', '\u{FE81}', '\u{FE82}'),
    letter!(ALEF_WITH_HAMZA_ABOVE, '\u{0623}', '\u{FE83}', '\u{FE84}', '\u{FE83}', '\u{FE84}'),
    letter!(WAW_WITH_HAMZA_ABOVE, '\u{0624}', '\u{FE85}', '\u{FE86}', '\u{FE85}', '\u{FE86}'),
    letter!(ALEF_WITH_HAMZA_BELOW, '\u{0625}', '\u{FE87}', '\u{FE88}', '\u{FE87}', '\u{FE88}'),
    letter!(YEH_WITH_HAMZA_ABOVE, '\u{0626}', '\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
    letter!(ALEF, '\u{0627}', '\u{FE8D}', '\u{FE8E}', '\u{FE8D}', '\u{FE8E}'),
    letter!(BEH, '\u{0628}', '\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
    letter!(TEH_MARBUTA, '\u{0629}', '\u{FE93}', '\u{FE94}', '\u{FE93}', '\u{FE94}'),
    letter!(TEH, '\u{062A}', '\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
    letter!(THEH, '\u{062B}', '\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
    letter!(JEEM, '\u{062C}', '\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
    letter!(HAH, '\u{062D}', '\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
    letter!(KHAH, '\u{062E}', '\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
    letter!(DAL, '\u{062F}', '\u{FEA9}', '\u{FEAA}', '\u{FEA9}', '\u{FEAA}'),
    letter!(THAL, '\u{0630}', '\u{FEAB}', '\u{FEAC}', '\u{FEAB}', '\u{FEAC}'),
    letter!(REH, '\u{0631}', '\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}'),
    letter!(ZAIN, '\u{0632}', '\u{FEAF}', '\u{FEB0}', '\u{FEAF}', '\u{FEB0}'),
    letter!(SEEN, '\u{0633}', '\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
    letter!(SHEEN, '\u{0634}', '\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
    letter!(SAD, '\u{0635}', '\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
    letter!(DAD, '\u{0636}', '\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
    letter!(TAH, '\u{0637}', '\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
    letter!(ZAH, '\u{0638}', '\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
    letter!(AIN, '\u{0639}', '\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
    letter!(GHAIN, '\u{063A}', '\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
    letter!(FEH, '\u{0641}', '\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
    letter!(QAF, '\u{0642}', '\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
    letter!(KAF, '\u{0643}', '\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
    letter!(LAM, '\u{0644}', '\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
    letter!(MEEM, '\u{0645}', '\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
    letter!(NOON, '\u{0646}', '\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
    letter!(HEH, '\u{0647}', '\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
    letter!(WAW, '\u{0648}', '\u{FEED}', '\u{FEEE}', '\u{FEED}', '\u{FEEE}'),
    letter!(ALEF_MAKSURA, '\u{0649}', '\u{FEEF}', '\u{FEF0}', '\u{FBE8}', '\u{FBE9}'),
    letter!(YEH, '\u{064A}', '\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
    letter!(PEH, '\u{067E}', '\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'),
    letter!(TCHEH, '\u{0686}', '\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'),
    letter!(JEH, '\u{0698}', '\u{FB8A}', '\u{FB8B}', '\u{FB8A}', '\u{FB8B}'),
    letter!(KEHEH, '\u{06A9}', '\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'),
    letter!(GAF, '\u{06AF}', '\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'),
    letter!(FARSI_YEH, '\u{06CC}', '\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'),
];

/// Base code points of the letters that never connect to the letter after them.
pub const FARSI_NON_CONNECTING_AFTER: &[char] = &[
    '\u{0621}', // Hamza
    '\u{0622}', // Alef with Madda Above
    '\u{0623}', // Alef with Hamza Above
    '\u{0624}', // Waw with Hamza Above
    '\u{0625}', // Alef with Hamza Below
    '\u{0627}', // Alef
    '\u{0629}', // Teh Marbuta
    '\u{062F}', // Dal
    '\u{0630}', // Thal
    '\u{0631}', // Reh
    '\u{0632}', // Zain
    '\u{0648}', // Waw
    '\u{0698}', // Jeh
];
