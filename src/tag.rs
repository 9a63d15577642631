//! OpenType tags for the positional forms.

use std::fmt;

/// Generate a 4-byte OpenType tag from byte string
///
/// Example:
///
/// ```
/// # use farsi_shaping::tag;
/// assert_eq!(tag::INIT, 0x696E6974);
/// ```
macro_rules! tag {
    ($w:expr) => {
        tag(*$w)
    };
}

const fn tag(chars: [u8; 4]) -> u32 {
    u32::from_be_bytes(chars)
}

/// Formats a tag as its four ASCII characters, or as hex if any byte is not printable.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DisplayTag(pub u32);

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_be_bytes();
        match std::str::from_utf8(&bytes) {
            Ok(s) if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') => f.write_str(s),
            _ => write!(f, "0x{:08x}", self.0),
        }
    }
}

pub const FINA: u32 = tag!(b"fina");
pub const INIT: u32 = tag!(b"init");
pub const ISOL: u32 = tag!(b"isol");
pub const MEDI: u32 = tag!(b"medi");
