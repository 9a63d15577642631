#![allow(dead_code)]

/// Render the chars of `text` as `U+XXXX` so assertion failures on presentation forms are
/// readable.
pub fn code_points(text: &str) -> Vec<String> {
    text.chars()
        .map(|ch| format!("U+{:04X}", u32::from(ch)))
        .collect()
}

/// A sample of mixed Farsi, Latin, digits, marks and tatweel.
pub const SAMPLES: &[&str] = &[
    "",
    " ",
    "\u{0633}\u{0644}\u{0627}\u{0645}",
    "\u{0633}\u{0644}\u{0627}\u{0645} 123 \u{062F}\u{0646}\u{06CC}\u{0627}",
    concat!(
        "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} ",
        "\u{0627}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}"
    ),
    "\u{06A9}\u{0640}\u{0640}\u{062A}\u{0627}\u{0628}",
    "version 2.5, \u{067E}\u{0698}\u{0648}\u{0647}\u{0634}",
    "hello, world",
    "\u{0621}\u{0622}\u{0623}\u{0624}\u{0625}\u{0626}\u{0627}",
    "\u{FE91}\u{0627}\u{0628}",
    "\0\u{0628}\0",
];
