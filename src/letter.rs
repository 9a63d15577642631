//! Letters of a joining alphabet and their positional forms.

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_joining_type::{get_joining_type, JoiningType};

use crate::tag::{self, DisplayTag};

/// The positional shape a joining letter takes in running text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Form {
    Isolated,
    Initial,
    Medial,
    Final,
}

impl Form {
    /// The OpenType feature that selects this form in a font's `GSUB` table.
    pub fn feature_tag(self) -> u32 {
        match self {
            Form::Isolated => tag::ISOL,
            Form::Initial => tag::INIT,
            Form::Medial => tag::MEDI,
            Form::Final => tag::FINA,
        }
    }
}

/// Formats as the feature tag, e.g. `init`.
impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayTag(self.feature_tag()).fmt(f)
    }
}

/// One member of a joining alphabet.
///
/// `base` is the logical code point stored in text. The remaining fields are the presentation
/// code points substituted for it. A letter without a distinct shape for some position repeats
/// another form there, e.g. right-joining letters use their isolated form as `initial` and their
/// final form as `medial`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Letter {
    pub name: &'static str,
    pub base: char,
    pub isolated: char,
    pub initial: char,
    pub medial: char,
    pub final_: char,
}

impl Letter {
    /// Forms are given in the order the presentation blocks encode them: isolated, final,
    /// initial, medial.
    pub const fn new(
        name: &'static str,
        base: char,
        isolated: char,
        final_: char,
        initial: char,
        medial: char,
    ) -> Letter {
        Letter {
            name,
            base,
            isolated,
            initial,
            medial,
            final_,
        }
    }

    /// Returns the presentation code point for `form`.
    pub fn glyph(&self, form: Form) -> char {
        match form {
            Form::Isolated => self.isolated,
            Form::Initial => self.initial,
            Form::Medial => self.medial,
            Form::Final => self.final_,
        }
    }

    /// All five code points that identify this letter, base first.
    pub fn code_points(&self) -> [char; 5] {
        [
            self.base,
            self.isolated,
            self.initial,
            self.medial,
            self.final_,
        ]
    }

    /// Whether `ch` is this letter in any of its shapes.
    pub fn equals(&self, ch: char) -> bool {
        self.code_points().contains(&ch)
    }

    /// Which presentation form `ch` is, if any.
    ///
    /// Where forms share a code point the first of isolated, final, initial, medial wins.
    pub fn form_of(&self, ch: char) -> Option<Form> {
        [Form::Isolated, Form::Final, Form::Initial, Form::Medial]
            .into_iter()
            .find(|&form| self.glyph(form) == ch)
    }

    /// Unicode joining type of the base code point.
    pub fn joining_type(&self) -> JoiningType {
        get_joining_type(self.base)
    }

    /// Whether Unicode allows this letter to connect to the letter that follows it.
    pub fn joins_following(&self) -> bool {
        matches!(
            self.joining_type(),
            JoiningType::DualJoining | JoiningType::LeftJoining | JoiningType::JoinCausing
        )
    }

    pub(crate) fn is_letter(&self) -> bool {
        matches!(
            get_general_category(self.base),
            GeneralCategory::OtherLetter
                | GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::TitlecaseLetter
        )
    }
}
