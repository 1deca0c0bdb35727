use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Layouts the analyzer ships coordinate tables for. Names parse
/// case-insensitively; anything unrecognised falls back to QWERTY so the
/// analysis pipeline stays total.
#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum KnownLayout {
    #[default]
    Qwerty,
    Azerty,
    Qwertz,
    Dvorak,
    Colemak,
}

impl KnownLayout {
    /// Row strings of the layout, top to bottom. Four-row layouts start with
    /// their digit row; three-row layouts list only the letter block and get
    /// a synthetic digit row during coordinate mapping.
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            Self::Qwerty => &["1234567890", "qwertyuiop", "asdfghjkl;", "zxcvbnm,./"],
            Self::Azerty => &["1234567890", "azertyuiop", "qsdfghjklm", "wxcvbn,;:!"],
            Self::Qwertz => &["1234567890", "qwertzuiop", "asdfghjkl", "yxcvbnm,.-"],
            Self::Dvorak => &["',.pyfgcrl", "aoeuidhtns", ";qjkxbmwvz"],
            Self::Colemak => &["qwfpgjluy;", "arstdhneio", "zxcvbkm,./"],
        }
    }

    /// Parses a layout name, falling back to the default on anything unknown.
    pub fn resolve(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}
