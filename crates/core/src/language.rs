//! Closed set of audio languages a release can be tagged with.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Language {
    Original = -2,
    #[default]
    Unknown = 0,
    English = 1,
    French = 2,
    Spanish = 3,
    German = 4,
    Italian = 5,
    Danish = 6,
    Dutch = 7,
    Japanese = 8,
    Icelandic = 9,
    Chinese = 10,
    Russian = 11,
    Polish = 12,
    Vietnamese = 13,
    Swedish = 14,
    Norwegian = 15,
    Finnish = 16,
    Turkish = 17,
    Portuguese = 18,
    Flemish = 19,
    Greek = 20,
    Korean = 21,
    Hungarian = 22,
    Hebrew = 23,
    Lithuanian = 24,
    Czech = 25,
    Arabic = 26,
    Hindi = 27,
    Bulgarian = 28,
    Malayalam = 29,
    Ukrainian = 30,
    Slovak = 31,
    Thai = 32,
    PortugueseBrazil = 33,
    SpanishLatino = 34,
    Romanian = 35,
    Latvian = 36,
    Persian = 37,
    Catalan = 38,
    Croatian = 39,
    Serbian = 40,
    Bosnian = 41,
    Estonian = 42,
    Tamil = 43,
    Indonesian = 44,
    Macedonian = 45,
    Slovenian = 46,
    Azerbaijani = 47,
    Uzbek = 48,
    Malay = 49,
    Urdu = 50,
    Romansh = 51,
}

const ALL: [(Language, &str); 53] = [
    (Language::Original, "Original"),
    (Language::Unknown, "Unknown"),
    (Language::English, "English"),
    (Language::French, "French"),
    (Language::Spanish, "Spanish"),
    (Language::German, "German"),
    (Language::Italian, "Italian"),
    (Language::Danish, "Danish"),
    (Language::Dutch, "Dutch"),
    (Language::Japanese, "Japanese"),
    (Language::Icelandic, "Icelandic"),
    (Language::Chinese, "Chinese"),
    (Language::Russian, "Russian"),
    (Language::Polish, "Polish"),
    (Language::Vietnamese, "Vietnamese"),
    (Language::Swedish, "Swedish"),
    (Language::Norwegian, "Norwegian"),
    (Language::Finnish, "Finnish"),
    (Language::Turkish, "Turkish"),
    (Language::Portuguese, "Portuguese"),
    (Language::Flemish, "Flemish"),
    (Language::Greek, "Greek"),
    (Language::Korean, "Korean"),
    (Language::Hungarian, "Hungarian"),
    (Language::Hebrew, "Hebrew"),
    (Language::Lithuanian, "Lithuanian"),
    (Language::Czech, "Czech"),
    (Language::Arabic, "Arabic"),
    (Language::Hindi, "Hindi"),
    (Language::Bulgarian, "Bulgarian"),
    (Language::Malayalam, "Malayalam"),
    (Language::Ukrainian, "Ukrainian"),
    (Language::Slovak, "Slovak"),
    (Language::Thai, "Thai"),
    (Language::PortugueseBrazil, "Portuguese (Brazil)"),
    (Language::SpanishLatino, "Spanish (Latino)"),
    (Language::Romanian, "Romanian"),
    (Language::Latvian, "Latvian"),
    (Language::Persian, "Persian"),
    (Language::Catalan, "Catalan"),
    (Language::Croatian, "Croatian"),
    (Language::Serbian, "Serbian"),
    (Language::Bosnian, "Bosnian"),
    (Language::Estonian, "Estonian"),
    (Language::Tamil, "Tamil"),
    (Language::Indonesian, "Indonesian"),
    (Language::Macedonian, "Macedonian"),
    (Language::Slovenian, "Slovenian"),
    (Language::Azerbaijani, "Azerbaijani"),
    (Language::Uzbek, "Uzbek"),
    (Language::Malay, "Malay"),
    (Language::Urdu, "Urdu"),
    (Language::Romansh, "Romansh"),
];

impl Language {
    /// Stable numeric identifier, used when persisting languages.
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        ALL.iter()
            .find(|(language, _)| *language == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }

    pub fn from_id(id: i32) -> Option<Language> {
        ALL.iter()
            .find(|(language, _)| language.id() == id)
            .map(|(language, _)| *language)
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Language> {
        ALL.iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(language, _)| *language)
    }

    pub fn all() -> impl Iterator<Item = Language> {
        ALL.iter().map(|(language, _)| *language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
