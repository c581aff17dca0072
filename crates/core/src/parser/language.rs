use crate::language::Language;

/// Title words that name a language, lowercase.
const LANGUAGE_TOKENS: &[(&str, Language)] = &[
    ("english", Language::English),
    ("eng", Language::English),
    ("french", Language::French),
    ("truefrench", Language::French),
    ("vostfr", Language::French),
    ("vff", Language::French),
    ("vfq", Language::French),
    ("spanish", Language::Spanish),
    ("castellano", Language::Spanish),
    ("esp", Language::Spanish),
    ("latino", Language::SpanishLatino),
    ("german", Language::German),
    ("deutsch", Language::German),
    ("ger", Language::German),
    ("italian", Language::Italian),
    ("ita", Language::Italian),
    ("danish", Language::Danish),
    ("dutch", Language::Dutch),
    ("flemish", Language::Flemish),
    ("japanese", Language::Japanese),
    ("jpn", Language::Japanese),
    ("icelandic", Language::Icelandic),
    ("chinese", Language::Chinese),
    ("chs", Language::Chinese),
    ("cht", Language::Chinese),
    ("big5", Language::Chinese),
    ("russian", Language::Russian),
    ("rus", Language::Russian),
    ("polish", Language::Polish),
    ("pldub", Language::Polish),
    ("vietnamese", Language::Vietnamese),
    ("swedish", Language::Swedish),
    ("swesub", Language::Swedish),
    ("norwegian", Language::Norwegian),
    ("finnish", Language::Finnish),
    ("turkish", Language::Turkish),
    ("portuguese", Language::Portuguese),
    ("brazilian", Language::PortugueseBrazil),
    ("greek", Language::Greek),
    ("korean", Language::Korean),
    ("hungarian", Language::Hungarian),
    ("hun", Language::Hungarian),
    ("hebrew", Language::Hebrew),
    ("hebdub", Language::Hebrew),
    ("lithuanian", Language::Lithuanian),
    ("czech", Language::Czech),
    ("arabic", Language::Arabic),
    ("hindi", Language::Hindi),
    ("bulgarian", Language::Bulgarian),
    ("malayalam", Language::Malayalam),
    ("ukrainian", Language::Ukrainian),
    ("ukr", Language::Ukrainian),
    ("slovak", Language::Slovak),
    ("thai", Language::Thai),
    ("romanian", Language::Romanian),
    ("latvian", Language::Latvian),
    ("persian", Language::Persian),
    ("farsi", Language::Persian),
    ("catalan", Language::Catalan),
    ("croatian", Language::Croatian),
    ("serbian", Language::Serbian),
    ("bosnian", Language::Bosnian),
    ("estonian", Language::Estonian),
    ("tamil", Language::Tamil),
    ("indonesian", Language::Indonesian),
    ("macedonian", Language::Macedonian),
    ("slovenian", Language::Slovenian),
    ("azerbaijani", Language::Azerbaijani),
    ("uzbek", Language::Uzbek),
    ("malay", Language::Malay),
    ("urdu", Language::Urdu),
    ("romansh", Language::Romansh),
];

pub(crate) fn tokenize(title: &str) -> impl Iterator<Item = &str> {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

pub(crate) fn language_for_token(token: &str) -> Option<Language> {
    let lower = token.to_lowercase();
    LANGUAGE_TOKENS
        .iter()
        .find(|(word, _)| *word == lower)
        .map(|(_, language)| *language)
}

/// Languages named in a title after its first `skip` words, in order of appearance.
/// Falls back to `Unknown` when none are named.
pub(crate) fn parse_languages(title: &str, skip: usize) -> Vec<Language> {
    let mut languages = Vec::new();
    for language in tokenize(title).skip(skip).filter_map(language_for_token) {
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    if languages.is_empty() {
        languages.push(Language::Unknown);
    }
    languages
}
