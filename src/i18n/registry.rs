//! Language registry: the fixed table of languages the assistant knows by name.
//!
//! Prompts address the model with a human-readable language name ("Spanish"),
//! not a bare ISO code, so every language we expect to see gets an entry here.
//! Codes outside the table are still served; they just display as themselves.

/// Metadata for a known language.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    /// ISO 639-1 code, lowercased, optionally region-qualified (e.g. "zh-cn")
    pub code: &'static str,

    /// English display name, as written into prompts
    pub name: &'static str,
}

/// All languages with a display name. Order is cosmetic.
///
/// The region-qualified Chinese pair mirrors what the upstream language
/// guesser emits, so caller-supplied overrides like "zh-tw" resolve too.
pub const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "en", name: "English" },
    LanguageEntry { code: "es", name: "Spanish" },
    LanguageEntry { code: "fr", name: "French" },
    LanguageEntry { code: "de", name: "German" },
    LanguageEntry { code: "it", name: "Italian" },
    LanguageEntry { code: "pt", name: "Portuguese" },
    LanguageEntry { code: "nl", name: "Dutch" },
    LanguageEntry { code: "ru", name: "Russian" },
    LanguageEntry { code: "uk", name: "Ukrainian" },
    LanguageEntry { code: "pl", name: "Polish" },
    LanguageEntry { code: "sv", name: "Swedish" },
    LanguageEntry { code: "da", name: "Danish" },
    LanguageEntry { code: "fi", name: "Finnish" },
    LanguageEntry { code: "tr", name: "Turkish" },
    LanguageEntry { code: "ar", name: "Arabic" },
    LanguageEntry { code: "hi", name: "Hindi" },
    LanguageEntry { code: "ja", name: "Japanese" },
    LanguageEntry { code: "ko", name: "Korean" },
    LanguageEntry { code: "zh-cn", name: "Chinese (Simplified)" },
    LanguageEntry { code: "zh-tw", name: "Chinese (Traditional)" },
];

/// Look up a language entry by its code (expects an already-normalized code).
pub fn get_by_code(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.code == code)
}

/// English display name for a code, if the code is in the table.
pub fn display_name(code: &str) -> Option<&'static str> {
    get_by_code(code).map(|entry| entry.name)
}
