//! LanguageCode: normalized, pass-through language identifier.
//!
//! Unlike a closed enum, this type accepts any code the caller or the
//! detector hands us: known codes gain a display name from the registry,
//! unknown ones ride along verbatim and display as themselves. Requests
//! must never fail because a customer speaks a language we did not list.

use crate::i18n::registry;
use serde::{Deserialize, Deserializer, Serialize};

/// Default language when nothing can be detected.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A normalized language code carried through one chat request.
///
/// Construction never fails: codes are trimmed and lowercased, and a
/// blank input falls back to English. Region qualifiers survive
/// normalization ("zh-CN" becomes "zh-cn").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl<'de> Deserialize<'de> for LanguageCode {
    // Normalize on the way in as well, so a code is well-formed no matter
    // where it came from.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(LanguageCode::from_code(&raw))
    }
}

impl LanguageCode {
    /// Normalize a caller- or detector-supplied code.
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_lowercase();
        if normalized.is_empty() {
            Self(DEFAULT_LANGUAGE.to_string())
        } else {
            Self(normalized)
        }
    }

    /// The English default.
    pub fn english() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// The normalized code (e.g. "en", "es", "zh-cn").
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Human-readable name for prompts. Unknown codes display as the
    /// code itself rather than erroring out.
    pub fn display_name(&self) -> &str {
        registry::display_name(&self.0).unwrap_or(&self.0)
    }

    pub fn is_english(&self) -> bool {
        self.0 == DEFAULT_LANGUAGE
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
