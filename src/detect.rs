//! Statistical language detection over customer text.
//!
//! Trigram-based via the `whatlang` crate, restricted to the languages the
//! registry knows so short inputs are not misclassified as exotic
//! languages. Detection is best-effort by contract: anything that cannot
//! be classified comes back as English rather than an error, because a
//! chat request must never fail on account of the guesser.

use crate::i18n::LanguageCode;
use tracing::debug;
use whatlang::{Detector, Lang};

/// Languages the detector is allowed to report. Mirrors the registry;
/// Mandarin stands in for both Chinese entries since the guesser cannot
/// tell the scripts' regions apart.
const ALLOWED_LANGS: &[Lang] = &[
    Lang::Eng,
    Lang::Spa,
    Lang::Fra,
    Lang::Deu,
    Lang::Ita,
    Lang::Por,
    Lang::Nld,
    Lang::Rus,
    Lang::Ukr,
    Lang::Pol,
    Lang::Swe,
    Lang::Dan,
    Lang::Fin,
    Lang::Tur,
    Lang::Ara,
    Lang::Hin,
    Lang::Jpn,
    Lang::Kor,
    Lang::Cmn,
];

/// Guess the language of `text`.
///
/// Returns `"en"` for empty/whitespace input or when the guesser has no
/// answer. Short strings (e.g. 100-char answer previews) are classified
/// with degraded accuracy, never rejected.
pub fn detect_language(text: &str) -> LanguageCode {
    if text.trim().is_empty() {
        debug!("Language detection skipped for empty input, defaulting to en");
        return LanguageCode::english();
    }

    let detector = Detector::with_allowlist(ALLOWED_LANGS.to_vec());
    match detector.detect(text) {
        Some(info) => {
            debug!(
                "Detected language {:?} (confidence {:.2}, reliable: {})",
                info.lang(),
                info.confidence(),
                info.is_reliable()
            );
            LanguageCode::from_code(lang_to_code(info.lang()))
        }
        None => {
            debug!("Language detection inconclusive, defaulting to en");
            LanguageCode::english()
        }
    }
}

/// Map a whatlang language to the ISO 639-1 code used across the crate.
fn lang_to_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        // whatlang reports Mandarin for Chinese text; the registry keys
        // Chinese by region, so pick the simplified entry.
        Lang::Cmn => "zh-cn",
        // Left unmapped on purpose: the allowlist keeps us out of here.
        other => {
            debug!("Unexpected language {:?} from detector, defaulting to en", other);
            "en"
        }
    }
}
