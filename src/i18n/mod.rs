//! Internationalization (i18n) module for multi-language support.
//!
//! Everything language-shaped lives here: the fixed table of known
//! languages and the `LanguageCode` value that travels with a request.
//!
//! - `registry`: code → display-name table (~20 languages)
//! - `language`: normalized, pass-through `LanguageCode` type
//!
//! The table is intentionally open-ended: a code missing from it is not an
//! error anywhere in the crate, it just displays as itself.

mod language;
mod registry;

pub use language::{LanguageCode, DEFAULT_LANGUAGE};
pub use registry::{display_name, get_by_code, LanguageEntry, LANGUAGES};
