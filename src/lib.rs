//! Product support chat: grounded answers about catalog products, in the
//! customer's own language.
//!
//! Per request: resolve the target language (caller override or detection
//! on the question), fold the product snapshot and question into a fixed
//! prompt, obtain an answer from the hosted model or the canned responder,
//! then verify and best-effort correct the answer's language.

pub mod config;
pub mod detect;
pub mod groq;
pub mod i18n;
pub mod mock;
pub mod product;
pub mod prompt;
pub mod service;
pub mod translate;

pub use config::Config;
pub use product::{FaqEntry, ProductContext};
pub use service::{ChatReply, ChatService};
