//! Context-rich prompt assembly.
//!
//! Folds one product snapshot, its FAQ list and the raw customer question
//! into a fixed template, and resolves the language the answer must be
//! written in. The language directive is stated twice on purpose: hosted
//! models drift back to English when the instruction appears only once.

use crate::detect::detect_language;
use crate::i18n::LanguageCode;
use crate::product::{FaqEntry, ProductContext};

/// Placeholder for product fields the snapshot does not carry.
const MISSING_FIELD: &str = "N/A";

/// Placeholder for a missing product name.
const MISSING_NAME: &str = "Unknown";

/// Rendered when a product has no stored FAQs.
const NO_FAQS: &str = "No FAQs available";

/// Marker separating the customer's question inside the prompt. The mock
/// responder keys off the same marker.
pub const QUESTION_MARKER: &str = "CUSTOMER QUESTION:";

/// Build the prompt for one chat request and resolve its target language.
///
/// The language is the caller's override when one is supplied and
/// non-blank, otherwise it is detected from the question. It is resolved
/// exactly once here; downstream stages only verify, never re-decide.
///
/// Pure string assembly: no I/O, no failure modes.
pub fn build_prompt(
    product: &ProductContext,
    question: &str,
    language: Option<&str>,
) -> (String, LanguageCode) {
    let language = match language {
        Some(code) if !code.trim().is_empty() => LanguageCode::from_code(code),
        _ => detect_language(question),
    };
    let language_name = language.display_name();

    let prompt = format!(
        "You are a helpful product support assistant. Answer the customer's question based on \
         the product information provided below.\n\
         \n\
         IMPORTANT: Write your entire answer in {language_name}. Do not switch to any other \
         language.\n\
         \n\
         PRODUCT INFORMATION:\n\
         - Product Name: {name}\n\
         - Category: {category}\n\
         - Manufacturer: {manufacturer}\n\
         - Model: {model}\n\
         - Price: {price}\n\
         - Description: {description}\n\
         - Specifications: {specs}\n\
         - Warranty: {warranty}\n\
         \n\
         FREQUENTLY ASKED QUESTIONS:\n\
         {faqs}\n\
         \n\
         {QUESTION_MARKER} {question}\n\
         \n\
         Please provide a helpful, accurate answer based on the product information above. If \
         the information isn't available in the product details, politely explain that you \
         don't have that specific information and suggest contacting customer support.\n\
         \n\
         Keep your response conversational and helpful. If appropriate, reference specific \
         product features or warranty information. Remember: the entire answer must be written \
         in {language_name}.",
        name = product.name.as_deref().unwrap_or(MISSING_NAME),
        category = or_na(&product.category),
        manufacturer = or_na(&product.manufacturer),
        model = or_na(&product.model_number),
        price = or_na(&product.price),
        description = or_na(&product.short_description),
        specs = or_na(&product.detailed_specs),
        warranty = or_na(&product.warranty_info),
        faqs = render_faq_block(&product.faqs),
    );

    (prompt, language)
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_FIELD)
}

/// Newline-delimited Q:/A: block, in stored order.
fn render_faq_block(faqs: &[FaqEntry]) -> String {
    if faqs.is_empty() {
        return NO_FAQS.to_string();
    }

    faqs.iter()
        .map(|faq| format!("Q: {}\nA: {}\n", faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n")
}
