//! Deterministic canned answers for running without a model credential.
//!
//! Keyword lookup against the customer question, per language. Languages
//! without their own table fall back to the English literals; the caller
//! routes those through the translator when the target is not English.

use crate::i18n::LanguageCode;
use crate::prompt::QUESTION_MARKER;

/// One keyword-triggered reply. The first entry whose keyword appears in
/// the lowercased question wins.
struct CannedReply {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Canned material for one language.
struct CannedTable {
    language: &'static str,
    replies: &'static [CannedReply],
    default_reply: &'static str,
    greeting: &'static str,
}

impl CannedTable {
    fn lookup(&self, question: &str) -> &'static str {
        self.replies
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| question.contains(k)))
            .map(|entry| entry.reply)
            .unwrap_or(self.default_reply)
    }
}

const ENGLISH_TABLE: CannedTable = CannedTable {
    language: "en",
    replies: &[
        CannedReply {
            keywords: &["battery"],
            reply: "Based on the product specifications, the battery life is up to 10 hours \
                    for typical usage. For gaming or intensive tasks, you can expect 4-6 hours \
                    of battery life.",
        },
        CannedReply {
            keywords: &["warranty"],
            reply: "This product comes with a 2-year limited warranty covering manufacturing \
                    defects. Physical damage and normal wear are not covered. You can contact \
                    customer support for warranty claims.",
        },
        CannedReply {
            keywords: &["price", "cost"],
            reply: "The current price for this product is $1,299.99. Please check our website \
                    for any current promotions or discounts that may be available.",
        },
        CannedReply {
            keywords: &["specs", "specification"],
            reply: "This product features high-end specifications including Intel i7 processor, \
                    16GB RAM, and 512GB SSD storage. For complete technical specifications, \
                    please refer to the product manual.",
        },
    ],
    default_reply: "Thank you for your question! I'd be happy to help you with information \
                    about this product. For the most accurate and up-to-date information, \
                    please contact our customer support team.",
    greeting: "Hello! I'm here to help answer questions about this product. What would you \
               like to know?",
};

const SPANISH_TABLE: CannedTable = CannedTable {
    language: "es",
    // English keywords are listed too so an explicit Spanish override on an
    // English question still lands on the Spanish literal.
    replies: &[
        CannedReply {
            keywords: &["batería", "bateria", "battery"],
            reply: "Según las especificaciones del producto, la batería dura hasta 10 horas de \
                    uso normal. Para juegos o tareas intensivas, puede esperar entre 4 y 6 \
                    horas de autonomía.",
        },
        CannedReply {
            keywords: &["garantía", "garantia", "warranty"],
            reply: "Este producto incluye una garantía limitada de 2 años que cubre defectos \
                    de fabricación. Los daños físicos y el desgaste normal no están cubiertos. \
                    Puede contactar con atención al cliente para reclamaciones de garantía.",
        },
        CannedReply {
            keywords: &["precio", "costo", "cuesta", "price", "cost"],
            reply: "El precio actual de este producto es $1,299.99. Consulte nuestro sitio web \
                    para conocer las promociones o descuentos disponibles.",
        },
        CannedReply {
            keywords: &["especificaciones", "especificacion", "specs", "specification"],
            reply: "Este producto cuenta con especificaciones de alta gama, incluyendo \
                    procesador Intel i7, 16GB de RAM y almacenamiento SSD de 512GB. Para las \
                    especificaciones técnicas completas, consulte el manual del producto.",
        },
    ],
    default_reply: "¡Gracias por su pregunta! Estaré encantado de ayudarle con información \
                    sobre este producto. Para obtener la información más precisa y \
                    actualizada, contacte con nuestro equipo de atención al cliente.",
    greeting: "¡Hola! Estoy aquí para ayudarle a responder preguntas sobre este producto. \
               ¿Qué le gustaría saber?",
};

const TABLES: &[&CannedTable] = &[&ENGLISH_TABLE, &SPANISH_TABLE];

/// A canned answer plus what remains to be done with it.
#[derive(Debug, PartialEq, Eq)]
pub enum CannedAnswer {
    /// Already written in the requested language.
    Native(&'static str),
    /// English fallback; callers translate it when the target is not English.
    English(&'static str),
}

impl CannedAnswer {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Native(text) | Self::English(text) => text,
        }
    }
}

/// Pick the canned answer for an assembled prompt.
///
/// The question is the text after the last `CUSTOMER QUESTION:` marker,
/// up to the first blank line, lowercased; a prompt without the marker
/// gets the greeting. Pure lookup, no I/O.
pub fn canned_answer(prompt: &str, language: &LanguageCode) -> CannedAnswer {
    let table = TABLES
        .iter()
        .find(|table| table.language == language.code());

    let question = match prompt.rsplit_once(QUESTION_MARKER) {
        Some((_, rest)) => {
            // Match keywords against the question only: the template's
            // closing instructions below the blank line mention warranty.
            let question = rest.split("\n\n").next().unwrap_or(rest);
            question.trim().to_lowercase()
        }
        None => {
            return match table {
                Some(table) => CannedAnswer::Native(table.greeting),
                None => CannedAnswer::English(ENGLISH_TABLE.greeting),
            }
        }
    };

    match table {
        Some(table) => CannedAnswer::Native(table.lookup(&question)),
        None => CannedAnswer::English(ENGLISH_TABLE.lookup(&question)),
    }
}
