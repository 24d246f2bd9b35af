//! Product snapshot types handed in by the data-access layer.
//!
//! One `ProductContext` is an immutable per-request snapshot; the chat
//! component never looks anything up by id and never writes any of it
//! back. Fields are optional because snapshot rows may carry NULLs, and
//! the prompt builder substitutes placeholders instead of failing.

use serde::{Deserialize, Serialize};

/// Everything the assistant may ground an answer in for one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductContext {
    pub name: Option<String>,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    /// Free text, currency included (e.g. "$1,299.99")
    pub price: Option<String>,
    pub short_description: Option<String>,
    pub detailed_specs: Option<String>,
    pub warranty_info: Option<String>,
    /// Rendered into the prompt in this exact order
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

/// A stored question/answer pair for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    /// Topical tag like "specs" or "warranty"; informational only
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_context_roundtrip() {
        let original = ProductContext {
            name: Some("UltraBook Pro 15".to_string()),
            category: Some("Laptops".to_string()),
            manufacturer: Some("TechCorp".to_string()),
            model_number: Some("UBP15-2024".to_string()),
            price: Some("$1,299.99".to_string()),
            short_description: Some("High-performance laptop for professionals".to_string()),
            detailed_specs: Some("Intel i7-12700H, 16GB DDR4 RAM, 512GB NVMe SSD".to_string()),
            warranty_info: Some("2-year limited warranty".to_string()),
            faqs: vec![FaqEntry {
                question: "What's the battery life?".to_string(),
                answer: "Up to 10 hours of typical usage.".to_string(),
                category: Some("specs".to_string()),
            }],
        };

        let json = serde_json::to_string(&original).expect("serialize");
        let restored: ProductContext = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(original.name, restored.name);
        assert_eq!(original.price, restored.price);
        assert_eq!(restored.faqs.len(), 1);
        assert_eq!(restored.faqs[0].question, "What's the battery life?");
        assert_eq!(restored.faqs[0].category.as_deref(), Some("specs"));
    }

    #[test]
    fn test_product_context_missing_faqs_field() {
        // Data-access rows without any FAQs come over the wire with the
        // array omitted entirely.
        let json = r#"{
            "name": "SmartPhone X Pro",
            "category": null,
            "manufacturer": "TechCorp",
            "model_number": null,
            "price": "$999.99",
            "short_description": null,
            "detailed_specs": null,
            "warranty_info": null
        }"#;

        let product: ProductContext = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.name.as_deref(), Some("SmartPhone X Pro"));
        assert_eq!(product.category, None);
        assert!(product.faqs.is_empty());
    }

    #[test]
    fn test_faq_order_is_preserved() {
        let faqs: Vec<FaqEntry> = (1..=4)
            .map(|i| FaqEntry {
                question: format!("Question {}", i),
                answer: format!("Answer {}", i),
                category: None,
            })
            .collect();

        let json = serde_json::to_string(&faqs).expect("serialize");
        let restored: Vec<FaqEntry> = serde_json::from_str(&json).expect("deserialize");

        let questions: Vec<&str> = restored.iter().map(|f| f.question.as_str()).collect();
        assert_eq!(
            questions,
            vec!["Question 1", "Question 2", "Question 3", "Question 4"]
        );
    }
}
