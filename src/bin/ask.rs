//! Ask binary - answers one product question from the terminal
//!
//! Usage:
//!   cargo run --bin ask -- "What's the battery life?"
//!   cargo run --bin ask -- --language es "What's the battery life?"
//!   cargo run --bin ask -- --product phone "Is it waterproof?"
//!
//! Environment variables (all optional):
//! - GROQ_API_KEY (without it, answers come from the canned responder)
//! - GROQ_MODEL (defaults to llama-3.1-8b-instant)
//! - GROQ_API_URL (defaults to the Groq chat completions endpoint)
//! - ANSWER_MAX_TOKENS (defaults to 500)
//! - GROQ_TEMPERATURE (defaults to 0.3)
//! - TRANSLATE_API_URL (defaults to https://libretranslate.com/translate)
//! - TRANSLATE_API_KEY

use anyhow::{bail, Result};
use product_support_chat::{ChatService, Config, FaqEntry, ProductContext};
use tracing::info;

/// Demo laptop, mirrors the catalog's first sample product.
fn ultrabook() -> ProductContext {
    ProductContext {
        name: Some("UltraBook Pro 15".to_string()),
        short_description: Some("High-performance laptop for professionals".to_string()),
        detailed_specs: Some(
            "Intel i7-12700H, 16GB DDR4 RAM, 512GB NVMe SSD, 15.6\" 4K IPS display, \
             NVIDIA RTX 3060, Wi-Fi 6, Thunderbolt 4"
                .to_string(),
        ),
        warranty_info: Some(
            "2-year limited warranty covering manufacturing defects. Does not cover physical \
             damage, liquid damage, or normal wear and tear."
                .to_string(),
        ),
        category: Some("Laptops".to_string()),
        price: Some("$1,299.99".to_string()),
        manufacturer: Some("TechCorp".to_string()),
        model_number: Some("UBP15-2024".to_string()),
        faqs: vec![
            FaqEntry {
                question: "What's the battery life?".to_string(),
                answer: "Up to 10 hours of typical usage including web browsing, document \
                         editing, and video streaming. Gaming and intensive tasks will reduce \
                         battery life to 4-6 hours."
                    .to_string(),
                category: Some("specs".to_string()),
            },
            FaqEntry {
                question: "Does it support external monitors?".to_string(),
                answer: "Yes, supports up to two 4K external monitors via USB-C/Thunderbolt 4 \
                         ports. You can also use the HDMI port for a third display."
                    .to_string(),
                category: Some("specs".to_string()),
            },
            FaqEntry {
                question: "What's covered under warranty?".to_string(),
                answer: "Manufacturing defects, hardware failures, screen defects, and \
                         keyboard/trackpad issues. Physical damage, liquid damage, and software \
                         issues are not covered."
                    .to_string(),
                category: Some("warranty".to_string()),
            },
            FaqEntry {
                question: "Can I upgrade the RAM and storage?".to_string(),
                answer: "The laptop has two RAM slots supporting up to 32GB total. Storage can \
                         be upgraded with an additional M.2 NVMe SSD slot available."
                    .to_string(),
                category: Some("specs".to_string()),
            },
            FaqEntry {
                question: "What operating system does it come with?".to_string(),
                answer: "Ships with Windows 11 Pro pre-installed. Linux compatibility is \
                         excellent with all hardware drivers available."
                    .to_string(),
                category: Some("software".to_string()),
            },
        ],
    }
}

/// Demo smartphone, mirrors the catalog's second sample product.
fn smartphone() -> ProductContext {
    ProductContext {
        name: Some("SmartPhone X Pro".to_string()),
        short_description: Some(
            "Advanced smartphone with professional camera system".to_string(),
        ),
        detailed_specs: Some(
            "6.7\" OLED display, A16 Bionic chip, 256GB storage, Triple camera system (48MP \
             main, 12MP ultra-wide, 12MP telephoto), 5G connectivity, IP68 water resistance"
                .to_string(),
        ),
        warranty_info: Some(
            "1-year limited warranty covering manufacturing defects. AppleCare+ available for \
             extended coverage including accidental damage."
                .to_string(),
        ),
        category: Some("Smartphones".to_string()),
        price: Some("$999.99".to_string()),
        manufacturer: Some("TechCorp".to_string()),
        model_number: Some("SPX-PRO-2024".to_string()),
        faqs: vec![
            FaqEntry {
                question: "Is it waterproof?".to_string(),
                answer: "The phone has IP68 water resistance rating, meaning it can withstand \
                         submersion in up to 6 meters of water for 30 minutes. However, water \
                         damage is not covered under warranty."
                    .to_string(),
                category: Some("specs".to_string()),
            },
            FaqEntry {
                question: "How long does the battery last?".to_string(),
                answer: "Up to 28 hours of video playback, 22 hours of streaming, or 95 hours \
                         of audio playback. Typical daily usage provides 1-2 days of battery \
                         life."
                    .to_string(),
                category: Some("specs".to_string()),
            },
            FaqEntry {
                question: "Does it support wireless charging?".to_string(),
                answer: "Yes, supports Qi wireless charging up to 15W, MagSafe wireless \
                         charging up to 15W, and reverse wireless charging for accessories."
                    .to_string(),
                category: Some("specs".to_string()),
            },
            FaqEntry {
                question: "What's included in the box?".to_string(),
                answer: "Phone, USB-C to Lightning cable, documentation. Power adapter sold \
                         separately to reduce environmental impact."
                    .to_string(),
                category: Some("general".to_string()),
            },
        ],
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("product_support_chat=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut language: Option<String> = None;
    let mut product_key = "laptop".to_string();
    let mut question_parts: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--language" | "-l" => {
                i += 1;
                match args.get(i) {
                    Some(value) => language = Some(value.clone()),
                    None => bail!("--language requires a value, e.g. --language es"),
                }
            }
            "--product" | "-p" => {
                i += 1;
                match args.get(i) {
                    Some(value) => product_key = value.clone(),
                    None => bail!("--product requires a value: laptop or phone"),
                }
            }
            other => question_parts.push(other.to_string()),
        }
        i += 1;
    }

    let question = question_parts.join(" ");
    if question.trim().is_empty() {
        bail!("Usage: ask [--product laptop|phone] [--language CODE] \"<question>\"");
    }

    let product = match product_key.as_str() {
        "laptop" => ultrabook(),
        "phone" => smartphone(),
        other => bail!("Unknown product '{}' (expected laptop or phone)", other),
    };
    let product_name = product
        .name
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());

    let config = Config::from_env();
    let service = ChatService::new(config);

    info!("Asking about {}: {}", product_name, question);
    let reply = service.answer(&product, &question, language.as_deref()).await;

    println!();
    println!("==================== PRODUCT SUPPORT ====================");
    println!("Product:  {}", product_name);
    println!(
        "Mode:     {}",
        if service.is_live() {
            "live model"
        } else {
            "canned answers"
        }
    );
    println!(
        "Language: {} ({})",
        reply.language.code(),
        reply.language.display_name()
    );
    println!("----------------------------------------------------------");
    println!("{}", reply.answer);
    println!("==========================================================");
    println!();

    Ok(())
}
