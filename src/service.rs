//! Request orchestration: prompt assembly, model call, language cleanup.
//!
//! `ChatService` decides once, at construction, whether answers come from
//! the hosted model or from the canned responder, and holds that choice
//! for its whole lifetime. Per-request state is local to each call, so a
//! single instance is safe to share across concurrent requests.

use crate::config::Config;
use crate::detect::detect_language;
use crate::groq;
use crate::i18n::LanguageCode;
use crate::mock::{self, CannedAnswer};
use crate::product::ProductContext;
use crate::prompt::build_prompt;
use crate::translate::{self, AUTO};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Fixed user-facing text returned when the live model call fails.
/// Translated into the target language before it leaves the service.
const APOLOGY: &str = "I apologize, but I'm having trouble processing your request right now. \
    Please try again later or contact customer support.";

/// How many characters of a raw answer feed the post-answer language check.
const LANGUAGE_CHECK_CHARS: usize = 100;

/// Where answers come from. Picked once in [`ChatService::new`].
enum Backend {
    /// Hosted chat-completions model.
    Live,
    /// Deterministic canned answers, for running without a credential.
    Mock,
}

/// One finished exchange: the answer text and the language it resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub answer: String,
    pub language: LanguageCode,
}

pub struct ChatService {
    config: Config,
    client: reqwest::Client,
    backend: Backend,
}

impl ChatService {
    /// Build the service and pick its answer backend.
    ///
    /// Live mode needs a non-blank `GROQ_API_KEY` and a chat endpoint URL
    /// that parses; anything else means canned answers for the lifetime
    /// of the instance. The decision is logged exactly once, here.
    pub fn new(config: Config) -> Self {
        let backend = match config.groq_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => match groq::chat_endpoint(&config) {
                Ok(_) => {
                    info!(
                        "Chat model client initialized (model: {}), live answers enabled",
                        config.groq_model
                    );
                    Backend::Live
                }
                Err(error) => {
                    warn!(
                        "Chat model client unavailable, using canned answers: {:#}",
                        error
                    );
                    Backend::Mock
                }
            },
            _ => {
                warn!("GROQ_API_KEY is not set, using canned answers");
                Backend::Mock
            }
        };

        Self {
            config,
            client: reqwest::Client::new(),
            backend,
        }
    }

    /// Whether answers come from the hosted model.
    pub fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live)
    }

    /// Answer one customer question about one product.
    ///
    /// `language` is an optional caller override (ISO 639-1 style code);
    /// when absent the language is detected from the question itself.
    pub async fn answer(
        &self,
        product: &ProductContext,
        question: &str,
        language: Option<&str>,
    ) -> ChatReply {
        let (prompt, language) = build_prompt(product, question, language);
        let answer = self.respond(&prompt, &language).await;
        ChatReply { answer, language }
    }

    /// Resolve an assembled prompt into final answer text in the target
    /// language. Never fails: every error path degrades to a readable
    /// string, translated best-effort.
    pub async fn respond(&self, prompt: &str, target: &LanguageCode) -> String {
        match self.backend {
            Backend::Mock => match mock::canned_answer(prompt, target) {
                CannedAnswer::English(text) if !target.is_english() => {
                    translate::translate_text(&self.client, &self.config, text, "en", target.code())
                        .await
                }
                canned => canned.text().to_string(),
            },
            Backend::Live => {
                match groq::generate_answer(&self.client, &self.config, prompt).await {
                    Ok(answer) if target.is_english() => answer,
                    Ok(answer) => self.enforce_language(answer, target).await,
                    Err(error) => {
                        warn!(
                            "Chat completion failed, answering with the fallback message: {:#}",
                            error
                        );
                        translate::translate_text(
                            &self.client,
                            &self.config,
                            APOLOGY,
                            "en",
                            target.code(),
                        )
                        .await
                    }
                }
            }
        }
    }

    /// Best-effort check that a live answer actually came back in the
    /// target language; translates the whole answer when it did not.
    ///
    /// Detection runs on a short preview, so this can misjudge; a wrong
    /// call costs one translation round-trip, never the answer itself.
    async fn enforce_language(&self, answer: String, target: &LanguageCode) -> String {
        let preview: String = answer.chars().take(LANGUAGE_CHECK_CHARS).collect();
        let detected = detect_language(&preview);
        if detected == *target {
            return answer;
        }

        debug!(
            "Answer language {} does not match target {}, translating",
            detected.code(),
            target.code()
        );
        translate::translate_text(&self.client, &self.config, &answer, AUTO, target.code()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ==================== Helper Functions ====================

    fn mock_mode_config() -> Config {
        Config {
            groq_api_key: None,
            groq_model: "llama-3.1-8b-instant".to_string(),
            groq_api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            answer_max_tokens: 500,
            answer_temperature: 0.3,
            // Nothing listens here, so accidental translation calls fail fast.
            translate_api_url: "http://127.0.0.1:9/translate".to_string(),
            translate_api_key: None,
        }
    }

    fn live_mode_config(groq_url: &str) -> Config {
        Config {
            groq_api_key: Some("test-groq-key".to_string()),
            groq_api_url: groq_url.to_string(),
            ..mock_mode_config()
        }
    }

    fn sample_product() -> ProductContext {
        ProductContext {
            name: Some("UltraBook Pro 15".to_string()),
            category: Some("Laptops".to_string()),
            manufacturer: Some("TechCorp".to_string()),
            model_number: Some("UBP15-2024".to_string()),
            price: Some("$1,299.99".to_string()),
            short_description: Some("High-performance laptop".to_string()),
            detailed_specs: Some("Intel i7, 16GB RAM, 512GB SSD".to_string()),
            warranty_info: Some("2-year limited warranty".to_string()),
            faqs: vec![],
        }
    }

    fn chat_completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": content}}
            ]
        })
    }

    // ==================== Backend Selection Tests ====================

    #[test]
    fn test_no_api_key_selects_mock_backend() {
        let service = ChatService::new(mock_mode_config());
        assert!(!service.is_live());
    }

    #[test]
    fn test_blank_api_key_selects_mock_backend() {
        let config = Config {
            groq_api_key: Some("   ".to_string()),
            ..mock_mode_config()
        };
        let service = ChatService::new(config);
        assert!(!service.is_live());
    }

    #[test]
    fn test_unparseable_endpoint_selects_mock_backend() {
        let config = Config {
            groq_api_key: Some("test-groq-key".to_string()),
            groq_api_url: "definitely not a url".to_string(),
            ..mock_mode_config()
        };
        let service = ChatService::new(config);
        assert!(!service.is_live());
    }

    #[test]
    fn test_valid_key_and_endpoint_selects_live_backend() {
        let service =
            ChatService::new(live_mode_config("https://api.groq.com/openai/v1/chat/completions"));
        assert!(service.is_live());
    }

    // ==================== Mock Mode Tests ====================

    #[tokio::test]
    async fn test_mock_battery_answer_in_english() {
        let service = ChatService::new(mock_mode_config());

        let reply = service
            .answer(&sample_product(), "What's the battery life?", None)
            .await;

        assert_eq!(reply.language.code(), "en");
        assert!(reply.answer.contains("battery life is up to 10 hours"));
    }

    #[tokio::test]
    async fn test_mock_spanish_override_uses_spanish_literal() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = Config {
            translate_api_url: format!("{}/translate", mock_server.uri()),
            ..mock_mode_config()
        };
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "What's the battery life?", Some("es"))
            .await;

        assert_eq!(reply.language.code(), "es");
        assert!(reply.answer.contains("la batería dura hasta 10 horas"));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_mock_french_answer_routed_through_translator() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "La batterie dure jusqu'à 10 heures."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            translate_api_url: format!("{}/translate", mock_server.uri()),
            ..mock_mode_config()
        };
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "What's the battery life?", Some("fr"))
            .await;

        assert_eq!(reply.language.code(), "fr");
        assert_eq!(reply.answer, "La batterie dure jusqu'à 10 heures.");
    }

    #[tokio::test]
    async fn test_mock_translator_down_keeps_english_text() {
        // translate_api_url points at a closed port.
        let service = ChatService::new(mock_mode_config());

        let reply = service
            .answer(&sample_product(), "What's the battery life?", Some("fr"))
            .await;

        assert_eq!(reply.language.code(), "fr");
        assert!(reply.answer.contains("battery life is up to 10 hours"));
    }

    #[tokio::test]
    async fn test_mock_greeting_for_markerless_prompt() {
        let service = ChatService::new(mock_mode_config());

        let answer = service
            .respond("hello there", &LanguageCode::from_code("en"))
            .await;

        assert!(answer.starts_with("Hello! I'm here to help"));
    }

    // ==================== Live Mode Tests ====================

    #[tokio::test]
    async fn test_live_answer_passed_through_for_english() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_completion_body("The battery lasts about 10 hours.")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = live_mode_config(&format!("{}/chat/completions", mock_server.uri()));
        let service = ChatService::new(config);
        assert!(service.is_live());

        let reply = service
            .answer(&sample_product(), "What's the battery life?", None)
            .await;

        assert_eq!(reply.language.code(), "en");
        assert_eq!(reply.answer, "The battery lasts about 10 hours.");
    }

    #[tokio::test]
    async fn test_live_failure_returns_apology() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let config = live_mode_config(&format!("{}/chat/completions", mock_server.uri()));
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "What's the battery life?", None)
            .await;

        assert_eq!(reply.answer, APOLOGY);
    }

    #[tokio::test]
    async fn test_live_failure_apology_translated_for_spanish() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(serde_json::json!({
                "q": APOLOGY,
                "source": "en",
                "target": "es",
                "format": "text",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "Lo siento, no puedo procesar su solicitud en este momento."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            translate_api_url: format!("{}/translate", mock_server.uri()),
            ..live_mode_config(&format!("{}/chat/completions", mock_server.uri()))
        };
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "What's the battery life?", Some("es"))
            .await;

        assert_eq!(
            reply.answer,
            "Lo siento, no puedo procesar su solicitud en este momento."
        );
    }

    // ==================== Language Enforcement Tests ====================

    #[tokio::test]
    async fn test_enforcement_skips_translation_when_language_matches() {
        let mock_server = MockServer::start().await;

        let spanish_answer =
            "La batería de este portátil dura hasta diez horas de uso normal y habitual.";

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(spanish_answer)))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = Config {
            translate_api_url: format!("{}/translate", mock_server.uri()),
            ..live_mode_config(&format!("{}/chat/completions", mock_server.uri()))
        };
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "¿Cuánto dura la batería?", Some("es"))
            .await;

        assert_eq!(reply.answer, spanish_answer);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_enforcement_translates_wrong_language_answer() {
        let mock_server = MockServer::start().await;

        let english_answer =
            "The battery lasts up to ten hours of typical usage on a single charge.";

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(english_answer)))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(serde_json::json!({
                "q": english_answer,
                "source": "auto",
                "target": "es",
                "format": "text",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "La batería dura hasta diez horas de uso típico."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            translate_api_url: format!("{}/translate", mock_server.uri()),
            ..live_mode_config(&format!("{}/chat/completions", mock_server.uri()))
        };
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "¿Cuánto dura la batería?", Some("es"))
            .await;

        assert_eq!(
            reply.answer,
            "La batería dura hasta diez horas de uso típico."
        );
    }

    #[tokio::test]
    async fn test_enforcement_keeps_answer_when_translator_fails() {
        let mock_server = MockServer::start().await;

        let english_answer =
            "The battery lasts up to ten hours of typical usage on a single charge.";

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(english_answer)))
            .mount(&mock_server)
            .await;

        // translate_api_url stays on the closed port from mock_mode_config.
        let config = live_mode_config(&format!("{}/chat/completions", mock_server.uri()));
        let service = ChatService::new(config);

        let reply = service
            .answer(&sample_product(), "¿Cuánto dura la batería?", Some("es"))
            .await;

        assert_eq!(reply.answer, english_answer);
    }
}
