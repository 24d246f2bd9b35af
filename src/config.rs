#[derive(Debug, Clone)]
pub struct Config {
    // Groq (OpenAI-compatible chat completions)
    /// API credential. Absent or blank means the chat service runs in
    /// mock mode for its whole lifetime.
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_api_url: String,

    // Answer generation
    pub answer_max_tokens: u32,
    pub answer_temperature: f32,

    // Translation provider (LibreTranslate-compatible)
    pub translate_api_url: String,
    pub translate_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing here is required: a missing GROQ_API_KEY is a valid
    /// configuration (mock mode), and every other value has a default.
    pub fn from_env() -> Self {
        Self {
            // Groq
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            groq_api_url: std::env::var("GROQ_API_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1/chat/completions".to_string()),

            // Answer generation
            answer_max_tokens: std::env::var("ANSWER_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            answer_temperature: std::env::var("GROQ_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.3),

            // Translation
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| "https://libretranslate.com/translate".to_string()),
            translate_api_key: std::env::var("TRANSLATE_API_KEY").ok(),
        }
    }
}
