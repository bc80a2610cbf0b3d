const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub api_key: String,
    /// Model segment of the `generateContent` path.
    pub model: String,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            api_base: GEMINI_BASE_URL.into(),
            api_key,
            model: DEFAULT_MODEL.into(),
        }
    }

    pub fn dangerously_try_from_env() -> Self {
        let api_key = std::env::var(GEMINI_API_KEY).expect("api key");
        Self::new(api_key)
    }

    pub fn with_api_base(self, api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..self
        }
    }

    pub fn with_model(self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self
        }
    }
}
