use gemini_client::types::request::GenerationConfig;

/// At most this many bullet-like lines are promoted to summary key points.
pub const MAX_KEY_POINTS: usize = 5;

/// Question used for the single synthetic FAQ entry when no question marker
/// was recognized anywhere in the generated text.
pub const SYNTHETIC_FAQ_QUESTION: &str = "Generated Content";

/// Generation settings for text extraction of non-text uploads.
pub fn extraction_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(0.1),
        max_output_tokens: Some(8192),
        ..Default::default()
    }
}

/// Generation settings for summary / faq / chat processing.
pub fn processing_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(0.7),
        top_k: Some(40),
        top_p: Some(0.95),
        max_output_tokens: Some(2048),
    }
}
