//! The fixed instructional preambles sent ahead of document content. These are
//! part of the upstream contract the formatting heuristics were tuned against,
//! so the wording stays as-is.

use models_notemon::Action;

pub const EXTRACTION_PROMPT: &str = "Extract all text content from this document. Return only the extracted text without any additional commentary or formatting.";

const SUMMARY_SYSTEM: &str = "You are an AI assistant that creates concise, well-structured summaries of documents. Focus on key points and main ideas.";
const FAQ_SYSTEM: &str = "You are an AI assistant that generates frequently asked questions based on document content. Create questions that would help someone understand the material better.";
const CHAT_SYSTEM: &str = "You are an AI assistant that answers questions about documents. Provide accurate, helpful responses based on the document content.";

/// Builds the single text prompt for a processing request: preamble, document
/// content, the user's question for chat, and an optional language hint.
pub fn build_prompt(
    action: Action,
    content: &str,
    user_prompt: Option<&str>,
    language: Option<&str>,
) -> String {
    let (system_prompt, user_part) = match action {
        Action::Summary => (
            SUMMARY_SYSTEM,
            format!("Please provide a comprehensive summary of the following document:\n\n{content}"),
        ),
        Action::Faq => (
            FAQ_SYSTEM,
            format!("Generate 5-7 frequently asked questions with detailed answers based on this document:\n\n{content}"),
        ),
        Action::Chat => (
            CHAT_SYSTEM,
            format!(
                "Document content:\n{content}\n\nUser question: {}",
                user_prompt.unwrap_or_default()
            ),
        ),
    };

    let mut prompt = format!("{system_prompt}\n\n{user_part}");
    if let Some(language) = language {
        prompt.push_str(&format!("\n\nPlease respond in {language}."));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_prompt_includes_question() {
        let prompt = build_prompt(Action::Chat, "the notes", Some("what is rust?"), None);
        assert!(prompt.contains("Document content:\nthe notes"));
        assert!(prompt.ends_with("User question: what is rust?"));
    }

    #[test]
    fn summary_prompt_carries_preamble_then_content() {
        let prompt = build_prompt(Action::Summary, "the notes", None, None);
        assert!(prompt.starts_with("You are an AI assistant that creates concise"));
        assert!(prompt.ends_with("following document:\n\nthe notes"));
    }

    #[test]
    fn language_hint_is_appended() {
        let prompt = build_prompt(Action::Faq, "the notes", None, Some("French"));
        assert!(prompt.ends_with("Please respond in French."));
    }
}
