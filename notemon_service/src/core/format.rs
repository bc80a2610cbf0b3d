//! Best-effort reformatting of the generated free text into the structured
//! summary / FAQ bodies. These are line-pattern heuristics tuned against the
//! model's typical formatting, not a parser: unrecognized shapes degrade to
//! pass-through rather than erroring.

use crate::core::constants::{MAX_KEY_POINTS, SYNTHETIC_FAQ_QUESTION};
use models_notemon::response::FaqEntry;
use regex::Regex;
use std::sync::LazyLock;

static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•\-*]").unwrap());
static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static POINT_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•\-*\d.]\s*").unwrap());

static QUESTION_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.|^Q:|^\?").unwrap());
static ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^A:|^Answer:").unwrap());

/// Pulls up to [MAX_KEY_POINTS] bullet-like lines out of the summary text.
/// Returns `None` when no line carries a recognized marker.
pub fn extract_key_points(text: &str) -> Option<Vec<String>> {
    let key_points: Vec<String> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter(|line| BULLET_LINE.is_match(line) || NUMBERED_LINE.is_match(line))
        .map(|line| POINT_MARKER.replace(line, "").trim().to_string())
        .take(MAX_KEY_POINTS)
        .collect();

    if key_points.is_empty() {
        None
    } else {
        Some(key_points)
    }
}

/// Splits the generated text into question/answer pairs by scanning for
/// `N.` / `Q:` / `?` question markers and `A:` / `Answer:` answer markers.
/// Unmarked lines accumulate onto the answer in progress. When nothing is
/// recognized, the whole text becomes a single synthetic entry.
pub fn parse_faqs(text: &str) -> Vec<FaqEntry> {
    let mut faqs: Vec<FaqEntry> = Vec::new();
    let mut current_question = String::new();
    let mut current_answer = String::new();

    for line in text.split('\n').filter(|line| !line.trim().is_empty()) {
        if QUESTION_LINE.is_match(line) {
            if !current_question.is_empty() && !current_answer.is_empty() {
                faqs.push(FaqEntry {
                    question: current_question.trim().to_string(),
                    answer: current_answer.trim().to_string(),
                });
            }
            let stripped = NUMBERED_LINE.replace(line, "");
            current_question = stripped
                .strip_prefix("Q:")
                .unwrap_or(&stripped)
                .trim()
                .to_string();
            current_answer = String::new();
        } else if ANSWER_LINE.is_match(line) {
            current_answer = ANSWER_LINE.replace(line, "").trim().to_string();
        } else if !current_question.is_empty() {
            if current_answer.is_empty() {
                current_answer = line.trim().to_string();
            } else {
                current_answer.push(' ');
                current_answer.push_str(line.trim());
            }
        }
    }

    if !current_question.is_empty() && !current_answer.is_empty() {
        faqs.push(FaqEntry {
            question: current_question.trim().to_string(),
            answer: current_answer.trim().to_string(),
        });
    }

    if faqs.is_empty() {
        faqs.push(FaqEntry {
            question: SYNTHETIC_FAQ_QUESTION.to_string(),
            answer: text.to_string(),
        });
    }

    faqs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_numbered_pairs_round_trip() {
        let text = "1. What is Rust?\nA: A systems programming language.\n2. Who uses it?\nA: Lots of people.";
        let faqs = parse_faqs(text);
        assert_eq!(
            faqs,
            vec![
                FaqEntry {
                    question: "What is Rust?".into(),
                    answer: "A systems programming language.".into(),
                },
                FaqEntry {
                    question: "Who uses it?".into(),
                    answer: "Lots of people.".into(),
                },
            ]
        );
    }

    #[test]
    fn q_prefix_is_stripped_from_questions() {
        let faqs = parse_faqs("Q: How does it work?\nAnswer: Very well.");
        assert_eq!(faqs[0].question, "How does it work?");
        assert_eq!(faqs[0].answer, "Very well.");
    }

    #[test]
    fn unmarked_lines_join_the_answer_in_progress() {
        let text = "1. What is borrowing?\nA: Taking a reference\nwithout taking ownership.";
        let faqs = parse_faqs(text);
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].answer, "Taking a reference without taking ownership.");
    }

    #[test]
    fn unrecognized_text_yields_single_synthetic_entry() {
        let text = "The model ignored the requested layout entirely.";
        let faqs = parse_faqs(text);
        assert_eq!(
            faqs,
            vec![FaqEntry {
                question: "Generated Content".into(),
                answer: text.into(),
            }]
        );
    }

    #[test]
    fn question_without_answer_is_dropped() {
        let faqs = parse_faqs("1. A question that never gets answered?");
        // no complete pair was formed, so the synthetic fallback wins
        assert_eq!(faqs[0].question, "Generated Content");
    }

    #[test]
    fn five_or_more_bullets_cap_at_five_key_points() {
        let text = "Overview first.\n• one\n• two\n• three\n- four\n* five\n• six";
        let key_points = extract_key_points(text).unwrap();
        assert_eq!(
            key_points,
            vec!["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn numbered_key_points_keep_their_dot() {
        // the marker strip consumes a single leading character, so numbered
        // lines lose the digit but keep the dot
        let key_points = extract_key_points("1. First point\n2. Second point").unwrap();
        assert_eq!(key_points, vec![". First point", ". Second point"]);
    }

    #[test]
    fn question_mark_lines_start_questions() {
        let faqs = parse_faqs("? Is the leading marker kept\nA: Yes, as-is.");
        assert_eq!(
            faqs,
            vec![FaqEntry {
                question: "? Is the leading marker kept".into(),
                answer: "Yes, as-is.".into(),
            }]
        );
    }

    #[test]
    fn prose_only_summary_has_no_key_points() {
        assert_eq!(extract_key_points("Just two sentences. Nothing more."), None);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "• first\n\n   \n• second";
        assert_eq!(extract_key_points(text).unwrap(), vec!["first", "second"]);
    }
}
