//! Prompt builder — maps a mode plus the caller's job fields to the two-part
//! message sequence and sampling parameters sent to the completion provider.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::mode::Mode;
use crate::analysis::prompts;
use crate::groq_client::{ChatMessage, GenerationParams};

/// Risk-mode descriptions are clipped to keep token spend bounded.
const MAX_DESCRIPTION_CHARS: usize = 2000;

static TAG_DETECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[a-z].*>").expect("valid tag-detect regex"));
static TAG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag-strip regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Builds the (system, user) message pair and sampling parameters for a
/// request. Pure and total: missing fields degrade to empty content, never to
/// an error.
pub fn build_prompt(
    mode: Mode,
    job_title: Option<&str>,
    job_description: Option<&str>,
) -> (Vec<ChatMessage>, GenerationParams) {
    let title = job_title.unwrap_or_default();
    let description = job_description.unwrap_or_default();

    let messages = match mode {
        Mode::Chatbot => vec![
            ChatMessage::system(prompts::CHATBOT_SYSTEM),
            ChatMessage::user(description),
        ],
        Mode::Autocomplete => vec![
            ChatMessage::system(prompts::AUTOCOMPLETE_SYSTEM),
            ChatMessage::user(description),
        ],
        // A bare skill name is expected; the title field carries it when set
        Mode::Course => vec![
            ChatMessage::system(prompts::COURSE_SYSTEM),
            ChatMessage::user(if title.is_empty() { description } else { title }),
        ],
        Mode::CompanyScore => vec![
            ChatMessage::system(prompts::COMPANY_SCORE_SYSTEM),
            ChatMessage::user(title),
        ],
        Mode::Risk | Mode::RiskFull => {
            let clean = sanitize_description(description);
            vec![
                ChatMessage::system(prompts::RISK_SYSTEM),
                ChatMessage::user(format!("Job Title: {title}\nDescription: {clean}")),
            ]
        }
        Mode::General => vec![
            ChatMessage::system(prompts::GENERAL_SYSTEM),
            ChatMessage::user(format!("Job Title: {title}\nDescription: {description}")),
        ],
    };

    (messages, mode.generation_params())
}

/// Strips markup, collapses whitespace runs, trims, and clips to
/// [`MAX_DESCRIPTION_CHARS`]. Applied to risk-mode descriptions only; other
/// modes embed caller text verbatim.
fn sanitize_description(description: &str) -> String {
    let stripped = if TAG_DETECT.is_match(description) {
        TAG_STRIP.replace_all(description, " ").into_owned()
    } else {
        description.to_string()
    };

    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();

    if trimmed.chars().count() > MAX_DESCRIPTION_CHARS {
        trimmed.chars().take(MAX_DESCRIPTION_CHARS).collect()
    } else {
        trimmed.to_string()
    }
}
