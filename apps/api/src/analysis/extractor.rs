//! Response extractor — turns free-text model output into the structured
//! `{ analysis, explanation }` result, per mode.
//!
//! This component never fails: when the generated text lacks the structure a
//! mode promised, a static, mode-appropriate fallback is substituted so the
//! caller always receives a well-formed payload.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::analysis::mode::Mode;

/// Below this many characters a company-score explanation is considered
/// degenerate and replaced wholesale. Tunes fallback sensitivity only.
const COMPANY_SCORE_MIN_EXPLANATION_LEN: usize = 20;
/// Same, for the full risk analysis.
const RISK_FULL_MIN_EXPLANATION_LEN: usize = 10;

static SCORE_OUT_OF_100: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Score:\s*(\d{1,3})/100").expect("valid score regex"));
static SCORE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Score:\s*(\d{1,3})").expect("valid score regex"));
static BARE_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([1-9]?[0-9]|100)\b").expect("valid score regex"));
static EXPLANATION_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Explanation:\s*(.*)").expect("valid explanation regex"));
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*\]\(.*\)").expect("valid link regex"));

const COMPANY_SCORE_FALLBACK_EXPLANATION: &str = "\
Score: 80/100

Top reasons:
- Good reputation for employee satisfaction and innovation
- Generally positive reviews on Glassdoor and Indeed
- Invests in technology and future skills";

const RISK_FULL_FALLBACK_EXPLANATION: &str = "No detailed AI analysis was available.";

const SQL_COURSE_TITLE: &str = "Databases and SQL for Data Science with Python";
const SQL_COURSE_EXPLANATION: &str = "\
[Databases and SQL for Data Science with Python](https://www.coursera.org/learn/sql-data-science)
Provider: Coursera
Short Description: Learn SQL basics, querying, and data analysis using real-world datasets.";

/// The structured result of one analysis request, the entire observable
/// output of the pipeline. `explanation` is omitted on the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Extracts the mode's expected structure from raw generated text.
/// `job_description` is consulted only for the course-mode fallback.
pub fn extract(mode: Mode, content: &str, job_description: Option<&str>) -> Analysis {
    match mode {
        Mode::Chatbot => Analysis {
            analysis: content.to_string(),
            explanation: None,
        },
        Mode::CompanyScore => extract_company_score(content),
        Mode::RiskFull => extract_risk_full(content),
        Mode::Course => extract_course(content, job_description),
        Mode::Autocomplete | Mode::Risk | Mode::General => extract_generic(content),
    }
}

fn extract_company_score(content: &str) -> Analysis {
    let score = SCORE_OUT_OF_100
        .captures(content)
        .map(|c| c[1].to_string())
        .or_else(|| BARE_SCORE.find(content).map(|m| m.as_str().to_string()));

    match score {
        Some(score) if content.trim().chars().count() >= COMPANY_SCORE_MIN_EXPLANATION_LEN => {
            Analysis {
                analysis: score,
                explanation: Some(content.to_string()),
            }
        }
        _ => {
            info!("Using static fallback for company_score");
            Analysis {
                analysis: "80".to_string(),
                explanation: Some(COMPANY_SCORE_FALLBACK_EXPLANATION.to_string()),
            }
        }
    }
}

fn extract_risk_full(content: &str) -> Analysis {
    let score = SCORE_LABEL
        .captures(content)
        .map(|c| c[1].to_string())
        .or_else(|| BARE_SCORE.find(content).map(|m| m.as_str().to_string()))
        .unwrap_or_else(|| "70".to_string());

    let explanation = EXPLANATION_SECTION
        .captures(content)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| content.to_string());

    let explanation = if explanation.chars().count() < RISK_FULL_MIN_EXPLANATION_LEN {
        info!("Using static fallback explanation for risk_full");
        RISK_FULL_FALLBACK_EXPLANATION.to_string()
    } else {
        explanation
    };

    Analysis {
        analysis: score,
        explanation: Some(explanation),
    }
}

/// The course contract demands a Markdown link or the literal no-course
/// sentence. When the model delivers neither usable, a known-good SQL course
/// covers the most common skill lookup; other skills pass through.
fn extract_course(content: &str, job_description: Option<&str>) -> Analysis {
    let degenerate =
        content.contains("No real course found") || !MARKDOWN_LINK.is_match(content);
    let skill = job_description.unwrap_or_default().to_lowercase();

    if degenerate && skill.contains("sql") {
        info!("Using static SQL course fallback");
        return Analysis {
            analysis: SQL_COURSE_TITLE.to_string(),
            explanation: Some(SQL_COURSE_EXPLANATION.to_string()),
        };
    }

    extract_generic(content)
}

fn extract_generic(content: &str) -> Analysis {
    let score = BARE_SCORE
        .find(content)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    Analysis {
        analysis: score,
        explanation: Some(content.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chatbot_passes_text_through_without_explanation() {
        let result = extract(Mode::Chatbot, "Consider a pilot training program.", None);
        assert_eq!(result.analysis, "Consider a pilot training program.");
        assert_eq!(result.explanation, None);
    }

    #[test]
    fn test_company_score_extracts_score_out_of_100() {
        let content = "Score: 85/100\n\nTop reasons:\n- x\n- y\n- z";
        let result = extract(Mode::CompanyScore, content, None);
        assert_eq!(result.analysis, "85");
        assert_eq!(result.explanation.as_deref(), Some(content));
    }

    #[test]
    fn test_company_score_falls_back_to_bare_integer() {
        let content = "I would estimate around 72 based on public reviews and growth.";
        let result = extract(Mode::CompanyScore, content, None);
        assert_eq!(result.analysis, "72");
    }

    #[test]
    fn test_company_score_short_output_uses_static_fallback() {
        let result = extract(Mode::CompanyScore, "N/A", None);
        assert_eq!(result.analysis, "80");
        assert_eq!(
            result.explanation.as_deref(),
            Some(COMPANY_SCORE_FALLBACK_EXPLANATION)
        );
    }

    #[test]
    fn test_company_score_scoreless_output_uses_static_fallback() {
        let content = "This company is well regarded for culture and flexibility overall.";
        let result = extract(Mode::CompanyScore, content, None);
        assert_eq!(result.analysis, "80");
    }

    #[test]
    fn test_risk_full_extracts_score_and_keeps_full_text() {
        let content = "Score: 42\nAutomatability: 70% automatable, 30% human oversight\n\nReasons:\n1. a\n2. b\n3. c";
        let result = extract(Mode::RiskFull, content, None);
        assert_eq!(result.analysis, "42");
        assert_eq!(result.explanation.as_deref(), Some(content));
    }

    #[test]
    fn test_risk_full_uses_explanation_section_when_present() {
        let content = "Score: 55\nExplanation: Routine data entry dominates this role.";
        let result = extract(Mode::RiskFull, content, None);
        assert_eq!(result.analysis, "55");
        assert_eq!(
            result.explanation.as_deref(),
            Some("Routine data entry dominates this role.")
        );
    }

    #[test]
    fn test_risk_full_scoreless_output_defaults_to_70() {
        let result = extract(Mode::RiskFull, "", None);
        assert_eq!(result.analysis, "70");
        assert_eq!(
            result.explanation.as_deref(),
            Some(RISK_FULL_FALLBACK_EXPLANATION)
        );
    }

    #[test]
    fn test_risk_full_short_explanation_replaced() {
        let result = extract(Mode::RiskFull, "Score: 30\nExplanation: ok", None);
        assert_eq!(result.analysis, "30");
        assert_eq!(
            result.explanation.as_deref(),
            Some(RISK_FULL_FALLBACK_EXPLANATION)
        );
    }

    #[test]
    fn test_course_no_course_found_with_sql_skill_uses_known_course() {
        let result = extract(Mode::Course, "No real course found.", Some("SQL"));
        assert_eq!(result.analysis, SQL_COURSE_TITLE);
        let explanation = result.explanation.unwrap();
        assert!(explanation.contains("https://www.coursera.org/learn/sql-data-science"));
    }

    #[test]
    fn test_course_missing_link_with_sql_skill_uses_known_course() {
        let result = extract(Mode::Course, "Try searching Coursera.", Some("advanced sql"));
        assert_eq!(result.analysis, SQL_COURSE_TITLE);
    }

    #[test]
    fn test_course_with_link_passes_through() {
        let content = "[Rust Fundamentals](https://www.coursera.org/learn/rust)  \nProvider: Coursera";
        let result = extract(Mode::Course, content, Some("rust"));
        assert_eq!(result.explanation.as_deref(), Some(content));
    }

    #[test]
    fn test_course_degenerate_without_sql_skill_passes_through() {
        let result = extract(Mode::Course, "No real course found.", Some("underwater basket weaving"));
        assert_eq!(result.analysis, "N/A");
        assert_eq!(result.explanation.as_deref(), Some("No real course found."));
    }

    #[test]
    fn test_generic_extracts_first_bare_integer() {
        let result = extract(Mode::Risk, "Score: 64\nThis role is moderately exposed.", None);
        assert_eq!(result.analysis, "64");
        assert!(result.explanation.is_some());
    }

    #[test]
    fn test_generic_matches_100() {
        let result = extract(Mode::General, "A perfect 100 fit.", None);
        assert_eq!(result.analysis, "100");
    }

    #[test]
    fn test_generic_without_number_yields_not_available() {
        let result = extract(Mode::Autocomplete, "Engineer, Analyst, Scientist", None);
        assert_eq!(result.analysis, "N/A");
        assert_eq!(
            result.explanation.as_deref(),
            Some("Engineer, Analyst, Scientist")
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let content = "Score: 85/100\n\nTop reasons:\n- a\n- b\n- c";
        let first = extract(Mode::CompanyScore, content, Some("SQL"));
        let second = extract(Mode::CompanyScore, content, Some("SQL"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_result_omits_absent_explanation() {
        let value = serde_json::to_value(extract(Mode::Chatbot, "hello", None)).unwrap();
        assert_eq!(value["analysis"], "hello");
        assert!(value.get("explanation").is_none());
    }
}
