//! Analysis modes — the enumerant selecting prompt template, sampling
//! parameters, and extraction rule for a request.

use crate::groq_client::GenerationParams;

/// Closed set of analysis modes. Anything the caller sends outside this set
/// (or no mode at all) lands on `General`, which echoes the request fields
/// under a generic instruction rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    Chatbot,
    Autocomplete,
    Course,
    CompanyScore,
    Risk,
    RiskFull,
    #[default]
    General,
}

impl Mode {
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode {
            Some("chatbot") => Mode::Chatbot,
            Some("autocomplete") => Mode::Autocomplete,
            Some("course") => Mode::Course,
            Some("company_score") => Mode::CompanyScore,
            Some("risk") => Mode::Risk,
            Some("risk_full") => Mode::RiskFull,
            _ => Mode::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chatbot => "chatbot",
            Mode::Autocomplete => "autocomplete",
            Mode::Course => "course",
            Mode::CompanyScore => "company_score",
            Mode::Risk => "risk",
            Mode::RiskFull => "risk_full",
            Mode::General => "general",
        }
    }

    /// Sampling settings per mode. Score-producing modes run hotter so
    /// similar inputs do not collapse onto identical outputs; short-form
    /// modes keep tight token budgets.
    pub fn generation_params(&self) -> GenerationParams {
        match self {
            Mode::Risk | Mode::CompanyScore => GenerationParams {
                max_tokens: 80,
                temperature: 0.8,
            },
            Mode::RiskFull => GenerationParams {
                max_tokens: 120,
                temperature: 0.9,
            },
            Mode::Course => GenerationParams {
                max_tokens: 80,
                temperature: 0.2,
            },
            Mode::Chatbot => GenerationParams {
                max_tokens: 120,
                temperature: 0.2,
            },
            Mode::Autocomplete | Mode::General => GenerationParams {
                max_tokens: 100,
                temperature: 0.2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes_parse_to_their_variant() {
        assert_eq!(Mode::from_request(Some("chatbot")), Mode::Chatbot);
        assert_eq!(Mode::from_request(Some("autocomplete")), Mode::Autocomplete);
        assert_eq!(Mode::from_request(Some("course")), Mode::Course);
        assert_eq!(Mode::from_request(Some("company_score")), Mode::CompanyScore);
        assert_eq!(Mode::from_request(Some("risk")), Mode::Risk);
        assert_eq!(Mode::from_request(Some("risk_full")), Mode::RiskFull);
    }

    #[test]
    fn test_unknown_or_missing_mode_falls_back_to_general() {
        assert_eq!(Mode::from_request(Some("essay")), Mode::General);
        assert_eq!(Mode::from_request(Some("")), Mode::General);
        assert_eq!(Mode::from_request(None), Mode::General);
        // Matching is exact, not case-insensitive
        assert_eq!(Mode::from_request(Some("Chatbot")), Mode::General);
    }

    #[test]
    fn test_generation_params_per_mode() {
        let risk = Mode::Risk.generation_params();
        assert_eq!(risk.max_tokens, 80);
        assert!((risk.temperature - 0.8).abs() < f32::EPSILON);

        let company = Mode::CompanyScore.generation_params();
        assert_eq!(company.max_tokens, 80);
        assert!((company.temperature - 0.8).abs() < f32::EPSILON);

        let risk_full = Mode::RiskFull.generation_params();
        assert_eq!(risk_full.max_tokens, 120);
        assert!((risk_full.temperature - 0.9).abs() < f32::EPSILON);

        let course = Mode::Course.generation_params();
        assert_eq!(course.max_tokens, 80);
        assert!((course.temperature - 0.2).abs() < f32::EPSILON);

        let chatbot = Mode::Chatbot.generation_params();
        assert_eq!(chatbot.max_tokens, 120);

        let general = Mode::General.generation_params();
        assert_eq!(general.max_tokens, 100);
        assert!((general.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(Mode::Autocomplete.generation_params(), general);
    }
}
