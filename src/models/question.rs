// src/models/question.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::LIKERT_MIN;

/// The five trait domains of the Big Five inventory.
///
/// Serialized in camelCase to match the domain tags of the question
/// table (e.g. "negativeEmotionality").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TraitDomain {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    NegativeEmotionality,
    OpenMindedness,
}

impl TraitDomain {
    /// Human-readable name, used as the chart category label.
    pub fn label(&self) -> &'static str {
        match self {
            TraitDomain::Extraversion => "Extraversion",
            TraitDomain::Agreeableness => "Agreeableness",
            TraitDomain::Conscientiousness => "Conscientiousness",
            TraitDomain::NegativeEmotionality => "Negative Emotionality",
            TraitDomain::OpenMindedness => "Open-Mindedness",
        }
    }
}

/// A single inventory item.
///
/// `reverse_scored` marks items whose wording is negatively correlated
/// with their domain; the scorer inverts their raw value before
/// aggregation.
#[derive(Debug, Clone)]
pub struct Question {
    /// 1-based, unique, order-significant.
    pub id: i64,
    pub text: String,
    pub reverse_scored: bool,
    pub domain: TraitDomain,
}

/// The fixed Likert answer scale, lowest to highest agreement.
pub const LIKERT_LABELS: [&str; 5] = [
    "Disagree strongly",
    "Disagree a little",
    "Neutral; no opinion",
    "Agree a little",
    "Agree strongly",
];

/// One selectable Likert option as sent to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LikertChoice {
    pub value: u8,
    pub label: String,
}

/// The five fixed choices offered with every question.
pub fn likert_choices() -> Vec<LikertChoice> {
    LIKERT_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| LikertChoice {
            value: LIKERT_MIN + i as u8,
            label: (*label).to_string(),
        })
        .collect()
}

/// DTO for submitting an answer to the current question.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnswerRequest {
    /// Likert response: 1 = Disagree strongly .. 5 = Agree strongly.
    #[validate(range(min = 1, max = 5))]
    pub value: u8,
}

/// DTO for the question currently shown to the user.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionView {
    pub id: i64,
    pub text: String,
    /// 1-based position within the inventory.
    pub position: usize,
    pub total: usize,
    /// Percentage of the inventory reached, for a progress bar.
    pub progress_percent: f64,
    /// Previously chosen value at this position, if the user is revisiting.
    pub selected: Option<u8>,
    pub choices: Vec<LikertChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LIKERT_MAX;

    #[test]
    fn likert_choices_span_the_scale_in_order() {
        let choices = likert_choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices.first().unwrap().value, LIKERT_MIN);
        assert_eq!(choices.last().unwrap().value, LIKERT_MAX);
        assert_eq!(choices[0].label, "Disagree strongly");
        assert_eq!(choices[4].label, "Agree strongly");
    }
}
