use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display grouping for the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar,
}

impl Section {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical",
            Self::Wiscar => "WISCAR Framework",
        }
    }
}

/// Five-point agree/disagree scale shared by every agreement question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgreementLevel {
    #[serde(rename = "Strongly Disagree")]
    StronglyDisagree,
    #[serde(rename = "Disagree")]
    Disagree,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Agree")]
    Agree,
    #[serde(rename = "Strongly Agree")]
    StronglyAgree,
}

impl AgreementLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StronglyDisagree,
            Self::Disagree,
            Self::Neutral,
            Self::Agree,
            Self::StronglyAgree,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly Disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }

    /// Position on the scale, 1 for the lowest through 5 for the highest.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::StronglyDisagree => 1,
            Self::Disagree => 2,
            Self::Neutral => 3,
            Self::Agree => 4,
            Self::StronglyAgree => 5,
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(raw))
    }
}

/// Inclusive bounds and grid for a numeric-scale question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumericRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl NumericRange {
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max && (value - self.min) % self.step == 0
    }
}

/// How a question is answered, with the data each kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    SingleChoice { options: Vec<&'static str> },
    NumericScale(NumericRange),
    Agreement,
}

impl QuestionKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SingleChoice { .. } => "single_choice",
            Self::NumericScale(_) => "numeric_scale",
            Self::Agreement => "agreement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub section: Section,
    pub kind: QuestionKind,
    pub prompt: &'static str,
}

impl Question {
    /// Labels a respondent may pick from, in display order. Numeric
    /// questions have none.
    pub fn choices(&self) -> Vec<&'static str> {
        match &self.kind {
            QuestionKind::SingleChoice { options } => options.clone(),
            QuestionKind::Agreement => AgreementLevel::ordered()
                .into_iter()
                .map(AgreementLevel::label)
                .collect(),
            QuestionKind::NumericScale(_) => Vec::new(),
        }
    }

    /// Checks `value` against this question's kind and produces the typed
    /// answer that gets stored.
    pub fn accept(&self, value: AnswerValue) -> Result<Answer, AnswerError> {
        match (&self.kind, value) {
            (QuestionKind::SingleChoice { options }, AnswerValue::Text(label)) => {
                let label = label.trim();
                options
                    .iter()
                    .find(|option| **option == label)
                    .map(|option| Answer::Choice(option.to_string()))
                    .ok_or_else(|| AnswerError::UnknownChoice {
                        question_id: self.id,
                        value: label.to_string(),
                    })
            }
            (QuestionKind::Agreement, AnswerValue::Text(label)) => {
                AgreementLevel::from_label(&label)
                    .map(Answer::Agreement)
                    .ok_or(AnswerError::UnknownChoice {
                        question_id: self.id,
                        value: label,
                    })
            }
            (QuestionKind::NumericScale(range), AnswerValue::Number(value)) => {
                if range.contains(value) {
                    Ok(Answer::Numeric(value))
                } else {
                    Err(AnswerError::OutOfRange {
                        question_id: self.id,
                        value,
                        range: *range,
                    })
                }
            }
            (kind, _) => Err(AnswerError::KindMismatch {
                question_id: self.id,
                expected: kind.label(),
            }),
        }
    }
}

/// Untyped input as it arrives from a prompt, a form or an answer file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i32),
    Text(String),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<AgreementLevel> for AnswerValue {
    fn from(value: AgreementLevel) -> Self {
        Self::Text(value.label().to_string())
    }
}

/// A validated answer. Only [`Question::accept`] builds these for an
/// [`AnswerSet`](super::AnswerSet), so the variant always matches the
/// question kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Choice(String),
    Agreement(AgreementLevel),
    Numeric(i32),
}

impl Answer {
    pub fn display(&self) -> String {
        match self {
            Answer::Choice(label) => label.clone(),
            Answer::Agreement(level) => level.label().to_string(),
            Answer::Numeric(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("'{value}' is not an option for question '{question_id}'")]
    UnknownChoice {
        question_id: &'static str,
        value: String,
    },
    #[error(
        "{value} is outside {}..={} (step {}) for question '{question_id}'",
        .range.min,
        .range.max,
        .range.step
    )]
    OutOfRange {
        question_id: &'static str,
        value: i32,
        range: NumericRange,
    },
    #[error("question '{question_id}' expects a {expected} answer")]
    KindMismatch {
        question_id: &'static str,
        expected: &'static str,
    },
}
