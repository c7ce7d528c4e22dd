#![allow(dead_code)]

use career_fit::assessment::{AgreementLevel, AnswerSet, AnswerValue, QuestionCatalog, QuestionKind};

pub const CORRECT_CHOICES: [(&str, &str); 4] = [
    ("math_roi", "200%"),
    ("logic_optimization", "Improve landing page"),
    ("analytics_knowledge", "Cost Per Action"),
    ("cognitive_attribution", "Google Search"),
];

pub fn correct_choice(question_id: &str) -> Option<&'static str> {
    CORRECT_CHOICES
        .iter()
        .find(|(id, _)| *id == question_id)
        .map(|(_, option)| *option)
}

/// Every agreement question gets `level`, every choice question listed in
/// `choices` gets its option, and the slider gets `tools`.
pub fn answer_sheet(level: AgreementLevel, choices: &[(&str, &str)], tools: i32) -> AnswerSet {
    let catalog = QuestionCatalog::standard();
    let mut answers = AnswerSet::new();

    for question in catalog.questions() {
        let value: Option<AnswerValue> = match &question.kind {
            QuestionKind::Agreement => Some(level.into()),
            QuestionKind::NumericScale(_) => Some(tools.into()),
            QuestionKind::SingleChoice { .. } => choices
                .iter()
                .find(|(id, _)| *id == question.id)
                .map(|(_, option)| AnswerValue::from(*option)),
        };

        if let Some(value) = value {
            answers
                .record(&catalog, question.id, value)
                .expect("fixture answer is valid");
        }
    }

    answers
}
