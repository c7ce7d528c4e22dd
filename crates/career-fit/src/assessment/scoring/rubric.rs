use super::super::answers::AnswerSet;
use super::super::domain::Answer;
use super::WiscarScores;

/// Agreement questions averaged into the psychometric fit score.
pub(crate) const PSYCHOMETRIC_QUESTIONS: [&str; 6] = [
    "interest_analytics",
    "interest_campaigns",
    "personality_detail",
    "personality_stress",
    "cognitive_analytical",
    "grit_persistence",
];

/// Knowledge checks worth a flat bonus when answered with the listed option.
pub(crate) const KNOWLEDGE_CHECKS: [(&str, &str); 3] = [
    ("math_roi", "200%"),
    ("logic_optimization", "Improve landing page"),
    ("analytics_knowledge", "Cost Per Action"),
];

pub(crate) const KNOWLEDGE_BONUS: u32 = 25;
pub(crate) const TOOLS_QUESTION: &str = "tools_familiarity";
const TOOLS_WEIGHT: f64 = 2.5;

const ATTRIBUTION_QUESTION: &str = "cognitive_attribution";
const ATTRIBUTION_ANSWER: &str = "Google Search";

const UNANSWERED_ORDINAL: u8 = 0;

/// Scale position of an agreement answer. Anything else under the id,
/// including no answer at all, contributes nothing.
pub(crate) fn agreement_ordinal(answers: &AnswerSet, question_id: &str) -> u8 {
    match answers.get(question_id) {
        Some(Answer::Agreement(level)) => level.ordinal(),
        Some(Answer::Choice(_) | Answer::Numeric(_)) | None => UNANSWERED_ORDINAL,
    }
}

fn chose(answers: &AnswerSet, question_id: &str, option: &str) -> bool {
    matches!(answers.get(question_id), Some(Answer::Choice(label)) if label == option)
}

fn numeric(answers: &AnswerSet, question_id: &str) -> i32 {
    match answers.get(question_id) {
        Some(Answer::Numeric(value)) => *value,
        _ => 0,
    }
}

pub(crate) fn to_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn psychometric_score(answers: &AnswerSet) -> u8 {
    let total: u32 = PSYCHOMETRIC_QUESTIONS
        .iter()
        .map(|id| u32::from(agreement_ordinal(answers, id)) * 20)
        .sum();

    to_score(f64::from(total) / PSYCHOMETRIC_QUESTIONS.len() as f64)
}

pub(crate) fn technical_score(answers: &AnswerSet) -> u8 {
    let bonuses: u32 = KNOWLEDGE_CHECKS
        .iter()
        .filter(|(id, option)| chose(answers, id, option))
        .map(|_| KNOWLEDGE_BONUS)
        .sum();
    let tools = (f64::from(numeric(answers, TOOLS_QUESTION)) * TOOLS_WEIGHT).round();

    to_score(f64::from(bonuses) + tools)
}

pub(crate) fn wiscar_scores(answers: &AnswerSet) -> WiscarScores {
    let single = |id: &str| agreement_ordinal(answers, id) * 20;

    // sum of two ordinals weighted by 10, unlike the single-question dimensions
    let interest = (agreement_ordinal(answers, "interest_analytics")
        + agreement_ordinal(answers, "interest_campaigns"))
        * 10;

    let cognitive = if chose(answers, ATTRIBUTION_QUESTION, ATTRIBUTION_ANSWER) {
        100
    } else {
        50
    };

    WiscarScores {
        will: single("will_determination"),
        interest,
        skill: single("skill_learning"),
        cognitive,
        ability: single("ability_feedback"),
        real_world: single("real_world_testing"),
    }
}

pub(crate) fn overall_score(psychometric: u8, technical: u8, wiscar: &WiscarScores) -> u8 {
    let wiscar_mean = wiscar.mean();
    to_score((f64::from(psychometric) + f64::from(technical) + wiscar_mean) / 3.0)
}
