mod guidance;
mod rubric;

use super::answers::AnswerSet;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Career recommendation derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Positive,
    Neutral,
    Negative,
}

impl Recommendation {
    pub const fn from_overall(overall: u8) -> Self {
        if overall >= 80 {
            Self::Positive
        } else if overall >= 60 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Yes",
            Self::Neutral => "Maybe",
            Self::Negative => "No",
        }
    }
}

/// One of the six WISCAR facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::Ability => "Ability",
            Self::RealWorld => "Real-World",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }

    pub fn total(&self) -> u32 {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| u32::from(self.get(dimension)))
            .sum()
    }

    /// Unrounded mean of the six dimensions.
    pub fn mean(&self) -> f64 {
        f64::from(self.total()) / Dimension::ordered().len() as f64
    }
}

/// Everything the results screen shows, recomputed from the answers on
/// every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResults {
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar: WiscarScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub strengths: Vec<&'static str>,
    pub improvements: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
    pub alternative_roles: Vec<&'static str>,
}

/// Scores a (possibly partial) answer set. Never fails: unanswered
/// questions contribute zero, or 50 for the attribution check.
pub fn score(answers: &AnswerSet) -> AssessmentResults {
    let psychometric_score = rubric::psychometric_score(answers);
    let technical_score = rubric::technical_score(answers);
    let wiscar = rubric::wiscar_scores(answers);
    let overall_score = rubric::overall_score(psychometric_score, technical_score, &wiscar);
    let recommendation = Recommendation::from_overall(overall_score);

    info!(
        answered = answers.len(),
        psychometric_score,
        technical_score,
        overall_score,
        recommendation = recommendation.label(),
        "assessment scored"
    );

    AssessmentResults {
        psychometric_score,
        technical_score,
        wiscar,
        overall_score,
        recommendation,
        strengths: guidance::strengths(overall_score),
        improvements: guidance::improvements(overall_score),
        next_steps: guidance::next_steps(recommendation),
        alternative_roles: guidance::alternative_roles(recommendation),
    }
}
