use super::super::scoring::{Dimension, Recommendation};
use serde::Serialize;

pub const FULL_MARK: u8 = 100;

/// One spoke of the WISCAR radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionEntry {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: u8,
    pub full_mark: u8,
}

/// One bar of the headline score chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBarEntry {
    pub name: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub score_bars: Vec<ScoreBarEntry>,
    pub dimensions: Vec<DimensionEntry>,
    pub strengths: Vec<&'static str>,
    pub improvements: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_roles: Vec<&'static str>,
}
