use super::super::scoring::{AssessmentResults, Dimension};
use super::views::{DimensionEntry, ResultsSummary, ScoreBarEntry, FULL_MARK};
use chrono::NaiveDate;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

impl AssessmentResults {
    pub fn summary(&self) -> ResultsSummary {
        let score_bars = vec![
            ScoreBarEntry {
                name: "Psychometric Fit",
                score: self.psychometric_score,
            },
            ScoreBarEntry {
                name: "Technical Readiness",
                score: self.technical_score,
            },
            ScoreBarEntry {
                name: "Overall Score",
                score: self.overall_score,
            },
        ];

        let dimensions = Dimension::ordered()
            .into_iter()
            .map(|dimension| DimensionEntry {
                dimension,
                label: dimension.label(),
                score: self.wiscar.get(dimension),
                full_mark: FULL_MARK,
            })
            .collect();

        ResultsSummary {
            overall_score: self.overall_score,
            recommendation: self.recommendation,
            recommendation_label: self.recommendation.label(),
            score_bars,
            dimensions,
            strengths: self.strengths.clone(),
            improvements: self.improvements.clone(),
            next_steps: self.next_steps.clone(),
            alternative_roles: self.alternative_roles.clone(),
        }
    }
}

fn bar(score: u8) -> String {
    let filled = usize::from(score.min(FULL_MARK)) * BAR_WIDTH / usize::from(FULL_MARK);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Printable version of the results dashboard.
pub fn render_text_report(results: &AssessmentResults, generated_on: NaiveDate) -> String {
    let summary = results.summary();
    let mut out = String::new();

    writeln!(&mut out, "Performance Marketing Analyst career fit").expect("write title");
    writeln!(&mut out, "Generated {generated_on}").expect("write date");
    writeln!(
        &mut out,
        "\nRecommendation: {} (overall {}%)",
        summary.recommendation_label, summary.overall_score
    )
    .expect("write recommendation");

    writeln!(&mut out, "\nScores").expect("write scores heading");
    for entry in &summary.score_bars {
        writeln!(
            &mut out,
            "- {:<20} {} {:>3}%",
            entry.name,
            bar(entry.score),
            entry.score
        )
        .expect("write score bar");
    }

    writeln!(&mut out, "\nWISCAR framework").expect("write wiscar heading");
    for entry in &summary.dimensions {
        writeln!(
            &mut out,
            "- {:<20} {} {:>3}%",
            entry.label,
            bar(entry.score),
            entry.score
        )
        .expect("write dimension bar");
    }

    writeln!(&mut out, "\nYour strengths").expect("write strengths heading");
    for strength in &summary.strengths {
        writeln!(&mut out, "- {strength}").expect("write strength");
    }

    writeln!(&mut out, "\nAreas for improvement").expect("write improvements heading");
    for improvement in &summary.improvements {
        writeln!(&mut out, "- {improvement}").expect("write improvement");
    }

    writeln!(&mut out, "\nLearning path").expect("write learning path heading");
    for (position, step) in summary.next_steps.iter().enumerate() {
        writeln!(&mut out, "{}. {step}", position + 1).expect("write learning step");
    }

    if !summary.alternative_roles.is_empty() {
        writeln!(&mut out, "\nAlternative career paths").expect("write alternatives heading");
        for role in &summary.alternative_roles {
            writeln!(&mut out, "- {role}").expect("write alternative role");
        }
    }

    out
}
