mod summary;
pub mod views;

pub use summary::render_text_report;
pub use views::{DimensionEntry, ResultsSummary, ScoreBarEntry};
