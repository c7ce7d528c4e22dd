//! Career-fit questionnaire: the fixed catalog, the session walker that
//! collects answers, and the scorer that turns them into results.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod import;
pub mod report;
pub mod router;
pub mod scoring;
pub mod walker;

pub use answers::AnswerSet;
pub use catalog::{QuestionCatalog, QuestionView};
pub use domain::{
    AgreementLevel, Answer, AnswerError, AnswerValue, NumericRange, Question, QuestionKind,
    Section,
};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use report::{render_text_report, DimensionEntry, ResultsSummary, ScoreBarEntry};
pub use router::assessment_router;
pub use scoring::{score, AssessmentResults, Dimension, Recommendation, WiscarScores};
pub use walker::{AssessmentSession, Transition};
