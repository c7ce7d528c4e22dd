mod parser;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{AnswerError, AnswerValue, QuestionKind};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("answer sheet must be a JSON object of question id to answer")]
    NotAnObject,
    #[error("answer for '{question_id}' must be a string or an integer")]
    UnsupportedValue { question_id: String },
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Builds an [`AnswerSet`] from an exported answer sheet, validating every
/// entry against the catalog.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    /// Reads a `.json` file as a JSON answer map and anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(
        catalog: &QuestionCatalog,
        path: P,
    ) -> Result<AnswerSet, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let value: Value = serde_json::from_reader(file)?;
            Self::from_json_value(catalog, &value)
        } else {
            Self::from_csv_reader(catalog, file)
        }
    }

    pub fn from_csv_reader<R: Read>(
        catalog: &QuestionCatalog,
        reader: R,
    ) -> Result<AnswerSet, AnswerImportError> {
        let mut answers = AnswerSet::new();
        for row in parser::parse_rows(reader)? {
            let value = text_for_kind(catalog, &row.question_id, &row.answer);
            answers.record(catalog, &row.question_id, value)?;
        }

        debug!(answered = answers.len(), "imported CSV answer sheet");
        Ok(answers)
    }

    /// Accepts `{ "question_id": "label" | integer }`, the shape the
    /// questionnaire hands to the results screen.
    pub fn from_json_value(
        catalog: &QuestionCatalog,
        value: &Value,
    ) -> Result<AnswerSet, AnswerImportError> {
        let entries = value.as_object().ok_or(AnswerImportError::NotAnObject)?;

        let mut answers = AnswerSet::new();
        for (question_id, raw) in entries {
            let value = match raw {
                Value::String(label) => text_for_kind(catalog, question_id, label),
                Value::Number(number) => number
                    .as_i64()
                    .and_then(|number| i32::try_from(number).ok())
                    .map(AnswerValue::Number)
                    .ok_or_else(|| AnswerImportError::UnsupportedValue {
                        question_id: question_id.clone(),
                    })?,
                _ => {
                    return Err(AnswerImportError::UnsupportedValue {
                        question_id: question_id.clone(),
                    })
                }
            };
            answers.record(catalog, question_id, value)?;
        }

        debug!(answered = answers.len(), "imported JSON answer sheet");
        Ok(answers)
    }

}

/// Text cells hold numbers for numeric-scale questions.
fn text_for_kind(catalog: &QuestionCatalog, question_id: &str, raw: &str) -> AnswerValue {
    let numeric = catalog
        .find(question_id)
        .is_some_and(|question| matches!(question.kind, QuestionKind::NumericScale(_)));

    match raw.trim().parse::<i32>() {
        Ok(number) if numeric => AnswerValue::Number(number),
        _ => AnswerValue::Text(raw.trim().to_string()),
    }
}
