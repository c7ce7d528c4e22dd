use super::catalog::QuestionCatalog;
use super::domain::{Answer, AnswerError, AnswerValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Validated answers for one session, keyed by question id.
///
/// Entries are only ever added or overwritten; nothing removes an answer
/// once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<&'static str, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `value` against the catalog entry for `question_id` and
    /// stores it, replacing any earlier answer.
    pub fn record(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<&Answer, AnswerError> {
        let question = catalog
            .find(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;
        let answer = question.accept(value.into())?;

        self.answers.insert(question.id, answer);
        Ok(&self.answers[question.id])
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Answer)> {
        self.answers.iter().map(|(id, answer)| (*id, answer))
    }

    /// True once every catalog question has an answer.
    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        catalog
            .questions()
            .iter()
            .all(|question| self.contains(question.id))
    }
}
