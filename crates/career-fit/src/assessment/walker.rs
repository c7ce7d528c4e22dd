use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{Answer, AnswerError, AnswerValue, Question};
use tracing::debug;

/// Position and answers of one respondent walking the catalog.
///
/// Every operation leaves `self` untouched and returns the next state, so a
/// host can keep or drop any intermediate session. The index always points
/// at a catalog question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSession<'a> {
    catalog: &'a QuestionCatalog,
    index: usize,
    answers: AnswerSet,
}

/// Result of [`AssessmentSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<'a> {
    Moved(AssessmentSession<'a>),
    /// Advanced past the last question; the answers go to the scorer.
    Completed(AnswerSet),
}

impl<'a> AssessmentSession<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self {
            catalog,
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> &'a Question {
        // catalogs are never empty and the index is kept in bounds
        &self.catalog.questions()[self.index]
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answer_for(self.current_question().id)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.catalog.len()
    }

    /// Share of the questionnaire reached, counting the current question.
    pub fn progress_pct(&self) -> f32 {
        (self.index + 1) as f32 / self.catalog.len() as f32 * 100.0
    }

    /// Hosts disable forward navigation until the current question has an
    /// answer; [`advance`](Self::advance) itself does not check.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last() {
            "Get Results"
        } else {
            "Next"
        }
    }

    pub fn record_answer(
        &self,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<Self, AnswerError> {
        let mut next = self.clone();
        let answer = next.answers.record(self.catalog, question_id, value)?;
        debug!(question_id, answer = %answer.display(), "answer recorded");
        Ok(next)
    }

    /// Records an answer for whichever question is on screen.
    pub fn answer_current(&self, value: impl Into<AnswerValue>) -> Result<Self, AnswerError> {
        self.record_answer(self.current_question().id, value)
    }

    pub fn advance(&self) -> Transition<'a> {
        if self.is_last() {
            debug!(answered = self.answers.len(), "questionnaire completed");
            return Transition::Completed(self.answers.clone());
        }

        let mut next = self.clone();
        next.index += 1;
        debug!(index = next.index, "advanced to next question");
        Transition::Moved(next)
    }

    pub fn retreat(&self) -> Self {
        let mut next = self.clone();
        next.index = self.index.saturating_sub(1);
        next
    }
}
