use career_fit::assessment::{
    AnswerSet, AnswerValue, AssessmentSession, Question, QuestionCatalog, QuestionKind,
    Transition,
};
use career_fit::error::AppError;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug)]
pub(crate) enum SessionOutcome {
    Completed(AnswerSet),
    Abandoned { answered: usize },
}

enum Input {
    Back,
    Quit,
    Continue,
    Answer(AnswerValue),
}

/// Drives a questionnaire session over a line-oriented terminal.
///
/// Each valid answer moves on to the next question. A blank line keeps the
/// current answer and moves on, `b` goes back, `q` or end of input quits.
pub(crate) fn run_session<R, W>(
    catalog: &QuestionCatalog,
    mut input: R,
    output: &mut W,
) -> Result<SessionOutcome, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = AssessmentSession::new(catalog);
    writeln!(output, "Performance Marketing Assessment")?;

    loop {
        render_question(&session, output)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(abandon(&session));
        }

        let question = session.current_question();
        let value = match parse_input(question, &line) {
            Input::Quit => return Ok(abandon(&session)),
            Input::Back => {
                session = session.retreat();
                continue;
            }
            Input::Continue => None,
            Input::Answer(value) => Some(value),
        };

        if let Some(value) = value {
            match session.answer_current(value) {
                Ok(next) => session = next,
                Err(err) => {
                    writeln!(output, "  {err}")?;
                    continue;
                }
            }
        }

        if !session.can_advance() {
            writeln!(output, "  Please answer before continuing.")?;
            continue;
        }

        match session.advance() {
            Transition::Moved(next) => session = next,
            Transition::Completed(answers) => {
                info!(answered = answers.len(), "interactive assessment completed");
                return Ok(SessionOutcome::Completed(answers));
            }
        }
    }
}

fn abandon(session: &AssessmentSession<'_>) -> SessionOutcome {
    let answered = session.answers().len();
    debug!(answered, "interactive assessment abandoned");
    SessionOutcome::Abandoned { answered }
}

fn render_question<W: Write>(session: &AssessmentSession<'_>, output: &mut W) -> std::io::Result<()> {
    let question = session.current_question();
    writeln!(
        output,
        "\nQuestion {} of {} ({:.0}%) | {}",
        session.current_index() + 1,
        session.catalog().len(),
        session.progress_pct(),
        question.section.label()
    )?;
    writeln!(output, "{}", question.prompt)?;

    match &question.kind {
        QuestionKind::NumericScale(range) => {
            writeln!(output, "  Scale {} to {}", range.min, range.max)?;
        }
        QuestionKind::SingleChoice { .. } | QuestionKind::Agreement => {
            for (position, choice) in question.choices().iter().enumerate() {
                writeln!(output, "  {}) {}", position + 1, choice)?;
            }
        }
    }

    if let Some(answer) = session.current_answer() {
        writeln!(output, "  Current answer: {}", answer.display())?;
    }

    let back = if session.is_first() { "" } else { ", b = back" };
    write!(
        output,
        "Answer{back}, q = quit, enter = {}: ",
        session.advance_label()
    )?;
    output.flush()
}

/// Choice questions take either the option number or its label.
fn parse_input(question: &Question, line: &str) -> Input {
    let raw = line.trim();
    match raw {
        "" => return Input::Continue,
        "b" | "B" => return Input::Back,
        "q" | "Q" => return Input::Quit,
        _ => {}
    }

    match &question.kind {
        QuestionKind::NumericScale(_) => match raw.parse::<i32>() {
            Ok(number) => Input::Answer(AnswerValue::Number(number)),
            Err(_) => Input::Answer(AnswerValue::Text(raw.to_string())),
        },
        QuestionKind::SingleChoice { .. } | QuestionKind::Agreement => {
            let choices = question.choices();
            let picked = raw
                .parse::<usize>()
                .ok()
                .and_then(|position| position.checked_sub(1))
                .and_then(|index| choices.get(index).copied());

            match picked {
                Some(label) => Input::Answer(label.into()),
                None => Input::Answer(raw.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::{score, Recommendation};
    use std::io::Cursor;

    fn run(script: &str) -> (SessionOutcome, String) {
        let catalog = QuestionCatalog::standard();
        let mut output = Vec::new();
        let outcome =
            run_session(&catalog, Cursor::new(script.to_string()), &mut output).expect("runs");
        (outcome, String::from_utf8(output).expect("utf8 output"))
    }

    fn perfect_script() -> String {
        [
            "5", "5", "5", "5", "5", "5", // psychometric
            "1", "2", "10", "Cost Per Action", // technical
            "5", "5", "2", "5", "5", // wiscar
        ]
        .join("\n")
            + "\n"
    }

    #[test]
    fn scripted_session_completes_with_top_scores() {
        let (outcome, transcript) = run(&perfect_script());

        let answers = match outcome {
            SessionOutcome::Completed(answers) => answers,
            other => panic!("expected completion, got {other:?}"),
        };
        assert_eq!(answers.len(), 15);
        assert!(transcript.contains("Question 15 of 15 (100%)"));
        assert!(transcript.contains("enter = Get Results"));

        let results = score(&answers);
        assert_eq!(results.overall_score, 100);
        assert_eq!(results.recommendation, Recommendation::Positive);
    }

    #[test]
    fn blank_line_without_answer_is_refused() {
        let (outcome, transcript) = run("\nq\n");

        assert!(matches!(outcome, SessionOutcome::Abandoned { answered: 0 }));
        assert!(transcript.contains("Please answer before continuing."));
    }

    #[test]
    fn invalid_answers_are_reported_and_retried() {
        let (outcome, transcript) = run("9\nsomewhat\n4\nq\n");

        assert!(transcript.contains("'9' is not an option"));
        assert!(transcript.contains("'somewhat' is not an option"));
        assert!(matches!(outcome, SessionOutcome::Abandoned { answered: 1 }));
    }

    #[test]
    fn back_returns_to_previous_answer() {
        let (_, transcript) = run("3\nb\n\nq\n");

        assert!(transcript.contains("Current answer: Neutral"));
        assert_eq!(transcript.matches("Question 2 of 15").count(), 2);
    }

    #[test]
    fn end_of_input_abandons_session() {
        let (outcome, _) = run("4\n4\n");
        assert!(matches!(outcome, SessionOutcome::Abandoned { answered: 2 }));
    }
}
