use crate::infra::{init_cli_telemetry, parse_date};
use crate::interactive::{run_session, SessionOutcome};
use career_fit::assessment::{
    render_text_report, score, AnswerSet, AnswerSheetImporter, QuestionCatalog, QuestionKind,
    Section,
};
use career_fit::error::AppError;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Print the results as JSON instead of the printable report
    #[arg(long)]
    pub(crate) json: bool,
    /// Date stamped on the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer sheet to score; `.json` files are read as a JSON object, others as CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the results as JSON instead of the printable report
    #[arg(long)]
    pub(crate) json: bool,
    /// Date stamped on the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;
    let catalog = QuestionCatalog::standard();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = run_session(&catalog, stdin.lock(), &mut stdout)?;

    match outcome {
        SessionOutcome::Completed(answers) => {
            writeln!(stdout)?;
            print_results(&answers, args.json, args.today, &mut stdout)
        }
        SessionOutcome::Abandoned { answered } => {
            writeln!(
                stdout,
                "\nAssessment abandoned after {answered} answer(s); nothing was saved."
            )?;
            Ok(())
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        json,
        today,
    } = args;

    init_cli_telemetry()?;
    let catalog = QuestionCatalog::standard();
    let answers = AnswerSheetImporter::from_path(&catalog, answers)?;

    if !answers.is_complete(&catalog) {
        eprintln!(
            "note: {} of {} questions answered; unanswered questions score as zero",
            answers.len(),
            catalog.len()
        );
    }

    print_results(&answers, json, today, &mut io::stdout())
}

pub(crate) fn list_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let mut stdout = io::stdout();
    write_questions(&catalog, args.json, &mut stdout)
}

fn write_questions<W: Write>(
    catalog: &QuestionCatalog,
    json: bool,
    output: &mut W,
) -> Result<(), AppError> {
    if json {
        serde_json::to_writer_pretty(&mut *output, &catalog.view())?;
        writeln!(output)?;
        return Ok(());
    }

    let mut position = 0;
    for section in Section::ordered() {
        writeln!(output, "{}", section.label())?;
        for question in catalog.questions_in(section) {
            position += 1;
            writeln!(output, "{:>2}. [{}] {}", position, question.id, question.prompt)?;
            match &question.kind {
                QuestionKind::NumericScale(range) => writeln!(
                    output,
                    "    scale {}..={} (step {})",
                    range.min, range.max, range.step
                )?,
                QuestionKind::SingleChoice { .. } | QuestionKind::Agreement => {
                    writeln!(output, "    {}", question.choices().join(" | "))?
                }
            }
        }
        writeln!(output)?;
    }

    Ok(())
}

fn print_results<W: Write>(
    answers: &AnswerSet,
    json: bool,
    today: Option<NaiveDate>,
    output: &mut W,
) -> Result<(), AppError> {
    let results = score(answers);

    if json {
        let payload = json!({
            "answered": answers.len(),
            "results": results,
            "summary": results.summary(),
        });
        serde_json::to_writer_pretty(&mut *output, &payload)?;
        writeln!(output)?;
    } else {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        write!(output, "{}", render_text_report(&results, today))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render(answers: &AnswerSet, json: bool) -> String {
        let mut output = Vec::new();
        let today = NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date");
        print_results(answers, json, Some(today), &mut output).expect("renders");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn print_results_renders_text_report() {
        let text = render(&AnswerSet::new(), false);
        assert!(text.starts_with("Performance Marketing Analyst career fit"));
        assert!(text.contains("Generated 2025-09-24"));
    }

    #[test]
    fn print_results_renders_json_payload() {
        let catalog = QuestionCatalog::standard();
        let mut answers = AnswerSet::new();
        answers
            .record(&catalog, "math_roi", "200%")
            .expect("valid answer");

        let body: Value = serde_json::from_str(&render(&answers, true)).expect("json output");
        assert_eq!(body["answered"], 1);
        assert_eq!(body["results"]["technical_score"], 25);
        assert_eq!(body["summary"]["score_bars"][1]["name"], "Technical Readiness");
    }

    #[test]
    fn question_listing_groups_by_section() {
        let mut output = Vec::new();
        write_questions(&QuestionCatalog::standard(), false, &mut output).expect("lists");
        let text = String::from_utf8(output).expect("utf8");

        let psychometric = text.find("Psychometric").expect("section heading");
        let technical = text.find("Technical").expect("section heading");
        let wiscar = text.find("WISCAR Framework").expect("section heading");
        assert!(psychometric < technical && technical < wiscar);
        assert!(text.contains(" 9. [tools_familiarity]"));
        assert!(text.contains("scale 0..=10 (step 1)"));
        assert!(text.contains("15. [real_world_testing]"));
    }
}
