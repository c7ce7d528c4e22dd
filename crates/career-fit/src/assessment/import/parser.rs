use serde::Deserialize;
use std::io::Read;

/// One row of an exported answer sheet: `question_id,answer`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRow {
    #[serde(alias = "Question ID", alias = "id")]
    pub question_id: String,
    #[serde(alias = "Answer", alias = "value")]
    pub answer: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<AnswerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    csv_reader.deserialize().collect()
}
