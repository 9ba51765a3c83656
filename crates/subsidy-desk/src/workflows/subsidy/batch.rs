use super::domain::FormSubmission;
use super::evaluation::{EligibilityDecision, EligibilityEvaluator};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read applicant batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Decision for one CSV row; `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub row: usize,
    pub applicant: Option<String>,
    pub decision: EligibilityDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn eligible_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.decision.is_eligible)
            .count()
    }

    pub fn ineligible_count(&self) -> usize {
        self.entries.len() - self.eligible_count()
    }
}

/// Evaluates applicant rows exported from the intake form.
pub struct ApplicantBatchImporter;

impl ApplicantBatchImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        evaluator: &EligibilityEvaluator,
    ) -> Result<BatchReport, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, evaluator)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        evaluator: &EligibilityEvaluator,
    ) -> Result<BatchReport, BatchImportError> {
        let entries = parse_submissions(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, submission)| BatchEntry {
                row: index + 1,
                decision: evaluator.evaluate(&submission.to_input()),
                applicant: submission.applicant,
            })
            .collect();

        Ok(BatchReport { entries })
    }
}

pub(crate) fn parse_submissions<R: Read>(reader: R) -> Result<Vec<FormSubmission>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut submissions = Vec::new();

    for record in csv_reader.deserialize::<ApplicantRow>() {
        let row = record?;
        submissions.push(row.into_submission());
    }

    Ok(submissions)
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    applicant: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    identity_status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    savings: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    account_owner: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    vulnerability_percentile: Option<String>,
}

impl ApplicantRow {
    fn into_submission(self) -> FormSubmission {
        FormSubmission {
            applicant: self.applicant,
            age: self.age,
            identity_status: self.identity_status,
            savings: self.savings,
            account_owner: self.account_owner,
            vulnerability_percentile: self.vulnerability_percentile,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_and_keeps_blank_cells_missing() {
        let csv = "applicant,age,identity_status,savings,account_owner,vulnerability_percentile\n\
                   Ana, 25 ,citizen,5,applicant,60\n\
                   Luis,,none,,other,\n";

        let submissions = parse_submissions(Cursor::new(csv)).expect("csv parses");

        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].age.as_deref(), Some("25"));
        assert_eq!(submissions[1].applicant.as_deref(), Some("Luis"));
        assert!(submissions[1].age.is_none());
        assert!(submissions[1].vulnerability_percentile.is_none());
    }

    #[test]
    fn rejects_rows_with_extra_columns() {
        let csv = "age,identity_status,savings,account_owner,vulnerability_percentile\n\
                   25,citizen,5,applicant,60,unexpected\n";

        let result = ApplicantBatchImporter::from_reader(
            Cursor::new(csv),
            &EligibilityEvaluator::standard(),
        );

        assert!(matches!(result, Err(BatchImportError::Csv(_))));
    }
}
