use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Result of reading one numeric form field.
///
/// A field that could not be parsed keeps its raw text so explanations can
/// echo what the applicant actually typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FieldReading<T> {
    Value(T),
    Missing,
    Malformed(String),
    /// A number outside the range the field accepts.
    OutOfRange(String),
}

impl<T: Copy> FieldReading<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            FieldReading::Value(value) => Some(*value),
            FieldReading::Missing
            | FieldReading::Malformed(_)
            | FieldReading::OutOfRange(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for FieldReading<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldReading::Value(value) => write!(f, "{value}"),
            FieldReading::Missing => f.write_str("not provided"),
            FieldReading::Malformed(raw) => write!(f, "'{raw}' is not a valid number"),
            FieldReading::OutOfRange(raw) => write!(f, "{raw} is outside the accepted range"),
        }
    }
}

/// Identity document status declared on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    Citizen,
    ForeignResident,
    #[serde(rename = "none")]
    NoDocument,
    Unset,
}

impl IdentityStatus {
    /// Maps a raw form value; unknown or blank selections count as unset.
    pub fn from_form(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::Unset;
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "si" | "sí" | "citizen" => Self::Citizen,
            "extranjero" | "foreign_resident" | "foreignresident" => Self::ForeignResident,
            "no" | "none" => Self::NoDocument,
            _ => Self::Unset,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdentityStatus::Citizen => "Chilean identity card",
            IdentityStatus::ForeignResident => "Foreign resident identity card",
            IdentityStatus::NoDocument => "No valid identity card",
            IdentityStatus::Unset => "Not selected",
        }
    }
}

/// Holder of the savings account backing the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountOwner {
    Applicant,
    Spouse,
    CivilPartner,
    Other,
    Unset,
}

impl AccountOwner {
    pub fn from_form(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::Unset;
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "postulante" | "applicant" => Self::Applicant,
            "conyuge" | "cónyuge" | "spouse" => Self::Spouse,
            "conviviente" | "civil_partner" | "civilpartner" => Self::CivilPartner,
            "otro" | "other" => Self::Other,
            _ => Self::Unset,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountOwner::Applicant => "Applicant",
            AccountOwner::Spouse => "Spouse",
            AccountOwner::CivilPartner => "Civil partner",
            AccountOwner::Other => "Someone else",
            AccountOwner::Unset => "Not selected",
        }
    }
}

/// Typed applicant fields handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub age: FieldReading<i32>,
    pub identity_status: IdentityStatus,
    pub savings: FieldReading<f64>,
    pub account_owner: AccountOwner,
    pub vulnerability_percentile: FieldReading<u8>,
}

impl ApplicantInput {
    pub fn new(
        age: i32,
        identity_status: IdentityStatus,
        savings: f64,
        account_owner: AccountOwner,
        vulnerability_percentile: u8,
    ) -> Self {
        Self {
            age: FieldReading::Value(age),
            identity_status,
            savings: FieldReading::Value(savings),
            account_owner,
            vulnerability_percentile: FieldReading::Value(vulnerability_percentile),
        }
    }
}

/// Raw form fields exactly as a form provider collects them.
///
/// Every field is optional text. Any other JSON value is rendered back to
/// text before parsing, so a wrongly typed field fails its rule instead of
/// rejecting the whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: Option<String>,
    #[serde(default, alias = "hasValidId", deserialize_with = "lenient_text")]
    pub identity_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub savings: Option<String>,
    #[serde(default, alias = "accountOwner", deserialize_with = "lenient_text")]
    pub account_owner: Option<String>,
    #[serde(
        default,
        alias = "socialVulnerability",
        deserialize_with = "lenient_text"
    )]
    pub vulnerability_percentile: Option<String>,
}

impl FormSubmission {
    pub fn to_input(&self) -> ApplicantInput {
        ApplicantInput {
            age: super::intake::read_whole_number(self.age.as_deref()),
            identity_status: IdentityStatus::from_form(self.identity_status.as_deref()),
            savings: super::intake::read_decimal(self.savings.as_deref()),
            account_owner: AccountOwner::from_form(self.account_owner.as_deref()),
            vulnerability_percentile: super::intake::read_percentile(
                self.vulnerability_percentile.as_deref(),
            ),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Other(serde_json::Value),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawField>::deserialize(deserializer)?;
    Ok(raw.map(|field| match field {
        RawField::Text(text) => text,
        RawField::Integer(value) => value.to_string(),
        RawField::Decimal(value) => value.to_string(),
        RawField::Other(value) => value.to_string(),
    }))
}
