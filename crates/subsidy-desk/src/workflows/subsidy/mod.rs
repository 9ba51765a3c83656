//! Rent-subsidy eligibility checklist.
//!
//! Raw form fields are read into an [`ApplicantInput`] and run through a fixed
//! table of five rules. Invalid input never errors; it simply fails the rule
//! it belongs to.

pub mod batch;
pub mod domain;
pub mod evaluation;
mod intake;
pub mod router;

#[cfg(test)]
mod tests;

pub use batch::{ApplicantBatchImporter, BatchEntry, BatchImportError, BatchReport};
pub use domain::{AccountOwner, ApplicantInput, FieldReading, FormSubmission, IdentityStatus};
pub use evaluation::{
    evaluate, BenefitSummary, BenefitTerms, EligibilityDecision, EligibilityEvaluator,
    EligibilityPolicy, RuleId, RuleOutcome,
};
pub use router::eligibility_router;
