use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::subsidy::domain::{
    AccountOwner, ApplicantInput, FormSubmission, IdentityStatus,
};
use crate::workflows::subsidy::evaluation::EligibilityEvaluator;
use crate::workflows::subsidy::router::eligibility_router;

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::standard()
}

/// Applicant meeting every threshold with room to spare.
pub(super) fn qualifying_input() -> ApplicantInput {
    ApplicantInput::new(25, IdentityStatus::Citizen, 5.0, AccountOwner::Applicant, 60)
}

pub(super) fn qualifying_submission() -> FormSubmission {
    FormSubmission {
        applicant: Some("Scenario A".to_string()),
        age: Some("25".to_string()),
        identity_status: Some("si".to_string()),
        savings: Some("5".to_string()),
        account_owner: Some("postulante".to_string()),
        vulnerability_percentile: Some("60".to_string()),
    }
}

pub(super) fn router() -> axum::Router {
    eligibility_router(Arc::new(evaluator()))
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response is json")
}
