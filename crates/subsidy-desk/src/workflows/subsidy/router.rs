use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use super::domain::FormSubmission;
use super::evaluation::{EligibilityDecision, EligibilityEvaluator, RuleId};

/// Router builder exposing the eligibility checklist endpoint.
pub fn eligibility_router(evaluator: Arc<EligibilityEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/subsidy/eligibility", post(evaluate_handler))
        .with_state(evaluator)
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    Json(submission): Json<FormSubmission>,
) -> Json<EligibilityDecision> {
    let decision = evaluator.evaluate(&submission.to_input());
    let failed: Vec<RuleId> = decision.failed_rules();
    info!(
        eligible = decision.is_eligible,
        failed_rules = ?failed,
        "subsidy eligibility evaluated"
    );

    Json(decision)
}
