use super::common::*;
use crate::workflows::subsidy::domain::{AccountOwner, FieldReading, IdentityStatus};
use crate::workflows::subsidy::evaluation::{evaluate, RuleId};

#[test]
fn qualifying_applicant_receives_benefit_terms() {
    let decision = evaluator().evaluate(&qualifying_input());

    assert!(decision.is_eligible);
    assert!(decision.failed_rules().is_empty());
    let summary = decision.benefit_summary.expect("benefit summary attached");
    assert_eq!(summary.months_total, 40);
    assert_eq!(summary.monthly_amount, 4.2);
    assert_eq!(summary.maximum_total, 170.0);
    assert_eq!(summary.max_years, 8);
    assert!(summary.description.contains("40 months"));
}

#[test]
fn minor_fails_only_the_age_rule() {
    let mut input = qualifying_input();
    input.age = FieldReading::Value(17);

    let decision = evaluate(&input);

    assert!(!decision.is_eligible);
    assert_eq!(decision.failed_rules(), vec![RuleId::Age]);
    assert!(decision.benefit_summary.is_none());
}

#[test]
fn several_failures_are_all_reported() {
    let mut input = qualifying_input();
    input.identity_status = IdentityStatus::NoDocument;
    input.savings = FieldReading::Value(2.0);
    input.account_owner = AccountOwner::Other;
    input.vulnerability_percentile = FieldReading::Value(80);

    let decision = evaluate(&input);

    assert!(!decision.is_eligible);
    assert_eq!(
        decision.failed_rules(),
        vec![
            RuleId::Identity,
            RuleId::Savings,
            RuleId::AccountOwner,
            RuleId::Vulnerability,
        ]
    );
    assert!(decision.outcome(RuleId::Age).expect("age outcome").passed);
    assert!(decision.benefit_summary.is_none());
}

#[test]
fn outcomes_keep_rule_order_whatever_fails() {
    let mut input = qualifying_input();
    input.vulnerability_percentile = FieldReading::Malformed("alto".to_string());
    input.age = FieldReading::Missing;

    let decision = evaluate(&input);
    let order: Vec<RuleId> = decision.outcomes.iter().map(|outcome| outcome.rule).collect();

    assert_eq!(order, RuleId::ORDER.to_vec());
}

#[test]
fn thresholds_are_inclusive() {
    let cases = [
        (FieldReading::Value(18), true),
        (FieldReading::Value(17), false),
    ];
    for (age, expected) in cases {
        let mut input = qualifying_input();
        input.age = age;
        assert_eq!(evaluate(&input).is_eligible, expected);
    }

    let cases = [(4.0, true), (3.999, false)];
    for (savings, expected) in cases {
        let mut input = qualifying_input();
        input.savings = FieldReading::Value(savings);
        assert_eq!(evaluate(&input).is_eligible, expected);
    }

    let cases = [(70, true), (71, false)];
    for (percentile, expected) in cases {
        let mut input = qualifying_input();
        input.vulnerability_percentile = FieldReading::Value(percentile);
        assert_eq!(evaluate(&input).is_eligible, expected);
    }
}

#[test]
fn single_violation_leaves_exactly_one_failure() {
    let mut violations = Vec::new();

    let mut input = qualifying_input();
    input.identity_status = IdentityStatus::Unset;
    violations.push(input);

    let mut input = qualifying_input();
    input.account_owner = AccountOwner::Unset;
    violations.push(input);

    let mut input = qualifying_input();
    input.savings = FieldReading::Malformed("mucho".to_string());
    violations.push(input);

    for input in violations {
        let decision = evaluate(&input);
        assert!(!decision.is_eligible);
        assert_eq!(decision.failed_rules().len(), 1, "{input:?}");
        assert_eq!(decision.outcomes.len(), 5);
    }
}

#[test]
fn evaluation_is_repeatable() {
    let submission = qualifying_submission();
    let engine = evaluator();

    let first = engine.evaluate(&submission.to_input());
    let second = engine.evaluate(&submission.to_input());

    assert_eq!(first, second);
}

#[test]
fn form_values_map_to_typed_fields() {
    let input = qualifying_submission().to_input();

    assert_eq!(input.age, FieldReading::Value(25));
    assert_eq!(input.identity_status, IdentityStatus::Citizen);
    assert_eq!(input.savings, FieldReading::Value(5.0));
    assert_eq!(input.account_owner, AccountOwner::Applicant);
    assert_eq!(input.vulnerability_percentile, FieldReading::Value(60));
}

#[test]
fn passing_explanations_name_the_accepted_value() {
    let mut input = qualifying_input();
    input.identity_status = IdentityStatus::ForeignResident;
    input.account_owner = AccountOwner::CivilPartner;

    let decision = evaluate(&input);

    let identity = decision.outcome(RuleId::Identity).expect("identity outcome");
    assert!(identity.explanation.contains("foreign residents"));
    let owner = decision
        .outcome(RuleId::AccountOwner)
        .expect("account owner outcome");
    assert!(owner.explanation.contains("civil partner"));
    let age = decision.outcome(RuleId::Age).expect("age outcome");
    assert_eq!(age.explanation, "meets the age requirement (25 years)");
}
