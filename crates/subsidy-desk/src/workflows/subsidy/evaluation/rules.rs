use super::super::domain::{AccountOwner, ApplicantInput, FieldReading, IdentityStatus};
use super::config::EligibilityPolicy;
use super::{RuleId, RuleOutcome};
use std::fmt::Display;

pub(crate) fn evaluate_rules(
    input: &ApplicantInput,
    policy: &EligibilityPolicy,
) -> Vec<RuleOutcome> {
    vec![
        check_age(&input.age, policy),
        check_identity(input.identity_status),
        check_savings(&input.savings, policy),
        check_account_owner(input.account_owner),
        check_vulnerability(&input.vulnerability_percentile, policy),
    ]
}

/// Operand for a "value >= threshold" rule; unreadable values can never pass.
fn floor_operand<T: Copy + Into<f64>>(reading: &FieldReading<T>) -> f64 {
    reading.value().map(Into::into).unwrap_or(f64::NEG_INFINITY)
}

/// Operand for a "value <= threshold" rule; unreadable values can never pass.
fn ceiling_operand<T: Copy + Into<f64>>(reading: &FieldReading<T>) -> f64 {
    reading.value().map(Into::into).unwrap_or(f64::INFINITY)
}

fn with_unit<T: Display>(reading: &FieldReading<T>, unit: &str) -> String {
    match reading {
        FieldReading::Value(value) => format!("{value}{unit}"),
        other => other.to_string(),
    }
}

fn check_age(age: &FieldReading<i32>, policy: &EligibilityPolicy) -> RuleOutcome {
    let passed = floor_operand(age) >= f64::from(policy.minimum_age);
    let explanation = if passed {
        format!("meets the age requirement ({})", with_unit(age, " years"))
    } else {
        format!(
            "must be at least {} years old (current: {})",
            policy.minimum_age,
            with_unit(age, " years")
        )
    };

    RuleOutcome {
        rule: RuleId::Age,
        passed,
        explanation,
    }
}

fn check_identity(status: IdentityStatus) -> RuleOutcome {
    let (passed, explanation) = match status {
        IdentityStatus::Citizen => (true, "holds a valid Chilean identity card"),
        IdentityStatus::ForeignResident => {
            (true, "holds a valid identity card for foreign residents")
        }
        IdentityStatus::NoDocument => (false, "a valid identity card is required"),
        IdentityStatus::Unset => (false, "the identity card status must be selected"),
    };

    RuleOutcome {
        rule: RuleId::Identity,
        passed,
        explanation: explanation.to_string(),
    }
}

fn check_savings(savings: &FieldReading<f64>, policy: &EligibilityPolicy) -> RuleOutcome {
    let passed = floor_operand(savings) >= policy.minimum_savings;
    let explanation = if passed {
        format!(
            "meets the minimum savings ({} >= {} UF)",
            with_unit(savings, " UF"),
            policy.minimum_savings
        )
    } else {
        format!(
            "at least {} UF of savings required (current: {})",
            policy.minimum_savings,
            with_unit(savings, " UF")
        )
    };

    RuleOutcome {
        rule: RuleId::Savings,
        passed,
        explanation,
    }
}

fn check_account_owner(owner: AccountOwner) -> RuleOutcome {
    let (passed, explanation) = match owner {
        AccountOwner::Applicant => (true, "savings account held by the applicant"),
        AccountOwner::Spouse => (true, "savings account held by the spouse"),
        AccountOwner::CivilPartner => (true, "savings account held by the civil partner"),
        AccountOwner::Other => (
            false,
            "the savings account must be held by the applicant, spouse or civil partner",
        ),
        AccountOwner::Unset => (false, "the savings account holder must be selected"),
    };

    RuleOutcome {
        rule: RuleId::AccountOwner,
        passed,
        explanation: explanation.to_string(),
    }
}

fn check_vulnerability(percentile: &FieldReading<u8>, policy: &EligibilityPolicy) -> RuleOutcome {
    let passed = ceiling_operand(percentile) <= f64::from(policy.maximum_vulnerability);
    let explanation = if passed {
        format!(
            "meets the vulnerability criterion ({} <= {}%)",
            with_unit(percentile, "%"),
            policy.maximum_vulnerability
        )
    } else {
        format!(
            "must fall within the most vulnerable {}% (current: {})",
            policy.maximum_vulnerability,
            with_unit(percentile, "%")
        )
    };

    RuleOutcome {
        rule: RuleId::Vulnerability,
        passed,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_fail_both_comparison_directions() {
        let missing: FieldReading<i32> = FieldReading::Missing;
        let malformed: FieldReading<u8> = FieldReading::Malformed("abc".to_string());

        assert!(floor_operand(&missing) < f64::from(i32::MIN));
        assert!(ceiling_operand(&malformed) > f64::from(u8::MAX));
    }

    #[test]
    fn malformed_age_fails_with_readable_explanation() {
        let outcome = check_age(
            &FieldReading::Malformed("veinte".to_string()),
            &EligibilityPolicy::STANDARD,
        );

        assert!(!outcome.passed);
        assert_eq!(
            outcome.explanation,
            "must be at least 18 years old (current: 'veinte' is not a valid number)"
        );
    }

    #[test]
    fn identity_and_owner_failures_are_distinguishable() {
        let none = check_identity(IdentityStatus::NoDocument);
        let unset = check_identity(IdentityStatus::Unset);
        assert!(!none.passed && !unset.passed);
        assert_ne!(none.explanation, unset.explanation);

        let other = check_account_owner(AccountOwner::Other);
        let unselected = check_account_owner(AccountOwner::Unset);
        assert!(!other.passed && !unselected.passed);
        assert_ne!(other.explanation, unselected.explanation);
    }

    #[test]
    fn out_of_range_percentile_is_not_called_malformed() {
        let outcome = check_vulnerability(
            &FieldReading::OutOfRange("101".to_string()),
            &EligibilityPolicy::STANDARD,
        );

        assert!(!outcome.passed);
        assert_eq!(
            outcome.explanation,
            "must fall within the most vulnerable 70% (current: 101 is outside the accepted range)"
        );
    }

    #[test]
    fn missing_savings_reports_not_provided() {
        let outcome = check_savings(&FieldReading::Missing, &EligibilityPolicy::STANDARD);

        assert!(!outcome.passed);
        assert!(outcome.explanation.ends_with("(current: not provided)"));
    }
}
