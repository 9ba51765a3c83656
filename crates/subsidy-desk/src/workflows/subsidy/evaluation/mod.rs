mod config;
mod rules;

pub use config::{BenefitTerms, EligibilityPolicy};

use super::domain::ApplicantInput;
use serde::{Deserialize, Serialize};

/// Eligibility rules in the order they are evaluated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Age,
    Identity,
    Savings,
    AccountOwner,
    Vulnerability,
}

impl RuleId {
    pub const ORDER: [RuleId; 5] = [
        RuleId::Age,
        RuleId::Identity,
        RuleId::Savings,
        RuleId::AccountOwner,
        RuleId::Vulnerability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RuleId::Age => "Age",
            RuleId::Identity => "Identity card",
            RuleId::Savings => "Minimum savings",
            RuleId::AccountOwner => "Savings account holder",
            RuleId::Vulnerability => "Social vulnerability",
        }
    }
}

/// Pass/fail result of a single rule with its checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub passed: bool,
    pub explanation: String,
}

/// Subsidy terms attached to an eligible decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitSummary {
    pub monthly_amount: f64,
    pub maximum_total: f64,
    pub max_years: u8,
    pub months_total: u32,
    pub description: String,
}

impl BenefitSummary {
    pub fn from_terms(terms: &BenefitTerms) -> Self {
        let months_total = (terms.maximum_total / terms.monthly_amount).floor() as u32;

        Self {
            monthly_amount: terms.monthly_amount,
            maximum_total: terms.maximum_total,
            max_years: terms.max_years,
            months_total,
            description: format!(
                "Receives {} UF per month up to a maximum of {} UF in total, roughly {} months of subsidy.",
                terms.monthly_amount, terms.maximum_total, months_total
            ),
        }
    }
}

/// Aggregate decision plus the full checklist, one outcome per rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub is_eligible: bool,
    pub outcomes: Vec<RuleOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit_summary: Option<BenefitSummary>,
}

impl EligibilityDecision {
    pub fn outcome(&self, rule: RuleId) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|outcome| outcome.rule == rule)
    }

    pub fn failed_rules(&self) -> Vec<RuleId> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.rule)
            .collect()
    }

    pub fn summary(&self) -> String {
        if self.is_eligible {
            return "eligible for the rent subsidy".to_string();
        }

        let failed: Vec<&str> = self
            .failed_rules()
            .iter()
            .map(|rule| rule.label())
            .collect();
        format!("not eligible: {}", failed.join(", "))
    }
}

/// Stateless evaluator applying a policy to applicant input.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    policy: EligibilityPolicy,
    benefits: BenefitTerms,
}

impl EligibilityEvaluator {
    pub fn new(policy: EligibilityPolicy, benefits: BenefitTerms) -> Self {
        Self { policy, benefits }
    }

    pub fn standard() -> Self {
        Self::new(EligibilityPolicy::STANDARD, BenefitTerms::STANDARD)
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Runs every rule, in order, and attaches benefit terms only when all pass.
    pub fn evaluate(&self, input: &ApplicantInput) -> EligibilityDecision {
        let outcomes = rules::evaluate_rules(input, &self.policy);
        let is_eligible = outcomes.iter().all(|outcome| outcome.passed);
        let benefit_summary = is_eligible.then(|| BenefitSummary::from_terms(&self.benefits));

        EligibilityDecision {
            is_eligible,
            outcomes,
            benefit_summary,
        }
    }
}

/// Evaluates input against the standard policy and benefit terms.
pub fn evaluate(input: &ApplicantInput) -> EligibilityDecision {
    EligibilityEvaluator::standard().evaluate(input)
}
