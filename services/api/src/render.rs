use std::fmt::Write;
use subsidy_desk::workflows::currency::Conversion;
use subsidy_desk::workflows::subsidy::{BatchReport, EligibilityDecision};

pub(crate) fn render_decision(decision: &EligibilityDecision) -> String {
    let mut out = String::from("Eligibility result\n");

    for outcome in &decision.outcomes {
        let mark = if outcome.passed { '✓' } else { '✗' };
        let _ = writeln!(out, "{mark} {}: {}", outcome.rule.label(), outcome.explanation);
    }

    match &decision.benefit_summary {
        Some(benefits) => {
            out.push_str("\nELIGIBLE FOR THE RENT SUBSIDY\n");
            out.push_str("Meets every requirement to apply for the rent subsidy.\n");
            out.push_str("Benefit details:\n");
            let _ = writeln!(out, "{}", benefits.description);
            let _ = writeln!(out, "- Monthly amount: {} UF", benefits.monthly_amount);
            let _ = writeln!(out, "- Maximum total: {} UF", benefits.maximum_total);
            let _ = writeln!(out, "- Maximum period: {} years", benefits.max_years);
            out.push_str("- Consecutive or fragmented use\n");
        }
        None => {
            out.push_str("\nNOT ELIGIBLE\n");
            out.push_str(
                "Does not meet every requirement for the subsidy. Review the items marked above.\n",
            );
        }
    }

    out
}

pub(crate) fn render_batch(report: &BatchReport) -> String {
    let mut out = format!(
        "Applicant batch: {} eligible, {} not eligible\n",
        report.eligible_count(),
        report.ineligible_count()
    );

    for entry in &report.entries {
        let name = entry.applicant.as_deref().unwrap_or("(unnamed)");
        let _ = writeln!(
            out,
            "- row {} | {} | {}",
            entry.row,
            name,
            entry.decision.summary()
        );
    }

    out
}

pub(crate) fn render_conversion(conversion: &Conversion) -> String {
    format!(
        "Conversion successful:\n{}\n{}\n",
        conversion.summary(),
        conversion.rate_note()
    )
}
