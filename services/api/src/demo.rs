use crate::infra::converter_from_config;
use crate::render::{render_batch, render_conversion, render_decision};
use clap::Args;
use std::path::PathBuf;
use subsidy_desk::config::AppConfig;
use subsidy_desk::error::AppError;
use subsidy_desk::workflows::currency::UsdClpConverter;
use subsidy_desk::workflows::subsidy::{
    ApplicantBatchImporter, EligibilityEvaluator, FormSubmission,
};

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Identity card status (si, extranjero, no, or citizen, foreign_resident, none)
    #[arg(long)]
    pub(crate) identity: Option<String>,
    /// Savings in UF
    #[arg(long)]
    pub(crate) savings: Option<String>,
    /// Savings account holder (postulante, conyuge, conviviente, otro)
    #[arg(long)]
    pub(crate) account_owner: Option<String>,
    /// Social vulnerability percentile (0-100)
    #[arg(long)]
    pub(crate) vulnerability: Option<String>,
}

impl CheckArgs {
    fn into_submission(self) -> FormSubmission {
        FormSubmission {
            applicant: None,
            age: self.age,
            identity_status: self.identity,
            savings: self.savings,
            account_owner: self.account_owner,
            vulnerability_percentile: self.vulnerability,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with applicant,age,identity_status,savings,account_owner,vulnerability_percentile columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the full checklist for every applicant
    #[arg(long)]
    pub(crate) details: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Amount in US dollars, decimals allowed
    pub(crate) amount: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the currency converter portion of the demo.
    #[arg(long)]
    pub(crate) skip_converter: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let evaluator = EligibilityEvaluator::standard();
    let decision = evaluator.evaluate(&args.into_submission().to_input());
    print!("{}", render_decision(&decision));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let evaluator = EligibilityEvaluator::standard();
    let report = ApplicantBatchImporter::from_path(&args.csv, &evaluator)?;

    print!("{}", render_batch(&report));
    if args.details {
        for entry in &report.entries {
            println!("\nRow {}", entry.row);
            print!("{}", render_decision(&entry.decision));
        }
    }

    Ok(())
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let converter = converter_from_config(&config.currency)?;
    let conversion = converter.convert_text(&args.amount)?;
    print!("{}", render_conversion(&conversion));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Rent subsidy eligibility demo");
    let evaluator = EligibilityEvaluator::standard();
    for (name, submission, expected) in demo_applicants() {
        let decision = evaluator.evaluate(&submission.to_input());
        let verdict = if decision.is_eligible == expected {
            "as expected"
        } else {
            "UNEXPECTED"
        };
        println!("\n== {name} ({verdict})");
        print!("{}", render_decision(&decision));
    }

    if args.skip_converter {
        return Ok(());
    }

    println!("\nUSD to CLP converter demo");
    let converter = UsdClpConverter::default();
    for amount in ["100", "1.50", "0.25", "1000.99", "0"] {
        let conversion = converter.convert_text(amount)?;
        println!("- {}", conversion.summary());
    }
    for raw in ["abc", "", "  ", "-10", "null", "undefined"] {
        match converter.convert_text(raw) {
            Ok(conversion) => println!("- {raw:?} accepted: {}", conversion.summary()),
            Err(err) => println!("- {raw:?} rejected: {err}"),
        }
    }

    Ok(())
}

fn demo_applicants() -> Vec<(&'static str, FormSubmission, bool)> {
    let applicant = |age: &str, savings: &str, vulnerability: &str| FormSubmission {
        applicant: None,
        age: Some(age.to_string()),
        identity_status: Some("si".to_string()),
        savings: Some(savings.to_string()),
        account_owner: Some("postulante".to_string()),
        vulnerability_percentile: Some(vulnerability.to_string()),
    };

    vec![
        ("Complete valid application", applicant("25", "5", "60"), true),
        ("Underage applicant", applicant("17", "5", "60"), false),
        ("Insufficient savings", applicant("25", "2", "60"), false),
        ("Not vulnerable enough", applicant("25", "5", "80"), false),
    ]
}
