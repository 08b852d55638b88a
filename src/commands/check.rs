use clap::Args;
use serde::Serialize;

use boxcheck::container::ContainerIdentifier;
use boxcheck::output::BulkResult;
use boxcheck::validation;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CheckArgs {
    /// Container numbers, @<file> (one per line), or '-' for stdin
    pub inputs: Vec<String>,

    /// Override the equipment category (4th character) for every input
    #[arg(long, value_name = "LETTER")]
    pub category: Option<String>,
}

/// Per-input validation report.
///
/// `verdict` is YES/NO when the input carried a check digit; otherwise the
/// report carries a note instead of a verdict.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub significant: String,
    pub canonical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_check_digit: Option<u8>,
    pub expected_check_digit: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl CheckReport {
    fn from_identifier(id: &ContainerIdentifier) -> Self {
        let expected = id.check_digit();
        match id.provided_check_digit() {
            Some(given) => Self {
                significant: id.significant(),
                canonical: id.canonical(),
                given_check_digit: Some(given),
                expected_check_digit: expected,
                verdict: Some(if given == expected { "YES" } else { "NO" }),
                note: None,
            },
            None => Self {
                significant: id.significant(),
                canonical: id.canonical(),
                given_check_digit: None,
                expected_check_digit: expected,
                verdict: None,
                note: Some("No check digit provided in input"),
            },
        }
    }
}

pub fn run(args: CheckArgs, _global: &GlobalArgs) -> CmdResult<BulkResult<CheckReport>> {
    let inputs = super::gather_inputs(&args.inputs)?;
    validation::require_non_empty_vec(&inputs, "inputs", "Provide at least one container number")
        .map_err(|e| e.with_hint("Pass numbers directly, @<file>, or '-' for stdin"))?;

    let mut bulk = BulkResult::new("check");
    for input in inputs {
        let parsed = match args.category.as_deref() {
            Some(category) => ContainerIdentifier::parse_with_category(&input, category),
            None => ContainerIdentifier::parse(&input),
        };

        match parsed {
            Ok(id) => bulk.record(input, CheckReport::from_identifier(&id)),
            Err(err) => bulk.record_error(input, format!("{}: {}", err.code.as_str(), err)),
        }
    }

    Ok((bulk, 0))
}
