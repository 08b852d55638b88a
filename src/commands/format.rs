use clap::Args;
use serde::Serialize;

use boxcheck::container::ContainerIdentifier;
use boxcheck::output::BulkResult;
use boxcheck::validation;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct FormatArgs {
    /// Container numbers, @<file> (one per line), or '-' for stdin
    pub inputs: Vec<String>,

    /// Override the equipment category (4th character) for every input
    #[arg(long, value_name = "LETTER")]
    pub category: Option<String>,
}

/// Canonical form of one input, always carrying the computed check digit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatReport {
    pub canonical: String,
}

pub fn run(args: FormatArgs, _global: &GlobalArgs) -> CmdResult<BulkResult<FormatReport>> {
    let inputs = super::gather_inputs(&args.inputs)?;
    validation::require_non_empty_vec(&inputs, "inputs", "Provide at least one container number")
        .map_err(|e| e.with_hint("Pass numbers directly, @<file>, or '-' for stdin"))?;

    let mut bulk = BulkResult::new("format");
    for input in inputs {
        let parsed = match args.category.as_deref() {
            Some(category) => ContainerIdentifier::parse_with_category(&input, category),
            None => ContainerIdentifier::parse(&input),
        };

        match parsed {
            Ok(id) => bulk.record(
                input,
                FormatReport {
                    canonical: id.canonical(),
                },
            ),
            Err(err) => bulk.record_error(input, format!("{}: {}", err.code.as_str(), err)),
        }
    }

    Ok((bulk, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_format(inputs: &[&str]) -> BulkResult<FormatReport> {
        let args = FormatArgs {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            category: None,
        };
        let (bulk, _) = run(args, &GlobalArgs {}).unwrap();
        bulk
    }

    #[test]
    fn canonicalizes_and_corrects_the_digit() {
        let bulk = run_format(&["csqu 305438", "CSQU3054384"]);

        assert_eq!(bulk.results[0].result.as_ref().unwrap().canonical, "CSQU3054383");
        assert_eq!(bulk.results[1].result.as_ref().unwrap().canonical, "CSQU3054383");
    }

    #[test]
    fn bad_inputs_are_reported_in_place() {
        let bulk = run_format(&["ABCU12X4567", "TRLU987654"]);

        assert!(bulk.results[0]
            .error
            .as_ref()
            .unwrap()
            .contains("container.invalid_serial"));
        assert_eq!(bulk.results[1].result.as_ref().unwrap().canonical, "TRLU9876542");
        assert_eq!(bulk.summary.failed, 1);
    }
}
