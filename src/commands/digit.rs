use clap::Args;
use serde::Serialize;

use boxcheck::container::ContainerIdentifier;
use boxcheck::validation;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct DigitArgs {
    /// Container number; any provided check digit is ignored
    pub input: String,

    /// Override the equipment category (4th character)
    #[arg(long, value_name = "LETTER")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitOutput {
    command: String,
    input: String,
    significant: String,
    expected_check_digit: u8,
    canonical: String,
}

pub fn run(args: DigitArgs, _global: &GlobalArgs) -> CmdResult<DigitOutput> {
    let input =
        validation::require_non_empty(&args.input, "input", "Container number cannot be empty")?;

    let id = match args.category.as_deref() {
        Some(category) => ContainerIdentifier::parse_with_category(input, category)?,
        None => ContainerIdentifier::parse(input)?,
    };

    Ok((
        DigitOutput {
            command: "digit".to_string(),
            input: input.to_string(),
            significant: id.significant(),
            expected_check_digit: id.check_digit(),
            canonical: id.canonical(),
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_expected_digit() {
        let args = DigitArgs {
            input: "CSQU305438".to_string(),
            category: None,
        };
        let (output, exit_code) = run(args, &GlobalArgs {}).unwrap();
        assert_eq!(exit_code, 0);
        assert_eq!(output.expected_check_digit, 3);
        assert_eq!(output.canonical, "CSQU3054383");
    }

    #[test]
    fn provided_digit_is_ignored() {
        let args = DigitArgs {
            input: "CSQU3054384".to_string(),
            category: None,
        };
        let (output, _) = run(args, &GlobalArgs {}).unwrap();
        assert_eq!(output.expected_check_digit, 3);
    }

    #[test]
    fn parse_failures_propagate() {
        let args = DigitArgs {
            input: "SHORT".to_string(),
            category: None,
        };
        let err = run(args, &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code, boxcheck::ErrorCode::ContainerMalformedInput);
    }

    #[test]
    fn blank_input_is_rejected_before_parsing() {
        let args = DigitArgs {
            input: "   ".to_string(),
            category: None,
        };
        let err = run(args, &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code, boxcheck::ErrorCode::ValidationInvalidArgument);
    }
}
