use std::io::Read;
use std::path::Path;

use boxcheck::log_status;

pub type CmdResult<T> = boxcheck::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod check;
pub mod digit;
pub mod format;

/// Expand CLI arguments into container numbers.
///
/// Each argument is either a literal container number, `@<path>` (a file
/// with one number per line), or `-` (stdin, same format). Blank lines and
/// surrounding whitespace are dropped; everything else is passed through for
/// the parser to judge.
pub fn gather_inputs(args: &[String]) -> boxcheck::Result<Vec<String>> {
    let mut inputs = Vec::new();

    for arg in args {
        if arg.trim() == "-" {
            if crate::tty::is_stdin_tty() {
                return Err(boxcheck::Error::validation_invalid_argument(
                    "inputs",
                    "Cannot read container numbers from stdin when stdin is a TTY",
                    None,
                ));
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                boxcheck::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
            })?;
            push_lines(&buf, &mut inputs);
        } else if let Some(path) = arg.strip_prefix('@') {
            if path.trim().is_empty() {
                return Err(boxcheck::Error::validation_invalid_argument(
                    "inputs",
                    "Invalid input '@' (missing file path)",
                    None,
                ));
            }
            let content = std::fs::read_to_string(Path::new(path)).map_err(|e| {
                boxcheck::Error::internal_io(e.to_string(), Some(format!("read {}", path)))
            })?;
            log_status!("input", "Reading container numbers from {}", path);
            push_lines(&content, &mut inputs);
        } else {
            inputs.push(arg.clone());
        }
    }

    Ok(inputs)
}

fn push_lines(content: &str, inputs: &mut Vec<String>) {
    for line in content.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (boxcheck::Result<serde_json::Value>, i32) {
    crate::tty::status("boxcheck is working...");

    match command {
        crate::Commands::Check(args) => dispatch!(args, global, check),
        crate::Commands::Digit(args) => dispatch!(args, global, digit),
        crate::Commands::Format(args) => dispatch!(args, global, format),

        // Special case: List is handled in main before dispatch
        crate::Commands::List => {
            let err = boxcheck::Error::validation_invalid_argument(
                "output_mode",
                "List command uses raw output mode",
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn literal_arguments_pass_through() {
        let inputs = gather_inputs(&to_args(&["CSQU3054383", "MSKU 123456"])).unwrap();
        assert_eq!(inputs, vec!["CSQU3054383", "MSKU 123456"]);
    }

    #[test]
    fn at_file_expands_to_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CSQU3054383").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  MSKU1234565  ").unwrap();

        let arg = format!("@{}", file.path().display());
        let inputs = gather_inputs(&[arg]).unwrap();
        assert_eq!(inputs, vec!["CSQU3054383", "MSKU1234565"]);
    }

    #[test]
    fn at_file_mixes_with_literals() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TRLU9876542").unwrap();

        let args = vec!["CSQU3054383".to_string(), format!("@{}", file.path().display())];
        let inputs = gather_inputs(&args).unwrap();
        assert_eq!(inputs, vec!["CSQU3054383", "TRLU9876542"]);
    }

    #[test]
    fn bare_at_sign_fails() {
        let err = gather_inputs(&to_args(&["@"])).unwrap_err();
        assert_eq!(err.code, boxcheck::ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = gather_inputs(&to_args(&["@/no/such/file"])).unwrap_err();
        assert_eq!(err.code, boxcheck::ErrorCode::InternalIoError);
    }
}
