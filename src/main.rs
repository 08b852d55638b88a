use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{check, digit, format, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "boxcheck")]
#[command(version = VERSION)]
#[command(about = "CLI for ISO 6346 shipping container number validation and canonicalization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate container numbers against their check digit
    #[command(visible_alias = "validate")]
    Check(check::CheckArgs),
    /// Compute the expected check digit for a container number
    Digit(digit::DigitArgs),
    /// Canonicalize container numbers to their 11-character form
    Format(format::FormatArgs),
    /// List available commands (alias for --help)
    List,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    if matches!(cli.command, Commands::List) {
        let mut cmd = Cli::command();
        cmd.print_help().expect("Failed to print help");
        println!();
        return std::process::ExitCode::SUCCESS;
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
