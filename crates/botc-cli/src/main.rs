//! Translation sheet tooling CLI.

use std::io::{self, IsTerminal};

use clap::Parser;

use botc_cli::cli::{Cli, Command, ReportFormatArg, ValidateArgs};
use botc_cli::commands::{run_generate_scripts, run_sanitize, run_validate};
use botc_cli::logging::init_logging;
use botc_cli::report::{ReportFormat, render_generate, render_sanitize, render_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("[error] failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => validate(&args),
        Command::Sanitize(args) => match run_sanitize(&args) {
            Ok(report) => match render_sanitize(&report, &mut io::stdout().lock()) {
                Ok(()) => report.exit_code(args.fail_if_found),
                Err(error) => fail(&anyhow::Error::from(error)),
            },
            Err(error) => fail(&error),
        },
        Command::GenerateScripts(args) => match run_generate_scripts(&args) {
            Ok(report) => match render_generate(&report, &mut io::stdout().lock()) {
                Ok(()) => 0,
                Err(error) => fail(&anyhow::Error::from(error)),
            },
            Err(error) => fail(&error),
        },
    };
    std::process::exit(exit_code);
}

fn validate(args: &ValidateArgs) -> i32 {
    let result = match run_validate(args) {
        Ok(result) => result,
        Err(error) => return fail(&error),
    };
    let format = match args.format {
        ReportFormatArg::Text => ReportFormat::Text,
        ReportFormatArg::Json => ReportFormat::Json,
    };
    let rendered = render_validation(
        &result,
        format,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    match rendered {
        Ok(()) => result.exit_code(args.options().strict_warnings),
        Err(error) => fail(&anyhow::Error::from(error)),
    }
}

fn fail(error: &anyhow::Error) -> i32 {
    eprintln!("[error] {error:#}");
    1
}
