// Command-line host for the South African ID number validator.
// Plays the part of the editing UI: feeds raw values in, prints the status label.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde::Serialize;

use sa_id_validator::{
    presentation::StatusLabel, utils::CliError, IdNumberValidator, ValidationResult,
};

#[derive(Parser, Debug)]
#[command(name = "sa-id", version, about = "Validate South African ID numbers")]
struct Args {
    /// ID numbers to check; read one per line from stdin when omitted
    ids: Vec<String>,

    /// Emit one JSON report per line
    #[arg(long)]
    json: bool,

    /// Print nothing, only set the exit status
    #[arg(short, long, conflicts_with = "json")]
    quiet: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    result: ValidationResult,
    label: StatusLabel,
}

fn print_report(out: &mut impl Write, args: &Args, report: &Report) -> Result<(), CliError> {
    if args.quiet {
        return Ok(());
    }
    if args.json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{:<15} {:<8} {}",
            report.input,
            if report.result.is_valid() { "VALID" } else { "INVALID" },
            report.label.text
        )?;
    }
    Ok(())
}

/// Validates every input, writing one report each. Returns whether all were valid.
fn check_all<I>(inputs: I, args: &Args, out: &mut impl Write) -> Result<bool, CliError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let validator = IdNumberValidator::new();
    let mut all_valid = true;

    for input in inputs {
        let input = input?;
        let result = validator.validate(&input);
        let report = Report {
            input: &input,
            result,
            label: StatusLabel::for_result(&result),
        };
        print_report(&mut *out, args, &report)?;
        all_valid &= result.is_valid();
    }

    Ok(all_valid)
}

fn run(args: &Args) -> Result<bool, CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.ids.is_empty() {
        info!("reading ID numbers from stdin");
        // Only the line terminator is dropped; the value is judged as typed.
        check_all(io::stdin().lock().lines(), args, &mut out)
    } else {
        check_all(args.ids.iter().cloned().map(Ok), args, &mut out)
    }
}

/// 0 when every input is valid, 1 when any is invalid, 2 on failure.
fn exit_status(outcome: &Result<bool, CliError>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let outcome = run(&args);
    if let Err(err) = &outcome {
        error!("{}", err);
        eprintln!("Error: {}", err);
    }
    ExitCode::from(exit_status(&outcome))
}
