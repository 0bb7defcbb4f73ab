/*!
# The handoff CLI

Runs the parameter-passing demonstrations and explains the disciplines
they cover.
*/
use crate::error::CliError;
use clap::Parser;
use handoff_demo::driver;
use handoff_library::StdioHost;
use handoff_library::diag::{Diagnostic, Warned, write_diagnostics};

mod error;
mod explain;

#[derive(Debug, clap::Parser)]
struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Run the demonstration sequence.
    Run,
    /// Describe one of the parameter-passing disciplines.
    Explain(ExplainArgs),
}

#[derive(Debug, clap::Parser)]
pub struct ExplainArgs {
    /// One of: value, reference, output, discard, variadic.
    pub topic: String,
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    match args.command {
        Command::Run => run()?,
        Command::Explain(args) => explain::explain_command(args)?,
    }

    Ok(())
}

fn run() -> Result<(), CliError> {
    let host = StdioHost;
    let Warned { value, warnings } = driver::run_collecting(&host);

    match value {
        Ok(()) => {
            print_diagnostics(&[], &warnings)?;
            Ok(())
        }
        Err(errors) => {
            print_diagnostics(&errors, &warnings)?;
            Err(CliError::Execution)
        }
    }
}

fn print_diagnostics(errors: &[Diagnostic], warnings: &[Diagnostic]) -> Result<(), CliError> {
    write_diagnostics(errors, warnings, &mut std::io::stderr())?;
    Ok(())
}
