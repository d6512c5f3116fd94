//! Command line interface.

use crate::config::Settings;
use crate::demo::write_demo;
use crate::output::OutputFormat;
use crate::session::{handle_address, run_session, write_intro, Exercise};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{BufRead, Write};

/// IPv4 notation converter and classful address analyzer
#[derive(Parser, Debug)]
#[command(name = "ipv4-tutor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    /// Skip the worked examples before the prompt
    #[arg(long, global = true)]
    pub no_demo: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert addresses between dotted-decimal and dotted-binary notation
    Convert(ExerciseArgs),
    /// Show class, default mask, network and broadcast address
    Classify(ExerciseArgs),
}

#[derive(Parser, Debug)]
pub struct ExerciseArgs {
    /// Addresses to process; without any, an interactive prompt is started
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,
}

impl Commands {
    fn split(self) -> (Exercise, Vec<String>) {
        match self {
            Commands::Convert(args) => (Exercise::Convert, args.addresses),
            Commands::Classify(args) => (Exercise::Classify, args.addresses),
        }
    }
}

/// Parse the process arguments and run against stdin/stdout.
pub fn run(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    execute(cli, settings, stdin.lock(), &mut stdout)
}

/// Run a parsed command.
///
/// With addresses on the command line each is processed once. Otherwise the
/// demo (if enabled) is printed and an interactive session reads `input`.
pub fn execute<R: BufRead, W: Write>(
    cli: Cli,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let format = cli.output;
    let (exercise, addresses) = cli.command.split();
    log::info!("Exercise {exercise}, output {format:?}");

    if !addresses.is_empty() {
        let mut rejected = 0;
        for address in &addresses {
            if !handle_address(out, exercise, format, address.trim())? {
                rejected += 1;
            }
        }
        log::info!("Processed {} addresses, {rejected} rejected", addresses.len());
        return Ok(());
    }

    if format == OutputFormat::Human {
        write_intro(out, exercise)?;
    }
    if settings.show_demo && !cli.no_demo {
        write_demo(out, exercise, format)?;
    }
    run_session(input, out, exercise, format)?;
    Ok(())
}
