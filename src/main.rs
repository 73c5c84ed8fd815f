use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use cuisinesearch::{list_restaurants, search_restaurants, RestaurantRecord};

mod cli;
use cli::{display, logging, Cli, Commands, ErrorEnvelope, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(cli.verbose, cli.quiet, cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = cli.config();
    let sources = config.sources();
    let command = cli.command.name();

    let (outcome, ranked) = match &cli.command {
        Commands::List => (list_restaurants(&sources), false),
        Commands::Search(args) => (
            search_restaurants(&sources, args.params(), config.result_limit),
            true,
        ),
    };

    let mut stdout = io::stdout().lock();
    match outcome {
        Ok(records) => {
            info!("status 200 on '{}'", command);
            write_records(&mut stdout, &records, cli.format, ranked)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let envelope = ErrorEnvelope::new(command, &err);
            error!(kind = err.kind(), "status {} on '{}': {}", envelope.status, command, err);
            match cli.format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut stdout, &envelope)?;
                    writeln!(stdout)?;
                }
                OutputFormat::Table => eprintln!("❌ {}", err),
            }
            Ok(ExitCode::from(if err.is_client_error() { 2 } else { 1 }))
        }
    }
}

fn write_records(
    out: &mut impl Write,
    records: &[RestaurantRecord],
    format: OutputFormat,
    ranked: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{}", display::render_table(records, ranked, display::use_colors()))?;
        }
    }
    Ok(())
}
