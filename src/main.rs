use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, Shell, generate};
use sidediff::cli::{Cli, Commands};
use sidediff::commands;
use sidediff::config::{ColorChoice, Config};
use sidediff::output::{self, Verbosity};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SIDEDIFF_LOG";

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            output::error(&e);
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "sidediff=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second initialization (tests embedding the binary) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    output::set_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            let color = cli.color.unwrap_or(config.terminal.color);
            match color {
                ColorChoice::Always => colored::control::set_override(true),
                ColorChoice::Never => colored::control::set_override(false),
                ColorChoice::Auto => {}
            }

            let differs = commands::compare::execute(&args, &config, color)?;
            Ok(i32::from(differs && args.exit_code))
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            print_completions::<Shell>(shell, &mut cmd);
            Ok(0)
        }
    }
}
