//! Primer CLI - replay the language-basics tour

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use indexmap::IndexMap;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use primer::cli::{Args, SubCommand};
use primer::{
    format_report, format_sections, interpolate, OutputFormat, RunConfig, TourRunner, Value,
    SECTIONS,
};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays the tour transcript.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let output_format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match args.command {
        SubCommand::Run { sections } => {
            let mut runner = TourRunner::new(RunConfig { sections });
            let report = runner.run()?;

            print!("{}", format_report(&report, &output_format, args.verbose));
            if output_format == OutputFormat::Json {
                println!();
            }

            if !report.success {
                let error = report
                    .error
                    .unwrap_or_else(|| "tour stopped".to_string());
                return Err(anyhow!(error));
            }

            if args.verbose && output_format == OutputFormat::Human {
                println!(
                    "\n--- Tour completed: {} sections ---",
                    report.sections_completed
                );
            }
            Ok(())
        }

        SubCommand::List => {
            let listing = format_sections(SECTIONS, &output_format);
            print!("{}", listing);
            if output_format == OutputFormat::Json {
                println!();
            }
            Ok(())
        }

        SubCommand::Fmt { template, vars } => {
            let mut bindings = IndexMap::new();
            for var in vars {
                let Some((name, value)) = var.split_once('=') else {
                    bail!("expected NAME=VALUE, got '{}'", var);
                };
                bindings.insert(name.trim().to_string(), Value::parse_literal(value));
            }
            let rendered = interpolate(&template, &bindings)
                .with_context(|| format!("rendering '{}'", template))?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
