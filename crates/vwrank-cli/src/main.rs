mod cli;
mod error;
mod logging;
mod output;
mod pipeline;
mod selection;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use vwrank_core::PriceLoader;

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use crate::pipeline::ReportOptions;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "vwrank failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let selection = match cli.selection {
        Some(selection) => selection,
        None => selection::prompt(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let loader = PriceLoader::default().with_timeout_ms(cli.timeout_ms);
    let options = ReportOptions {
        selection,
        top: cli.top,
        zero_volume: cli.zero_volume.into(),
    };
    let report = pipeline::build_report(&loader, &cli.source(), options).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => output::render_text(&report, &mut out)?,
        OutputFormat::Json => output::render_json(&report, cli.pretty, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
