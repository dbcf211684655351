mod cli;

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use markdown_preview::{Materializer, Pipeline, Previewer, Template};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose {
        "markdown_preview=debug"
    } else {
        "markdown_preview=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(default))?,
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let input = fs::read(&cli.file).map_err(|source| markdown_preview::Error::Read {
        path: cli.file.clone(),
        source,
    })?;

    let pipeline = Pipeline::new(Template::builtin()?);
    let document = pipeline.convert(&input, cli.template_path())?;
    let temp = Materializer::new().write_temp(&document)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", temp.path().display()).context("failed to print output path")?;
    out.flush().context("failed to print output path")?;
    drop(out);

    if cli.skip_preview {
        let path = temp.keep()?;
        tracing::debug!(path = %path.display(), "preview skipped, keeping file");
        return Ok(());
    }

    let result = Previewer::new().and_then(|previewer| previewer.preview(temp.path()));
    if let Err(e) = temp.close() {
        tracing::warn!(error = %e, "failed to remove temporary file");
    }
    result?;
    Ok(())
}
