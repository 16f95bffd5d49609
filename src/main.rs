mod cli;
mod logging;

use std::env;
use std::io::{self, IsTerminal, Write};
use std::process;

use anyhow::{Context, Result};
use cal::{RenderOptions, render_month, render_year};
use chrono::Local;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use tracing::info;

use crate::cli::{Cli, Request};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!(
            "{} {e:#}",
            "Error:".if_supports_color(Stream::Stderr, |t| t.red())
        );
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let highlight = cli.highlight(
        env::var_os("NO_COLOR").as_deref(),
        io::stdout().is_terminal(),
    );
    let options = if highlight {
        RenderOptions::with_today(today)
    } else {
        RenderOptions::plain()
    };

    let request = cli.request(today)?;
    info!(?request, %today, "rendering");
    let text = match request {
        Request::Month { month, year } => render_month(month, year, &options)?,
        Request::Year { year } => render_year(year, &options)?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write calendar to stdout")
}

