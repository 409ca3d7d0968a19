mod cli;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use shift_engine::CalendarDate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` overrides the
/// default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let format = cli.output;
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Command::Time { start, end, brk } => {
            let result = shift_engine::time_duration(&start, &end, &brk)?;
            output::render_time(&result, format)
        }
        Command::Date { start, end } => {
            let start: CalendarDate = start.parse()?;
            let end: CalendarDate = end.parse()?;
            let days = shift_engine::date_duration_between(start, end)?;
            output::render_date(start, end, days, format)
        }
        Command::Pomodoro {
            start,
            end,
            brk,
            gtd,
            efficiency,
            main_ratio,
        } => {
            let plan =
                shift_engine::pomodoro_plan(&start, &end, &brk, &gtd, &efficiency, &main_ratio)?;
            output::render_plan(&plan, format)
        }
    }
}
