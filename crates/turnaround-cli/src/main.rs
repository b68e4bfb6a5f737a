use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, trace};
use turnaround::compute_due_date;

/// Compute when a job is due, counting only working hours (Mon-Fri, 09:00-17:00)
#[derive(Parser)]
#[command(name = "turnaround", version)]
#[command(about = "Compute a business due date from a submission time and turnaround hours", long_about = None)]
struct Cli {
    /// Submission time in local wall-clock form, e.g. "2024-03-25 14:30"
    submitted: String,

    /// Turnaround in working hours
    #[arg(allow_negative_numbers = true)]
    hours: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The due time on a single line
    Text,
    /// The full result as pretty-printed JSON
    Json,
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(
        submitted = %cli.submitted,
        hours = cli.hours,
        format = ?cli.format,
        "turnaround started"
    );

    let result = compute_due_date(&cli.submitted, cli.hours)
        .with_context(|| format!("cannot compute due date for {:?}", cli.submitted))?;
    trace!(?result, "computed");

    match cli.format {
        OutputFormat::Text => println!("{}", result.due),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&result).context("failed to serialize result")?;
            println!("{json}");
        }
    }

    Ok(())
}
