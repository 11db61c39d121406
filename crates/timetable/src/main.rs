use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::input::{PartialInput, RawInput};
use crate::prompt::Prompter;

mod input;
mod prompt;
mod report;

/// Build a Monday to Friday class timetable.
///
/// Anything not given as an option is asked for interactively, in order.
/// Times accept 9:30, 09:30 or 9.30; an end or break time at or before the
/// start is read as afternoon.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Comma separated subjects, rotated in order across the week
    #[clap(long, value_parser)]
    subjects: Option<String>,

    /// First period of the day
    #[clap(long, value_parser)]
    start: Option<String>,

    /// End of the day; no subject may run past it
    #[clap(long, value_parser)]
    end: Option<String>,

    /// Length of every subject period, in minutes
    #[clap(short = 'd', long, value_parser)]
    subject_minutes: Option<String>,

    /// Start of the interval break (leave empty for none)
    #[clap(short, long, value_parser)]
    interval: Option<String>,

    /// Interval length in minutes (default 15)
    #[clap(long, value_parser)]
    interval_minutes: Option<String>,

    /// Start of the lunch break (leave empty for none)
    #[clap(short, long, value_parser)]
    lunch: Option<String>,

    /// Lunch length in minutes (default 60)
    #[clap(long, value_parser)]
    lunch_minutes: Option<String>,

    /// Never prompt; anything not given counts as blank
    #[clap(long, action)]
    no_prompt: bool,
}

impl From<&Args> for PartialInput {
    fn from(args: &Args) -> Self {
        Self {
            subjects: args.subjects.clone(),
            start: args.start.clone(),
            end: args.end.clone(),
            subject_minutes: args.subject_minutes.clone(),
            interval: args.interval.clone(),
            interval_minutes: args.interval_minutes.clone(),
            lunch: args.lunch.clone(),
            lunch_minutes: args.lunch_minutes.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let interactive = !args.no_prompt;
    if interactive {
        writeln!(stdout, "{}", report::BANNER)?;
    }

    let mut prompter = Prompter::new(stdin.lock(), &mut stdout, interactive);
    let raw = RawInput::collect(PartialInput::from(&args), &mut prompter)
        .context("failed to read answers")?;
    drop(prompter);
    tracing::debug!("answers: {:?}", raw);

    let timetable = timetable_gen::generate(&raw.to_config());

    report::render(&timetable, &mut stdout).context("failed to print timetable")?;
    stdout.flush()?;
    Ok(())
}
