use std::io::{self, BufRead, Write};

use clock_parser::{parse_duration, parse_subjects, parse_time_to_minutes, DurationError};
use timetable_ast::TimeOfDay;
use timetable_gen::{ScheduleConfig, DEFAULT_INTERVAL_MINUTES, DEFAULT_LUNCH_MINUTES};
use tracing::warn;

use crate::prompt::Prompter;

/// Answers exactly as typed, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub subjects: String,
    pub start: String,
    pub end: String,
    pub subject_minutes: String,
    pub interval: String,
    pub interval_minutes: String,
    pub lunch: String,
    pub lunch_minutes: String,
}

impl RawInput {
    /// Fills every field in the fixed question order. Fields already set in
    /// `given` are not asked for.
    pub fn collect<R: BufRead, W: Write>(
        given: PartialInput,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<Self> {
        Ok(Self {
            subjects: prompter.answer(given.subjects, "Enter subjects (comma separated): ")?,
            start: prompter.answer(given.start, "Enter college start time (HH:MM or 9.30): ")?,
            end: prompter.answer(given.end, "Enter college end time (HH:MM or 16.30): ")?,
            subject_minutes: prompter.answer(
                given.subject_minutes,
                "Enter duration per subject (minutes): ",
            )?,
            interval: prompter.answer(given.interval, "Enter interval time (optional) (HH:MM): ")?,
            interval_minutes: prompter.answer(
                given.interval_minutes,
                "Enter interval duration (minutes, default 15): ",
            )?,
            lunch: prompter.answer(given.lunch, "Enter lunch time (optional) (HH:MM): ")?,
            lunch_minutes: prompter.answer(
                given.lunch_minutes,
                "Enter lunch duration (minutes, default 60): ",
            )?,
        })
    }

    /// Turns the answers into a generator config. Nothing here fails:
    /// unusable answers fall back to defaults and are logged.
    pub fn to_config(&self) -> ScheduleConfig {
        let subjects = parse_subjects(&self.subjects);
        if subjects.is_empty() {
            warn!("no subjects given; only breaks will be scheduled");
        }

        let start = window_time("start", &self.start);
        let end = window_time("end", &self.end);

        let subject_minutes = match parse_duration(&self.subject_minutes) {
            Ok(minutes) => Some(minutes),
            Err(e) => {
                warn!("subject duration: {}; no subjects will be placed", e);
                None
            }
        };

        ScheduleConfig::new(subjects, start, end)
            .with_subject_minutes(subject_minutes)
            .with_interval(
                break_time("interval", &self.interval),
                break_minutes("interval", &self.interval_minutes, DEFAULT_INTERVAL_MINUTES),
            )
            .with_lunch(
                break_time("lunch", &self.lunch),
                break_minutes("lunch", &self.lunch_minutes, DEFAULT_LUNCH_MINUTES),
            )
    }
}

/// Command line values; `None` means "ask".
#[derive(Debug, Clone, Default)]
pub struct PartialInput {
    pub subjects: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub subject_minutes: Option<String>,
    pub interval: Option<String>,
    pub interval_minutes: Option<String>,
    pub lunch: Option<String>,
    pub lunch_minutes: Option<String>,
}

// A missing start or end counts as midnight, so a missing end ends up at
// noon once the twelve hour shift applies.
fn window_time(name: &str, raw: &str) -> TimeOfDay {
    parse_time_to_minutes(raw).unwrap_or_else(|| {
        warn!("{} time {:?} not understood; using 00:00", name, raw);
        TimeOfDay(0)
    })
}

fn break_time(name: &str, raw: &str) -> Option<TimeOfDay> {
    let at = parse_time_to_minutes(raw);
    if at.is_none() && !raw.trim().is_empty() {
        warn!("{} time {:?} not understood; no {} today", name, raw, name);
    }
    at
}

fn break_minutes(name: &str, raw: &str, default: i64) -> i64 {
    match parse_duration(raw) {
        Ok(0) | Err(DurationError::Empty) => default,
        Ok(minutes) => minutes,
        Err(e) => {
            warn!("{} duration: {}; using {}", name, e, default);
            default
        }
    }
}
