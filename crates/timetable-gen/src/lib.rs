//! Lays out a week of timed slots from a start/end window, a fixed subject
//! length and optional interval and lunch breaks.
//!
//! Subjects rotate continuously across the whole week: Tuesday picks up the
//! rotation where Monday stopped. Breaks fire only when the day cursor lands
//! exactly on the configured instant; a subject that runs across the break
//! time means that break is skipped for the day.

use chrono::Weekday;
use timetable_ast::{DaySchedule, Slot, TimeOfDay, Timetable, WEEKDAYS};
use tracing::{debug, warn};

/// Upper bound on loop iterations per day. Zero or negative durations never
/// move the cursor forward, so this is what ends those days.
pub const SAFETY_CAP: usize = 1000;

/// Added to an end or break time that is not after the start, so that
/// "9:00 to 4:00" reads as 9 AM to 4 PM.
pub const PM_SHIFT_MINUTES: i64 = 12 * 60;

pub const DEFAULT_INTERVAL_MINUTES: i64 = 15;
pub const DEFAULT_LUNCH_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub subjects: Vec<String>,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// `None` when no usable duration was supplied. Days stop at the first
    /// subject slot in that case.
    pub subject_minutes: Option<i64>,
    pub interval: Option<TimeOfDay>,
    pub interval_minutes: i64,
    pub lunch: Option<TimeOfDay>,
    pub lunch_minutes: i64,
}

impl ScheduleConfig {
    pub fn new(subjects: Vec<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            subjects,
            start,
            end,
            subject_minutes: None,
            interval: None,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            lunch: None,
            lunch_minutes: DEFAULT_LUNCH_MINUTES,
        }
    }

    pub fn with_subject_minutes(mut self, minutes: Option<i64>) -> Self {
        self.subject_minutes = minutes;
        self
    }

    pub fn with_interval(mut self, at: Option<TimeOfDay>, minutes: i64) -> Self {
        self.interval = at;
        self.interval_minutes = minutes;
        self
    }

    pub fn with_lunch(mut self, at: Option<TimeOfDay>, minutes: i64) -> Self {
        self.lunch = at;
        self.lunch_minutes = minutes;
        self
    }

    /// Applies the twelve hour shift to the end time and to each configured
    /// break that is not after the start. Each value is shifted at most once.
    pub fn normalized(&self) -> Self {
        let shift = |t: TimeOfDay| {
            if t <= self.start {
                t + PM_SHIFT_MINUTES
            } else {
                t
            }
        };

        Self {
            subjects: self.subjects.clone(),
            start: self.start,
            end: shift(self.end),
            subject_minutes: self.subject_minutes,
            interval: self.interval.map(shift),
            interval_minutes: self.interval_minutes,
            lunch: self.lunch.map(shift),
            lunch_minutes: self.lunch_minutes,
        }
    }
}

/// Position in the subject rotation. Advances once per emitted subject slot
/// and is carried from one day into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RotationCursor(pub usize);

impl RotationCursor {
    fn pick<'a>(&self, subjects: &'a [String]) -> Option<&'a str> {
        if subjects.is_empty() {
            return None;
        }
        Some(subjects[self.0 % subjects.len()].as_str())
    }

    fn advance(self) -> Self {
        RotationCursor(self.0.wrapping_add(1))
    }
}

enum Step {
    Emit(Slot, i64),
    Skip(i64),
    Stop,
}

/// Decides what happens at `current`, in priority order: interval, lunch,
/// then a subject if it fits before the end.
fn next_step(config: &ScheduleConfig, current: TimeOfDay, cursor: RotationCursor) -> Step {
    if config.interval == Some(current) {
        return Step::Emit(Slot::interval(current), config.interval_minutes);
    }
    if config.lunch == Some(current) {
        return Step::Emit(Slot::lunch(current), config.lunch_minutes);
    }

    let minutes = match config.subject_minutes {
        Some(m) => m,
        None => return Step::Stop,
    };
    if current + minutes > config.end {
        return Step::Stop;
    }

    match cursor.pick(&config.subjects) {
        Some(name) => Step::Emit(Slot::subject(current, name), minutes),
        // No subjects: the period passes empty so later breaks still land.
        None => Step::Skip(minutes),
    }
}

/// Builds one day from an already normalized config, starting the rotation
/// at `cursor`. Returns the day and the cursor for the following day.
pub fn generate_day(
    config: &ScheduleConfig,
    mut cursor: RotationCursor,
) -> (DaySchedule, RotationCursor) {
    let mut slots = DaySchedule::new();
    let mut current = config.start;
    let mut iterations = 0;

    while current < config.end {
        if iterations >= SAFETY_CAP {
            warn!(
                "stopped after {} iterations at {}; check the durations",
                SAFETY_CAP, current
            );
            break;
        }
        iterations += 1;

        match next_step(config, current, cursor) {
            Step::Emit(slot, minutes) => {
                if !slot.label.is_break() {
                    cursor = cursor.advance();
                }
                slots.push(slot);
                current += minutes;
            }
            Step::Skip(minutes) => current += minutes,
            Step::Stop => break,
        }
    }

    (slots, cursor)
}

/// Generates Monday through Friday. The config is normalized here, so pass
/// the times as they were entered.
pub fn generate(config: &ScheduleConfig) -> Timetable {
    let config = config.normalized();
    debug!(
        "generating {} to {} with {} subjects",
        config.start,
        config.end,
        config.subjects.len()
    );

    let mut timetable = Timetable::new();
    let mut cursor = RotationCursor::default();
    for weekday in WEEKDAYS {
        let (slots, next) = generate_day(&config, cursor);
        debug!("{}: {} slots", weekday, slots.len());
        cursor = next;
        timetable.insert(weekday, slots);
    }
    timetable
}

/// Convenience lookup that treats a missing day as empty.
pub fn day<'a>(timetable: &'a Timetable, weekday: Weekday) -> &'a [Slot] {
    timetable.get(&weekday).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: i64, m: i64) -> TimeOfDay {
        TimeOfDay::from_hm(h, m)
    }

    fn subjects(names: &[&str]) -> Vec<String> {
        names.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn end_before_start_is_shifted_once() {
        let config = ScheduleConfig::new(vec![], t(9, 0), t(4, 0)).normalized();
        assert_eq!(config.end, t(16, 0));
        // Already normalized values stay put.
        assert_eq!(config.normalized().end, t(16, 0));
    }

    #[test]
    fn equal_start_and_end_is_shifted() {
        let config = ScheduleConfig::new(vec![], t(9, 0), t(9, 0)).normalized();
        assert_eq!(config.end, t(21, 0));
    }

    #[test]
    fn breaks_before_start_are_shifted() {
        let config = ScheduleConfig::new(vec![], t(9, 0), t(4, 0))
            .with_interval(Some(t(9, 0)), 15)
            .with_lunch(Some(t(1, 0)), 60)
            .normalized();
        assert_eq!(config.interval, Some(t(21, 0)));
        assert_eq!(config.lunch, Some(t(13, 0)));
    }

    #[test]
    fn overrunning_subject_is_dropped() {
        let config = ScheduleConfig::new(subjects(&["A"]), t(9, 0), t(10, 30))
            .with_subject_minutes(Some(60));
        let (slots, cursor) = generate_day(&config.normalized(), RotationCursor(0));
        assert_eq!(slots, vec![Slot::subject(t(9, 0), "A")]);
        assert_eq!(cursor, RotationCursor(1));
    }

    #[test]
    fn interval_wins_over_lunch_at_same_instant() {
        let config = ScheduleConfig::new(subjects(&["A"]), t(9, 0), t(11, 0))
            .with_subject_minutes(Some(60))
            .with_interval(Some(t(10, 0)), 15)
            .with_lunch(Some(t(10, 0)), 30);
        let (slots, _) = generate_day(&config.normalized(), RotationCursor(0));
        assert_eq!(
            slots,
            vec![Slot::subject(t(9, 0), "A"), Slot::interval(t(10, 0))]
        );
    }

    #[test]
    fn break_inside_a_subject_is_skipped() {
        let config = ScheduleConfig::new(subjects(&["A"]), t(9, 0), t(12, 0))
            .with_subject_minutes(Some(60))
            .with_interval(Some(t(10, 30)), 15);
        let (slots, _) = generate_day(&config.normalized(), RotationCursor(0));
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| !s.label.is_break()));
    }

    #[test]
    fn missing_duration_stops_at_first_subject() {
        let config = ScheduleConfig::new(subjects(&["A"]), t(9, 0), t(12, 0))
            .with_interval(Some(t(21, 0)), 15);
        let (slots, cursor) = generate_day(&config.normalized(), RotationCursor(3));
        assert!(slots.is_empty());
        assert_eq!(cursor, RotationCursor(3));
    }

    #[test]
    fn break_at_start_is_emitted_before_missing_duration_stops() {
        let config = ScheduleConfig {
            lunch: Some(t(9, 0)),
            ..ScheduleConfig::new(subjects(&["A"]), t(9, 0), t(12, 0))
        };
        // Not normalized on purpose: the lunch sits exactly on the start.
        let (slots, _) = generate_day(&config, RotationCursor(0));
        assert_eq!(slots, vec![Slot::lunch(t(9, 0))]);
    }

    #[test]
    fn negative_duration_is_capped() {
        let config = ScheduleConfig::new(subjects(&["A", "B"]), t(9, 0), t(10, 0))
            .with_subject_minutes(Some(-5));
        let (slots, cursor) = generate_day(&config.normalized(), RotationCursor(0));
        assert_eq!(slots.len(), SAFETY_CAP);
        assert_eq!(cursor, RotationCursor(SAFETY_CAP));
    }

    #[test]
    fn extreme_values_do_not_panic() {
        let config =
            ScheduleConfig::new(subjects(&["A"]), TimeOfDay(i64::MAX - 10), TimeOfDay(i64::MAX))
                .with_subject_minutes(Some(i64::MAX));
        let timetable = generate(&config);
        assert_eq!(timetable.len(), 5);
    }

    #[test]
    fn missing_day_is_empty() {
        assert!(day(&Timetable::new(), Weekday::Sat).is_empty());
    }
}
