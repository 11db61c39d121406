use std::{
    fmt,
    ops::{Add, AddAssign},
};

use chrono::{NaiveTime, Weekday};
use indexmap::IndexMap;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// The school week, in display order.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Minutes elapsed since midnight.
///
/// Not bounded to a single day: values past 1440 (or below 0) are valid and
/// only wrap when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(pub i64);

impl TimeOfDay {
    /// Saturates instead of overflowing, like `Add`.
    pub fn from_hm(hours: i64, minutes: i64) -> Self {
        Self(hours.saturating_mul(60).saturating_add(minutes))
    }

    /// The same instant folded into `[0, 1440)`.
    pub fn wrapped(self) -> Self {
        Self(self.0.rem_euclid(MINUTES_PER_DAY))
    }
}

impl Add<i64> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, minutes: i64) -> Self::Output {
        TimeOfDay(self.0.saturating_add(minutes))
    }
}

impl AddAssign<i64> for TimeOfDay {
    fn add_assign(&mut self, minutes: i64) {
        *self = *self + minutes;
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // wrapped() is always < 1440, so the seconds value fits a NaiveTime.
        let secs = (self.wrapped().0 * 60) as u32;
        match NaiveTime::from_num_seconds_from_midnight_opt(secs, 0) {
            Some(t) => write!(f, "{}", t.format("%H:%M")),
            None => write!(f, "--:--"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotLabel {
    Subject(String),
    Interval,
    LunchBreak,
}

impl SlotLabel {
    pub fn is_break(&self) -> bool {
        !matches!(self, SlotLabel::Subject(_))
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::Subject(name) => f.write_str(name),
            SlotLabel::Interval => f.write_str("Interval"),
            SlotLabel::LunchBreak => f.write_str("Lunch Break"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub time: TimeOfDay,
    pub label: SlotLabel,
}

impl Slot {
    pub fn subject(time: TimeOfDay, name: impl Into<String>) -> Self {
        Self {
            time,
            label: SlotLabel::Subject(name.into()),
        }
    }

    pub fn interval(time: TimeOfDay) -> Self {
        Self {
            time,
            label: SlotLabel::Interval,
        }
    }

    pub fn lunch(time: TimeOfDay) -> Self {
        Self {
            time,
            label: SlotLabel::LunchBreak,
        }
    }
}

pub type DaySchedule = Vec<Slot>;

/// One schedule per weekday, in `WEEKDAYS` order.
pub type Timetable = IndexMap<Weekday, DaySchedule>;
