//! Hour-of-day shift classification

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    /// Classify an hour of the day.
    ///
    /// Morning is before 12, Afternoon is 12 through 17 inclusive, Evening is
    /// 18 through 23. Returns `None` for hours outside 0-23.
    pub fn from_hour(hour: u32) -> Option<Shift> {
        match hour {
            0..=11 => Some(Shift::Morning),
            12..=17 => Some(Shift::Afternoon),
            18..=23 => Some(Shift::Evening),
            _ => None,
        }
    }

    pub fn from_time(time: NaiveTime) -> Shift {
        match time.hour() {
            0..=11 => Shift::Morning,
            12..=17 => Shift::Afternoon,
            _ => Shift::Evening,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
