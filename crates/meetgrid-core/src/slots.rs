//! The fixed time grid: slot indices and their wall-clock times.
//!
//! A day is split into 24 indexed slots of 20 minutes each: `1..=12` cover
//! the morning period (08:00–12:00) and `13..=24` the afternoon period
//! (13:00–17:00). The grid is a global constant of the system, never a
//! per-participant shape, so a conflict check is an integer comparison
//! rather than a datetime operation.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Index into the daily grid, `1..=24`.
pub type SlotIndex = u8;

/// Number of slots in each half-day period.
pub const SLOTS_PER_PERIOD: u8 = 12;

/// Total slots per day.
pub const SLOTS_PER_DAY: u8 = 2 * SLOTS_PER_PERIOD;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: i64 = 20;

/// Half-day period a mentor declared themselves available for.
///
/// Serialized with the `"AM"`/`"PM"` tags the survey data uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "AM")]
    Morning,
    #[serde(rename = "PM")]
    Afternoon,
}

impl TimePeriod {
    /// First slot index owned by this period.
    fn first_slot(self) -> SlotIndex {
        match self {
            TimePeriod::Morning => 1,
            TimePeriod::Afternoon => SLOTS_PER_PERIOD + 1,
        }
    }

    /// Wall-clock start of this period.
    fn start_time(self) -> NaiveTime {
        let hour = match self {
            TimePeriod::Morning => 8,
            TimePeriod::Afternoon => 13,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).expect("period start is a valid time")
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimePeriod::Morning => write!(f, "AM"),
            TimePeriod::Afternoon => write!(f, "PM"),
        }
    }
}

/// The twelve slot indices owned by `period`, or the empty set when the
/// participant stated no preference.
pub fn slots_for(period: Option<TimePeriod>) -> BTreeSet<SlotIndex> {
    match period {
        Some(p) => (p.first_slot()..p.first_slot() + SLOTS_PER_PERIOD).collect(),
        None => BTreeSet::new(),
    }
}

/// Which period a slot index belongs to.
///
/// # Errors
/// Returns [`ScheduleError::InvalidSlot`] when `slot` is outside `1..=24`.
pub fn period_of(slot: SlotIndex) -> Result<TimePeriod> {
    if (1..=SLOTS_PER_PERIOD).contains(&slot) {
        Ok(TimePeriod::Morning)
    } else if (SLOTS_PER_PERIOD + 1..=SLOTS_PER_DAY).contains(&slot) {
        Ok(TimePeriod::Afternoon)
    } else {
        Err(ScheduleError::InvalidSlot { slot })
    }
}

/// Wall-clock time of a slot, formatted `"H:MM"` — hour unpadded, minutes
/// zero-padded: `time_of(1) == "8:00"`, `time_of(24) == "16:40"`.
///
/// # Errors
/// Returns [`ScheduleError::InvalidSlot`] when `slot` is outside `1..=24`.
pub fn time_of(slot: SlotIndex) -> Result<String> {
    let period = period_of(slot)?;
    let offset = i64::from((slot - 1) % SLOTS_PER_PERIOD) * SLOT_MINUTES;
    let time = period.start_time() + Duration::minutes(offset);
    Ok(time.format("%-H:%M").to_string())
}
