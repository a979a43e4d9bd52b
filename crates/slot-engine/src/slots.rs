//! Hourly slot generation for a selected date.
//!
//! Slots are generated at one-hour granularity from the opening hour through
//! the closing hour inclusive: an 08:00–12:00 window offers 08:00, 09:00,
//! 10:00, 11:00 and 12:00. Blocked ranges match slots half-open `[start, end)`,
//! so a 09:00–10:00 block removes only the 09:00 slot.
//!
//! [`is_slot_blocked`] is the one shared blocking predicate; the slot picker,
//! the calendar widget and the admin blocking table all go through it.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::model::{Block, WorkingHours};

/// Whether the hourly slot starting at `time` on `date` is blocked.
///
/// A slot is blocked when a Block record for that exact date is whole-day
/// blocked or carries a [`BlockedSlot`](crate::model::BlockedSlot) whose
/// range contains the slot start. Blocks for other dates never apply.
pub fn is_slot_blocked(date: NaiveDate, time: NaiveTime, blocks: &[Block]) -> bool {
    blocks
        .iter()
        .filter(|block| block.date == date)
        .any(|block| block.blocks_time(time))
}

/// Generate the ordered list of bookable hourly slots for `date`.
///
/// Returns an empty list when `hours` is `None` (working hours not yet
/// fetched). Output is ascending, deterministic, and never includes a time
/// outside the working window.
pub fn generate_available_times(
    date: NaiveDate,
    hours: Option<&WorkingHours>,
    blocks: &[Block],
) -> Vec<NaiveTime> {
    let Some(hours) = hours else {
        return Vec::new();
    };

    hourly_ladder(hours)
        .filter(|slot| !is_slot_blocked(date, *slot, blocks))
        .collect()
}

/// The unfiltered hourly ladder inside the working window, for admin
/// hour-select widgets.
pub fn working_hour_slots(hours: Option<&WorkingHours>) -> Vec<NaiveTime> {
    match hours {
        Some(hours) => hourly_ladder(hours).collect(),
        None => Vec::new(),
    }
}

fn hourly_ladder(hours: &WorkingHours) -> impl Iterator<Item = NaiveTime> {
    (hours.start.hour()..=hours.end.hour()).filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
}
