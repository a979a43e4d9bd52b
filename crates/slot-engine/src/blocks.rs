//! Admin helpers over Block lists: query windows and the active-blocks view.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::model::{Block, BlockedSlot};

/// First and last day of the current month in `tz`.
///
/// This is the default query window the admin panel fetches blocks for.
pub fn month_range(now: DateTime<Utc>, tz: Tz) -> (NaiveDate, NaiveDate) {
    let today = now.with_timezone(&tz).date_naive();
    let first = today - Days::new(u64::from(today.day0()));
    let last = first + Months::new(1) - Days::new(1);
    (first, last)
}

/// Filter to the blocks the admin "active blocks" table should show.
///
/// Past dates are dropped. Whole-day blocks on today or later are kept. A
/// partial block is kept while it can still matter: its date is in the
/// future, or at least one of its slots ends after `now` today. Output is
/// sorted by date, then id.
pub fn active_blocks(blocks: &[Block], now: DateTime<Utc>, tz: Tz) -> Vec<Block> {
    let now_local = now.with_timezone(&tz);
    let today = now_local.date_naive();
    let now_time = now_local.time();

    let mut active: Vec<Block> = blocks
        .iter()
        .filter(|block| {
            if block.date < today {
                return false;
            }
            if block.is_blocked {
                return true;
            }
            block
                .blocked_slots
                .iter()
                .any(|slot| block.date > today || slot.end > now_time)
        })
        .cloned()
        .collect();

    active.sort_by_key(|block| (block.date, block.id));
    active
}

/// `"HH:MM - HH:MM"` display form of a blocked slot, for block-table rows.
pub fn format_slot_range(slot: &BlockedSlot) -> String {
    format!(
        "{} - {}",
        slot.start.format("%H:%M"),
        slot.end.format("%H:%M")
    )
}
