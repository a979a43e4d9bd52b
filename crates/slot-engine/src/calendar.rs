//! Calendar-date availability rules.
//!
//! Decides whether a calendar date is selectable given the current time, the
//! booking policy, and the Block records fetched for the query window. All
//! day, weekday, and hour reads happen in the configured timezone.
//!
//! Partial (slot-level) blocks never disable a whole date here; the slot
//! picker consults [`crate::slots::generate_available_times`] for that.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};
use crate::model::Block;

/// The business timezone used when no explicit zone is configured.
pub const DEFAULT_TIMEZONE: Tz = Tz::America__Sao_Paulo;

/// Local hour at which "today" stops accepting same-day bookings.
///
/// Deliberately independent of [`WorkingHours::end`](crate::model::WorkingHours):
/// the same-day cutoff is a booking policy, not an opening-hours fact.
pub const DEFAULT_CLOSING_HOUR: u32 = 18;

/// Policy knobs for [`is_date_disabled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRules {
    /// IANA zone all comparisons are performed in.
    pub timezone: Tz,
    /// When true, Saturday and Sunday are never selectable.
    pub block_weekends: bool,
    /// When false, today becomes unselectable once the local hour reaches
    /// `closing_hour`.
    pub allow_after_hours: bool,
    /// Same-day cutoff hour, see [`DEFAULT_CLOSING_HOUR`].
    pub closing_hour: u32,
}

impl Default for DateRules {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            block_weekends: true,
            allow_after_hours: true,
            closing_hour: DEFAULT_CLOSING_HOUR,
        }
    }
}

impl DateRules {
    /// Build rules for a named IANA timezone, keeping the default policy flags.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidTimezone`] when `name` is not a valid IANA
    /// identifier.
    pub fn for_timezone(name: &str) -> Result<Self> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| SlotError::InvalidTimezone(name.to_string()))?;
        Ok(Self {
            timezone,
            ..Self::default()
        })
    }
}

/// Decide whether a calendar date must be disabled in the booking calendar.
///
/// `now` is an explicit argument so the result is a pure function of its
/// inputs; the UI re-runs this per rendered cell and must get identical
/// answers for identical inputs.
///
/// Checks short-circuit in order:
///
/// 1. the candidate day is strictly before today
/// 2. weekend, when `rules.block_weekends`
/// 3. today after the closing hour, when `!rules.allow_after_hours`
/// 4. a whole-day Block record exists for the date
///
/// A date with no matching Block record, or one with `is_blocked: false` and
/// no blocked slots, is fully available. Duplicate records for the same date
/// are tolerated: any one of them marking the day blocked wins.
pub fn is_date_disabled(
    candidate: DateTime<Utc>,
    now: DateTime<Utc>,
    rules: &DateRules,
    blocks: &[Block],
) -> bool {
    let now_local = now.with_timezone(&rules.timezone);
    let today = now_local.date_naive();
    let day = candidate.with_timezone(&rules.timezone).date_naive();

    if day < today {
        return true;
    }

    if rules.block_weekends && matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        return true;
    }

    if !rules.allow_after_hours && day == today && now_local.hour() >= rules.closing_hour {
        return true;
    }

    // Whole-day blocks only; slot-level blocks leave the date selectable.
    blocks.iter().any(|block| block.date == day && block.is_blocked)
}
