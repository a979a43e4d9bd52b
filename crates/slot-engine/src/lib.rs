//! # slot-engine
//!
//! Deterministic date and hourly-slot availability for booking calendars.
//!
//! Given the business working hours, the Block records fetched for a query
//! window, and a timezone, the engine answers the two questions a booking UI
//! asks on every render:
//!
//! - is this calendar date selectable at all?
//! - which hourly slots on a selected date are still bookable?
//!
//! Both answers are pure functions of their inputs; the current time is an
//! explicit argument, never read ambiently, so identical inputs always yield
//! identical outputs.
//!
//! ## Modules
//!
//! - [`model`] — Block / BlockedSlot / WorkingHours wire shapes
//! - [`calendar`] — date-level availability rules
//! - [`slots`] — hourly slot generation and the shared blocking predicate
//! - [`blocks`] — admin query-window and active-block helpers
//! - [`error`] — error types

pub mod blocks;
pub mod calendar;
pub mod error;
pub mod model;
pub mod slots;

pub use calendar::{is_date_disabled, DateRules, DEFAULT_CLOSING_HOUR, DEFAULT_TIMEZONE};
pub use error::SlotError;
pub use model::{Block, BlockedSlot, WorkingHours};
pub use slots::{generate_available_times, is_slot_blocked, working_hour_slots};
