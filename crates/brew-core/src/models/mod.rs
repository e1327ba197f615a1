//! Data models for cafes, bookings and redemptions.
//!
//! This module contains the core domain models of the reservation system.
//! Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! # Model Overview
//!
//! - [`Cafe`]: immutable catalog entry, copied into records at completion
//! - [`BookingIntent`]: transient form state, validated into a
//!   [`ValidatedBooking`] snapshot at submission
//! - [`BookingRecord`] / [`RedemptionRecord`]: immutable proof-of-booking
//!   artifacts, wrapped in [`Record`] for storage
//! - [`BookingClass`] / [`RedemptionState`]: derived partition classes,
//!   never persisted, recomputed against "now" on every query

pub mod cafe;
pub mod intent;
pub mod record;
pub mod status;


// Re-export all public types at the models level
pub use cafe::Cafe;
pub use intent::{BookingIntent, IntentField, ValidatedBooking, FIRST_SLOT, LAST_SLOT, MAX_GUESTS};
pub use record::{BookingRecord, Record, RedemptionRecord};
pub use status::{BookingClass, RedemptionState};
