//! Partition status enumerations for bookings and redemptions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe classification of a booking relative to the current date.
///
/// The class is never stored; it is derived at query time by comparing the
/// reservation date against "today" (see [`crate::expiry::booking_class`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingClass {
    /// Reservation date is today or later
    Upcoming,

    /// Reservation date has already passed
    Past,
}

impl FromStr for BookingClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(BookingClass::Upcoming),
            "past" => Ok(BookingClass::Past),
            _ => Err(format!("Invalid booking class: {s}")),
        }
    }
}

impl BookingClass {
    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingClass::Upcoming => "upcoming",
            BookingClass::Past => "past",
        }
    }
}

/// Type-safe classification of a redemption code relative to its expiry.
///
/// Like [`BookingClass`], this is a pure derived value: no transition event
/// fires when a code expires, the predicate is simply re-evaluated on read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RedemptionState {
    /// Current time is before the expiry timestamp
    Active,

    /// Current time is at or past the expiry timestamp
    Expired,
}

impl FromStr for RedemptionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RedemptionState::Active),
            "expired" => Ok(RedemptionState::Expired),
            _ => Err(format!("Invalid redemption state: {s}")),
        }
    }
}

impl RedemptionState {
    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RedemptionState::Active => "active",
            RedemptionState::Expired => "expired",
        }
    }

    /// Get state with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `● Active` - Filled circle for codes still inside their window
    /// - `○ Expired` - Hollow circle for lapsed codes
    pub fn with_icon(&self) -> &'static str {
        match self {
            RedemptionState::Active => "● Active",
            RedemptionState::Expired => "○ Expired",
        }
    }
}
