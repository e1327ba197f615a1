//! Persisted booking and redemption records.

use jiff::civil::{Date, Time};
use jiff::{Timestamp, ToSpan, Zoned};
use serde::{Deserialize, Serialize};

use super::{BookingClass, Cafe, RedemptionState, ValidatedBooking};
use crate::error::Result;
use crate::expiry;

/// The persisted result of a completed booking flow.
///
/// Immutable once constructed: records are appended to the session store
/// and never updated or deleted for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    /// Unique identifier ("BK-" prefixed)
    pub id: String,

    /// Copy of the cafe the table was booked at
    pub cafe: Cafe,

    /// Guest name at submission time
    pub full_name: String,

    /// Contact phone at submission time
    pub phone: String,

    /// Contact email at submission time
    pub email: String,

    /// Reservation date
    pub date: Date,

    /// Reservation time
    pub time: Time,

    /// Party size (1-8)
    pub guests: u8,

    /// Timestamp when the booking was created (UTC)
    pub created_at: Timestamp,

    /// PNG data URL encoding the booking payload as a QR symbol.
    ///
    /// Empty when encoding failed; the booking itself is still valid and
    /// the id serves as the fallback proof.
    pub qr_code: String,
}

impl BookingRecord {
    /// Construct a record from a validated form snapshot and an encoded
    /// artifact (possibly the empty sentinel).
    pub fn from_submission(
        id: String,
        cafe: Cafe,
        booking: ValidatedBooking,
        created_at: Timestamp,
        qr_code: String,
    ) -> Self {
        Self {
            id,
            cafe,
            full_name: booking.full_name,
            phone: booking.phone,
            email: booking.email,
            date: booking.date,
            time: booking.time,
            guests: booking.guests,
            created_at,
            qr_code,
        }
    }

    /// Whether the visual artifact is attached.
    pub fn has_artifact(&self) -> bool {
        !self.qr_code.is_empty()
    }
}

/// The persisted result of a completed redemption flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedemptionRecord {
    /// Unique identifier ("RD-" prefixed)
    pub id: String,

    /// Copy of the cafe the code was issued for
    pub cafe: Cafe,

    /// Six-digit decimal one-time code
    pub code: String,

    /// Timestamp when the code was issued (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the code lapses, exactly ten minutes after issue
    pub expires_at: Timestamp,
}

impl RedemptionRecord {
    /// Issue a redemption record, computing the expiry window.
    ///
    /// # Errors
    ///
    /// Only if adding the ten-minute window to `created_at` overflows the
    /// representable timestamp range.
    pub fn issue(id: String, cafe: Cafe, code: String, created_at: Timestamp) -> Result<Self> {
        let expires_at = created_at.checked_add(expiry::REDEMPTION_TTL_MINUTES.minutes())?;
        Ok(Self {
            id,
            cafe,
            code,
            created_at,
            expires_at,
        })
    }

    /// Classify the code against the given instant.
    pub fn state(&self, now: Timestamp) -> RedemptionState {
        expiry::redemption_state(self.expires_at, now)
    }
}

/// A completed record of either kind, the element type of the session
/// store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Booking(BookingRecord),
    Redemption(RedemptionRecord),
}

impl Record {
    /// The record's unique identifier.
    pub fn id(&self) -> &str {
        match self {
            Record::Booking(b) => &b.id,
            Record::Redemption(r) => &r.id,
        }
    }

    /// The cafe the record belongs to.
    pub fn cafe(&self) -> &Cafe {
        match self {
            Record::Booking(b) => &b.cafe,
            Record::Redemption(r) => &r.cafe,
        }
    }

    /// Whether the record belongs to the current-facing partition at the
    /// given instant: upcoming for bookings, active for redemptions.
    pub fn is_current(&self, now: &Zoned) -> bool {
        match self {
            Record::Booking(b) => {
                expiry::booking_class(b.date, now.date()) == BookingClass::Upcoming
            }
            Record::Redemption(r) => r.state(now.timestamp()) == RedemptionState::Active,
        }
    }
}
