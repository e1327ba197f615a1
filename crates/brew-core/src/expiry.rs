//! Time-window policies for classifying records.
//!
//! Two independent policies coexist:
//!
//! - **Date-based** (bookings): a reservation is upcoming while its
//!   calendar date has not passed. The comparison is date-only; the
//!   time-of-day on the reservation date is ignored, so a booking for
//!   today stays upcoming until local midnight.
//! - **Timestamp-based** (redemptions): a code is active strictly before
//!   its expiry instant, ten minutes after issue.
//!
//! Both are pure predicates over an externally supplied "now". Nothing in
//! this module reads the clock, which keeps classification deterministic
//! and trivially testable; callers sample the clock once per query.

use jiff::civil::Date;
use jiff::Timestamp;

use crate::models::{BookingClass, RedemptionState};

/// Redemption codes lapse this many minutes after issue.
pub const REDEMPTION_TTL_MINUTES: i64 = 10;

/// Classify a booking by comparing its reservation date against today.
///
/// `today` must be the current calendar date in the timezone that is
/// authoritative for the session (the system timezone in this
/// application). A reservation on today's date counts as upcoming.
pub fn booking_class(reservation_date: Date, today: Date) -> BookingClass {
    if reservation_date >= today {
        BookingClass::Upcoming
    } else {
        BookingClass::Past
    }
}

/// Classify a redemption code against the given instant.
///
/// Active strictly before `expires_at`; the boundary instant itself is
/// already expired.
pub fn redemption_state(expires_at: Timestamp, now: Timestamp) -> RedemptionState {
    if now < expires_at {
        RedemptionState::Active
    } else {
        RedemptionState::Expired
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::ToSpan;

    use super::*;

    #[test]
    fn test_booking_class_by_date() {
        let today = date(2026, 8, 6);

        assert_eq!(booking_class(date(2026, 8, 7), today), BookingClass::Upcoming);
        assert_eq!(booking_class(today, today), BookingClass::Upcoming);
        assert_eq!(booking_class(date(2026, 8, 5), today), BookingClass::Past);
        assert_eq!(booking_class(date(2025, 12, 31), today), BookingClass::Past);
    }

    #[test]
    fn test_redemption_state_window() {
        let issued = Timestamp::from_second(1_775_000_000).expect("valid timestamp");
        let expires = issued
            .checked_add(REDEMPTION_TTL_MINUTES.minutes())
            .expect("expiry within range");

        let just_inside = issued.checked_add(9.minutes()).expect("valid");
        let just_outside = issued.checked_add(11.minutes()).expect("valid");

        assert_eq!(redemption_state(expires, just_inside), RedemptionState::Active);
        assert_eq!(redemption_state(expires, just_outside), RedemptionState::Expired);
        // The boundary itself is expired
        assert_eq!(redemption_state(expires, expires), RedemptionState::Expired);
    }
}
