//! Transient booking form state and its validation.

use jiff::civil::{self, Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// First bookable slot of the day.
pub const FIRST_SLOT: Time = civil::time(8, 0, 0, 0);

/// Last bookable slot of the day.
pub const LAST_SLOT: Time = civil::time(21, 30, 0, 0);

/// Maximum party size accepted by the form.
pub const MAX_GUESTS: u8 = 8;

/// Fields of the booking form, for one-field-at-a-time updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentField {
    FullName,
    Phone,
    Email,
    Date,
    Time,
    Guests,
}

/// Mutable, user-entered form state for one booking attempt.
///
/// All fields are kept as raw strings while the form is open; typing and
/// range checks happen once, at submission, producing a
/// [`ValidatedBooking`]. The intent is created empty when a booking flow
/// opens and discarded when the flow closes or completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingIntent {
    /// Full name of the guest making the reservation
    pub full_name: String,

    /// Contact phone number
    pub phone: String,

    /// Contact email address
    pub email: String,

    /// Reservation date as entered (expected YYYY-MM-DD)
    pub date: String,

    /// Reservation time as entered (expected HH:MM on a half-hour slot)
    pub time: String,

    /// Guest count as entered
    pub guests: String,
}

impl Default for BookingIntent {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            date: String::new(),
            time: String::new(),
            // The form opens with a party of two preselected
            guests: "2".to_string(),
        }
    }
}

impl BookingIntent {
    /// Apply a single field update from the form.
    pub fn set(&mut self, field: IntentField, value: &str) {
        let slot = match field {
            IntentField::FullName => &mut self.full_name,
            IntentField::Phone => &mut self.phone,
            IntentField::Email => &mut self.email,
            IntentField::Date => &mut self.date,
            IntentField::Time => &mut self.time,
            IntentField::Guests => &mut self.guests,
        };
        *slot = value.to_string();
    }

    /// Validate the form against the submission guard.
    ///
    /// `today` is the current calendar date in the caller's timezone;
    /// reservation dates before it are rejected.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` naming the first offending
    /// field. Submission is simply not accepted in that case; nothing in
    /// the session changes.
    pub fn validate(&self, today: Date) -> Result<ValidatedBooking> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(BookingError::invalid_input("full_name").with_reason("full name is required"));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(BookingError::invalid_input("phone").with_reason("phone number is required"));
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(BookingError::invalid_input("email")
                .with_reason("a valid email address is required"));
        }

        let date: Date = self.date.trim().parse().map_err(|_| {
            BookingError::invalid_input("date")
                .with_reason(format!("'{}' is not a calendar date (expected YYYY-MM-DD)", self.date))
        })?;
        if date < today {
            return Err(BookingError::invalid_input("date")
                .with_reason("reservation date has already passed"));
        }

        let time: Time = self.time.trim().parse().map_err(|_| {
            BookingError::invalid_input("time")
                .with_reason(format!("'{}' is not a time of day (expected HH:MM)", self.time))
        })?;
        if time.minute() % 30 != 0 || time.second() != 0 || time < FIRST_SLOT || time > LAST_SLOT {
            return Err(BookingError::invalid_input("time")
                .with_reason("time must fall on a half-hour slot between 8:00 AM and 9:30 PM"));
        }

        let guests: u8 = self.guests.trim().parse().map_err(|_| {
            BookingError::invalid_input("guests")
                .with_reason(format!("'{}' is not a guest count", self.guests))
        })?;
        if !(1..=MAX_GUESTS).contains(&guests) {
            return Err(BookingError::invalid_input("guests")
                .with_reason(format!("guest count must be between 1 and {MAX_GUESTS}")));
        }

        Ok(ValidatedBooking {
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            date,
            time,
            guests,
        })
    }
}

/// Typed snapshot of a [`BookingIntent`] taken at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub date: Date,
    pub time: Time,
    pub guests: u8,
}
