//! Result wrapper types for displaying completed flows.
//!
//! These wrappers format the confirmation screens shown at the terminal
//! state of each flow: the QR confirmation after a booking and the code
//! display after a redemption.

use std::fmt;

use super::datetime::{ClockTime, LocalDateTime, LongDate};
use crate::models::{BookingRecord, RedemptionRecord};

/// Confirmation screen for a completed booking.
///
/// When the artifact is missing (encoding failed), the view falls back to
/// presenting the booking id as the proof.
pub struct ConfirmationView {
    pub record: BookingRecord,
}

impl ConfirmationView {
    /// Wrap a completed booking record for display.
    pub fn new(record: BookingRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for ConfirmationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your booking is confirmed!")?;
        writeln!(f)?;
        writeln!(
            f,
            "Show this QR code at {} on {} at {}.",
            self.record.cafe.name,
            LongDate(self.record.date),
            ClockTime(self.record.time)
        )?;
        writeln!(f)?;
        writeln!(f, "- Booking ID: {}", self.record.id)?;
        if self.record.has_artifact() {
            writeln!(
                f,
                "- QR image: {} ({} chars)",
                preview(&self.record.qr_code),
                self.record.qr_code.len()
            )?;
        } else {
            writeln!(
                f,
                "- QR image unavailable. Present your booking ID at the counter instead."
            )?;
        }

        Ok(())
    }
}

/// Code display for a completed redemption.
pub struct RedemptionView {
    pub record: RedemptionRecord,
}

impl RedemptionView {
    /// Wrap an issued redemption record for display.
    pub fn new(record: RedemptionRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for RedemptionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your code is ready!")?;
        writeln!(f)?;
        writeln!(
            f,
            "Show code {} at {} before it expires.",
            self.record.code, self.record.cafe.name
        )?;
        writeln!(f)?;
        writeln!(f, "- Redemption ID: {}", self.record.id)?;
        writeln!(f, "- Issued: {}", LocalDateTime(&self.record.created_at))?;
        writeln!(f, "- Expires: {}", LocalDateTime(&self.record.expires_at))?;

        Ok(())
    }
}

/// Shorten a data URL for terminal output.
fn preview(data_url: &str) -> &str {
    let end = data_url
        .char_indices()
        .nth(48)
        .map(|(i, _)| i)
        .unwrap_or(data_url.len());
    &data_url[..end]
}
