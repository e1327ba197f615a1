//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live
//! here, separated from the model definitions to keep data structures and
//! presentation logic apart. Output is markdown for rich terminal
//! rendering.

use std::fmt;

use super::datetime::{ClockTime, LocalDateTime, LongDate};
use crate::models::{BookingRecord, Cafe, Record, RedemptionRecord};

impl fmt::Display for Cafe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "{}", self.tagline)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}", self.location)?;
        writeln!(f, "- **Rating**: {:.1}", self.rating)?;
        writeln!(f, "- **Open**: {}", self.open_hours)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.cafe.name)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.cafe.location)?;
        writeln!(f, "- Date: {}", LongDate(self.date))?;
        writeln!(f, "- Time: {}", ClockTime(self.time))?;
        writeln!(
            f,
            "- Guests: {} {}",
            self.guests,
            if self.guests == 1 { "person" } else { "people" }
        )?;
        writeln!(f, "- Booked: {}", LocalDateTime(&self.created_at))?;
        if !self.has_artifact() {
            writeln!(f, "- QR image unavailable")?;
        }
        writeln!(f, "- Booking ID: {}", self.id)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for RedemptionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.cafe.name)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.cafe.location)?;
        writeln!(f, "- Code: {}", self.code)?;
        writeln!(f, "- Issued: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Expires: {}", LocalDateTime(&self.expires_at))?;
        writeln!(f, "- Redemption ID: {}", self.id)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Booking(b) => write!(f, "{b}"),
            Record::Redemption(r) => write!(f, "{r}"),
        }
    }
}
