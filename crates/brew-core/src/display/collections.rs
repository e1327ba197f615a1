//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections their own Display implementations
//! with consistent structure and empty-collection handling.

use std::{fmt, ops::Index};

use crate::models::{Cafe, Record};
use crate::store::Partition;

/// Newtype wrapper for displaying the cafe catalog.
///
/// Formats each cafe card in order; empty catalogs are handled
/// gracefully.
pub struct CafeList(pub Vec<Cafe>);

impl CafeList {
    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cafes in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the cafes.
    pub fn iter(&self) -> std::slice::Iter<'_, Cafe> {
        self.0.iter()
    }
}

impl Index<usize> for CafeList {
    type Output = Cafe;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for CafeList {
    type Item = Cafe;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CafeList {
    type Item = &'a Cafe;
    type IntoIter = std::slice::Iter<'a, Cafe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CafeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No cafes in the catalog.")
        } else {
            for cafe in &self.0 {
                write!(f, "{cafe}")?;
            }
            Ok(())
        }
    }
}

/// The partitioned booking history, formatted for the MyBookings view.
pub struct BookingHistory {
    pub upcoming: Vec<Record>,
    pub past: Vec<Record>,
}

impl From<Partition> for BookingHistory {
    fn from(partition: Partition) -> Self {
        Self {
            upcoming: partition.upcoming,
            past: partition.past,
        }
    }
}

impl fmt::Display for BookingHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# My Bookings")?;
        writeln!(f)?;

        if self.upcoming.is_empty() && self.past.is_empty() {
            writeln!(f, "No bookings yet.")?;
            writeln!(f)?;
            writeln!(f, "Start exploring cafes and make your first reservation!")?;
            return Ok(());
        }

        if !self.upcoming.is_empty() {
            writeln!(f, "## Upcoming Bookings")?;
            writeln!(f)?;
            for record in &self.upcoming {
                write!(f, "{record}")?;
            }
        }

        if !self.past.is_empty() {
            writeln!(f, "## Past Bookings")?;
            writeln!(f)?;
            for record in &self.past {
                write!(f, "{record}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_cafe_list_display() {
        let list = CafeList(catalog::default_catalog());
        let output = format!("{list}");
        assert!(output.contains("## Nordic Brew (ID: 2)"));
        assert!(output.contains("- **Location**: Midtown Plaza"));
        assert!(output.contains("- **Rating**: 4.9"));
    }

    #[test]
    fn test_cafe_list_empty() {
        let list = CafeList(vec![]);
        assert!(list.is_empty());
        assert!(format!("{list}").contains("No cafes in the catalog."));
    }

    #[test]
    fn test_history_empty_state() {
        let history = BookingHistory {
            upcoming: vec![],
            past: vec![],
        };
        let output = format!("{history}");
        assert!(output.contains("No bookings yet."));
        assert!(output.contains("Start exploring cafes"));
        assert!(!output.contains("## Upcoming Bookings"));
    }
}
