//! Cafe model definition.

use serde::{Deserialize, Serialize};

/// Immutable reference to a cafe from the catalog.
///
/// The core never mutates cafes; records hold their own copy so a booking
/// stays intact even if the catalog changes between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cafe {
    /// Unique identifier within the catalog
    pub id: String,

    /// Display name of the cafe
    pub name: String,

    /// Reference to the cafe's image asset
    pub image: String,

    /// Short marketing line shown on the cafe card
    pub tagline: String,

    /// Human-readable location string
    pub location: String,

    /// Average rating out of 5
    pub rating: f32,

    /// Opening hours as displayed on the card, e.g. "7:00 AM - 10:00 PM"
    pub open_hours: String,
}
