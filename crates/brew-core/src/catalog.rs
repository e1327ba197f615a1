//! The built-in cafe catalog.
//!
//! The catalog is owned outside the booking core: flows and records only
//! ever read [`Cafe`] values copied out of it. This module ships the
//! default six-cafe set and the lookup used by cafe-selection events.

use crate::error::{BookingError, Result};
use crate::models::Cafe;

/// The default catalog shipped with the application.
pub fn default_catalog() -> Vec<Cafe> {
    vec![
        Cafe {
            id: "1".to_string(),
            name: "Warmth & Wonder".to_string(),
            image: "assets/cafe-1.jpg".to_string(),
            tagline: "Cozy corner for coffee & conversation".to_string(),
            location: "Downtown Arts District".to_string(),
            rating: 4.8,
            open_hours: "7:00 AM - 10:00 PM".to_string(),
        },
        Cafe {
            id: "2".to_string(),
            name: "Nordic Brew".to_string(),
            image: "assets/cafe-2.jpg".to_string(),
            tagline: "Scandinavian simplicity meets perfect coffee".to_string(),
            location: "Midtown Plaza".to_string(),
            rating: 4.9,
            open_hours: "6:30 AM - 9:00 PM".to_string(),
        },
        Cafe {
            id: "3".to_string(),
            name: "The Industrial".to_string(),
            image: "assets/cafe-3.jpg".to_string(),
            tagline: "Vintage vibes & artisan coffee".to_string(),
            location: "Historic Quarter".to_string(),
            rating: 4.7,
            open_hours: "8:00 AM - 11:00 PM".to_string(),
        },
        Cafe {
            id: "4".to_string(),
            name: "Garden Retreat".to_string(),
            image: "assets/cafe-4.jpg".to_string(),
            tagline: "Coffee among the flowers".to_string(),
            location: "Botanical District".to_string(),
            rating: 4.6,
            open_hours: "9:00 AM - 8:00 PM".to_string(),
        },
        Cafe {
            id: "5".to_string(),
            name: "Skyline Roasters".to_string(),
            image: "assets/cafe-5.jpg".to_string(),
            tagline: "City views with every sip".to_string(),
            location: "Financial District".to_string(),
            rating: 4.8,
            open_hours: "6:00 AM - 10:00 PM".to_string(),
        },
        Cafe {
            id: "6".to_string(),
            name: "Artisan's Corner".to_string(),
            image: "assets/cafe-6.jpg".to_string(),
            tagline: "Where coffee meets craftsmanship".to_string(),
            location: "Creative Quarter".to_string(),
            rating: 4.9,
            open_hours: "7:30 AM - 9:30 PM".to_string(),
        },
    ]
}

/// Look up a cafe by id or case-insensitive name.
///
/// # Errors
///
/// Returns `BookingError::CafeNotFound` when no catalog entry matches.
pub fn find<'a>(catalog: &'a [Cafe], key: &str) -> Result<&'a Cafe> {
    catalog
        .iter()
        .find(|c| c.id == key || c.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| BookingError::CafeNotFound {
            name: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|c| !c.id.is_empty() && !c.name.is_empty()));
    }

    #[test]
    fn test_find_by_id_and_name() {
        let catalog = default_catalog();

        assert_eq!(find(&catalog, "2").expect("by id").name, "Nordic Brew");
        assert_eq!(find(&catalog, "Nordic Brew").expect("by name").id, "2");
        assert_eq!(find(&catalog, "nordic brew").expect("case-insensitive").id, "2");
    }

    #[test]
    fn test_find_unknown_cafe() {
        let catalog = default_catalog();
        match find(&catalog, "Moonlight Beans") {
            Err(BookingError::CafeNotFound { name }) => assert_eq!(name, "Moonlight Beans"),
            other => panic!("Expected CafeNotFound, got {other:?}"),
        }
    }
}
