//! Booking and redemption identifier generation.
//!
//! Identifiers are human-legible and unique with overwhelming probability
//! within a session: a domain prefix, the current Unix time in
//! milliseconds, and a nine-character random base-36 suffix. Generation
//! cannot fail; uniqueness is probabilistic and session-scoped cardinality
//! is low, so collisions are an accepted non-goal.

use jiff::Timestamp;
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Which domain an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Table bookings ("BK-")
    Booking,
    /// Redemption codes ("RD-")
    Redemption,
}

impl IdKind {
    /// The domain prefix carried by generated identifiers.
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Booking => "BK-",
            IdKind::Redemption => "RD-",
        }
    }
}

/// Generate a fresh identifier for the given domain.
pub fn generate(kind: IdKind) -> String {
    generate_at(kind, Timestamp::now().as_millisecond(), &mut rand::thread_rng())
}

/// Deterministic core of [`generate`]: caller supplies clock and rng.
fn generate_at(kind: IdKind, millis: i64, rng: &mut impl Rng) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}{}-{}", kind.prefix(), millis, suffix)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_generate_has_prefix_and_shape() {
        let id = generate(IdKind::Booking);
        assert!(!id.is_empty());
        assert!(id.starts_with("BK-"));

        let id = generate(IdKind::Redemption);
        assert!(id.starts_with("RD-"));

        // prefix, millis, suffix
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_same_millisecond_different_draws_differ() {
        let millis = 1_775_000_000_123;
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let a = generate_at(IdKind::Booking, millis, &mut rng_a);
        let b = generate_at(IdKind::Booking, millis, &mut rng_b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_distinct_over_many_draws() {
        let millis = 1_775_000_000_123;
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(generate_at(IdKind::Redemption, millis, &mut rng));
        }
        assert_eq!(seen.len(), 1000);
    }
}
