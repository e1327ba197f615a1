//! The append-only session store for completed records.

use jiff::Zoned;

use crate::models::Record;

/// Ordered, append-only collection of the session's completed bookings and
/// redemptions.
///
/// The store never rejects, merges or dedupes appends, and offers no
/// update or delete operation: records are immutable facts for the
/// session's lifetime. Partitioning into current/past views is a derived
/// projection that leaves the underlying sequence untouched.
#[derive(Debug, Default)]
pub struct BookingStore {
    records: Vec<Record>,
}

impl BookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the session has no completed records yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split the sequence into the two display partitions at the given
    /// instant.
    ///
    /// Bookings land in `upcoming` while their reservation date has not
    /// passed; redemptions land there while their code is still active.
    /// Relative order is preserved within each half, and every record
    /// appears in exactly one of them.
    pub fn partition(&self, now: &Zoned) -> Partition {
        let mut partition = Partition::default();
        for record in &self.records {
            if record.is_current(now) {
                partition.upcoming.push(record.clone());
            } else {
                partition.past.push(record.clone());
            }
        }
        partition
    }
}

/// The two disjoint, order-preserving halves of the store at one instant.
///
/// For bookings the halves read as upcoming/past; for redemptions as
/// active/expired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub upcoming: Vec<Record>,
    pub past: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use jiff::Timestamp;

    use super::*;
    use crate::models::{BookingRecord, Cafe, RedemptionRecord};

    fn test_cafe() -> Cafe {
        Cafe {
            id: "9".to_string(),
            name: "Test Roast".to_string(),
            image: "assets/test.jpg".to_string(),
            tagline: "For tests only".to_string(),
            location: "Test Street".to_string(),
            rating: 4.0,
            open_hours: "8:00 AM - 8:00 PM".to_string(),
        }
    }

    fn booking_on(day: jiff::civil::Date, id: &str) -> Record {
        Record::Booking(BookingRecord {
            id: id.to_string(),
            cafe: test_cafe(),
            full_name: "Guest".to_string(),
            phone: "555-0100".to_string(),
            email: "guest@example.com".to_string(),
            date: day,
            time: jiff::civil::time(18, 0, 0, 0),
            guests: 2,
            created_at: Timestamp::from_second(1_775_000_000).expect("valid"),
            qr_code: String::new(),
        })
    }

    fn query_instant() -> Zoned {
        date(2026, 8, 6)
            .at(12, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid instant")
    }

    #[test]
    fn test_append_only_prefix_stable() {
        let mut store = BookingStore::new();
        for i in 0..5 {
            store.append(booking_on(date(2026, 8, 10), &format!("BK-{i}")));
            assert_eq!(store.len(), i + 1);
        }

        let before: Vec<String> = store.all()[..3].iter().map(|r| r.id().to_string()).collect();
        store.append(booking_on(date(2026, 8, 10), "BK-5"));
        let after: Vec<String> = store.all()[..3].iter().map(|r| r.id().to_string()).collect();
        assert_eq!(before, after);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_append_never_dedupes() {
        let mut store = BookingStore::new();
        store.append(booking_on(date(2026, 8, 10), "BK-same"));
        store.append(booking_on(date(2026, 8, 10), "BK-same"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_partition_total_disjoint_cover() {
        let mut store = BookingStore::new();
        store.append(booking_on(date(2026, 8, 10), "BK-a"));
        store.append(booking_on(date(2026, 8, 1), "BK-b"));
        store.append(booking_on(date(2026, 8, 6), "BK-c"));
        store.append(booking_on(date(2026, 7, 1), "BK-d"));

        let now = query_instant();
        let partition = store.partition(&now);

        assert_eq!(partition.upcoming.len() + partition.past.len(), store.len());
        let upcoming_ids: Vec<&str> = partition.upcoming.iter().map(Record::id).collect();
        let past_ids: Vec<&str> = partition.past.iter().map(Record::id).collect();
        assert_eq!(upcoming_ids, vec!["BK-a", "BK-c"]);
        assert_eq!(past_ids, vec!["BK-b", "BK-d"]);
        assert!(upcoming_ids.iter().all(|id| !past_ids.contains(id)));
    }

    #[test]
    fn test_partition_idempotent() {
        let mut store = BookingStore::new();
        store.append(booking_on(date(2026, 8, 10), "BK-a"));
        store.append(booking_on(date(2026, 8, 1), "BK-b"));

        let now = query_instant();
        assert_eq!(store.partition(&now), store.partition(&now));
    }

    #[test]
    fn test_partition_mixed_record_kinds() {
        let issued = query_instant().timestamp();
        let redemption = RedemptionRecord::issue(
            "RD-x".to_string(),
            test_cafe(),
            "123456".to_string(),
            issued,
        )
        .expect("expiry in range");

        let mut store = BookingStore::new();
        store.append(booking_on(date(2026, 8, 1), "BK-old"));
        store.append(Record::Redemption(redemption));

        // One minute after issue the code is active, the booking past
        let now = date(2026, 8, 6)
            .at(12, 1, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid instant");
        let partition = store.partition(&now);
        assert_eq!(partition.upcoming.len(), 1);
        assert_eq!(partition.upcoming[0].id(), "RD-x");
        assert_eq!(partition.past.len(), 1);
        assert_eq!(partition.past[0].id(), "BK-old");

        // Eleven minutes after issue both are in the past half
        let later = date(2026, 8, 6)
            .at(12, 11, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid instant");
        let partition = store.partition(&later);
        assert!(partition.upcoming.is_empty());
        assert_eq!(partition.past.len(), 2);
    }
}
