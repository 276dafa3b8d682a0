use crate::schema::bookings;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Queryable, Identifiable)]
#[table_name = "bookings"]
pub struct Booking {
    pub id: u64,
    pub hall_id: u64,
    pub user_id: u64,
    pub subject: String,
    pub department: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "bookings"]
pub struct NewBooking {
    pub hall_id: u64,
    pub user_id: u64,
    pub subject: String,
    pub department: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_APPROVED: &str = "approved";
pub const BOOKING_STATUS_REJECTED: &str = "rejected";

/// Half-open interval overlap: [a_start, a_end) intersects [b_start, b_end).
/// Back-to-back slots (one ending exactly when the other starts) do not
/// overlap. The approved-booking conflict query in the bookings module
/// mirrors this predicate in SQL.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn partial_overlap_conflicts() {
        // existing 09:00-10:00, candidate 09:30-10:30
        assert!(overlaps(hm(9, 0), hm(10, 0), hm(9, 30), hm(10, 30)));
        assert!(overlaps(hm(9, 30), hm(10, 30), hm(9, 0), hm(10, 0)));
    }

    #[test]
    fn containment_conflicts() {
        assert!(overlaps(hm(9, 0), hm(12, 0), hm(10, 0), hm(11, 0)));
        assert!(overlaps(hm(10, 0), hm(11, 0), hm(9, 0), hm(12, 0)));
        assert!(overlaps(hm(9, 0), hm(10, 0), hm(9, 0), hm(10, 0)));
    }

    #[test]
    fn back_to_back_does_not_conflict() {
        // half-open intervals: 09:00-10:00 then 10:00-11:00 is fine
        assert!(!overlaps(hm(9, 0), hm(10, 0), hm(10, 0), hm(11, 0)));
        assert!(!overlaps(hm(10, 0), hm(11, 0), hm(9, 0), hm(10, 0)));
    }

    #[test]
    fn disjoint_does_not_conflict() {
        assert!(!overlaps(hm(9, 0), hm(10, 0), hm(13, 0), hm(14, 0)));
    }
}
