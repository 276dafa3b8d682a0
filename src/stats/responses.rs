use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummaryResponse {
    pub halls: i64,
    pub available_halls: i64,
    pub users: i64,
    pub bookings: i64,
    pub pending_bookings: i64,
    pub approved_bookings: i64,
    pub rejected_bookings: i64,
}
