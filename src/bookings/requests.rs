use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub hall_id: u64,
    pub subject: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub level: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct PublicBookingsQuery {
    pub department: Option<String>,
    pub level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_uses_camel_case_wire_names() {
        let info: BookingRequest = serde_json::from_str(
            r#"{
                "hallId": 3,
                "subject": "Operating Systems",
                "department": "CS",
                "level": "L3",
                "date": "2024-05-01",
                "startTime": "09:00",
                "endTime": "10:00"
            }"#,
        )
        .unwrap();
        assert_eq!(info.hall_id, 3);
        assert_eq!(info.start_time, "09:00");
        assert_eq!(info.end_time, "10:00");
    }

    #[test]
    fn department_and_level_default_to_empty() {
        let info: BookingRequest = serde_json::from_str(
            r#"{
                "hallId": 1,
                "subject": "Anatomy",
                "date": "2024-05-01",
                "startTime": "09:00",
                "endTime": "10:00"
            }"#,
        )
        .unwrap();
        assert_eq!(info.department, "");
        assert_eq!(info.level, "");
    }
}
