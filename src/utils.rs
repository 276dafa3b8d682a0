use anyhow::Context;
use blake2::{Blake2b, Digest};
use chrono::{NaiveDate, NaiveTime};

use crate::error::ApiError;

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Blake2b::digest(password.as_bytes()))
}

/// Parses an `HH:MM` time-of-day string. Comparing parsed values is what
/// keeps the overlap check correct for inputs like "9:00" vs "10:30", where
/// a plain string comparison would get the order wrong.
pub fn parse_hm_time(s: &str) -> Result<NaiveTime, ApiError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| ApiError::bad_request(format!("invalid time \"{}\", expected HH:MM", s)))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request(format!("invalid date \"{}\", expected YYYY-MM-DD", s)))
}

pub fn format_hm_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(time: &chrono::NaiveDateTime) -> String {
    format!("{}+00:00", time.format("%Y-%m-%dT%H:%M:%S%.f"))
}

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

pub fn get_str_pattern_opt<S: AsRef<str>>(s: Option<S>) -> String {
    match s {
        Some(s) => get_str_pattern(s),
        None => "%".to_string(),
    }
}

pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string())
}

pub fn jwt_secret() -> anyhow::Result<String> {
    std::env::var("JWT_SECRET").context("JWT_SECRET not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_input_sensitive() {
        assert_eq!(hash_password("12345"), hash_password("12345"));
        assert_ne!(hash_password("12345"), hash_password("12346"));
        // hex-encoded Blake2b-512
        assert_eq!(hash_password("12345").len(), 128);
    }

    #[test]
    fn parses_padded_and_unpadded_times() {
        assert_eq!(
            parse_hm_time("09:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_hm_time("9:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert!(parse_hm_time("9:00").unwrap() < parse_hm_time("10:30").unwrap());
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(parse_hm_time("25:00").is_err());
        assert!(parse_hm_time("09:60").is_err());
        assert!(parse_hm_time("nine").is_err());
        assert!(parse_hm_time("").is_err());
    }

    #[test]
    fn date_round_trip() {
        let date = parse_date("2024-05-01").unwrap();
        assert_eq!(format_date(&date), "2024-05-01");
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn time_formatting_pads() {
        let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_hm_time(&t), "09:05");
    }

    #[test]
    fn str_patterns() {
        assert_eq!(get_str_pattern("math"), "%math%");
        assert_eq!(get_str_pattern_opt::<&str>(None), "%");
        assert_eq!(get_str_pattern_opt(Some("L3")), "%L3%");
    }
}
