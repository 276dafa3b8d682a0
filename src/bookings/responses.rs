use serde::Serialize;

use crate::{
    models::bookings::Booking,
    utils::{format_date, format_datetime, format_hm_time},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    pub id: u64,
    pub hall_id: u64,
    pub hall_name: String,
    pub username: String,
    pub subject: String,
    pub department: String,
    pub level: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub created_at: String,
}

impl BookingItem {
    pub fn new(booking: Booking, hall_name: String, username: String) -> Self {
        Self {
            id: booking.id,
            hall_id: booking.hall_id,
            hall_name,
            username,
            subject: booking.subject,
            department: booking.department,
            level: booking.level,
            date: format_date(&booking.date),
            start_time: format_hm_time(&booking.start_time),
            end_time: format_hm_time(&booking.end_time),
            status: booking.status,
            created_at: format_datetime(&booking.created_at),
        }
    }
}

/// Public calendar shape, without the requesting user.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBookingItem {
    pub hall_name: String,
    pub subject: String,
    pub department: String,
    pub level: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

impl PublicBookingItem {
    pub fn new(booking: Booking, hall_name: String) -> Self {
        Self {
            hall_name,
            subject: booking.subject,
            department: booking.department,
            level: booking.level,
            date: format_date(&booking.date),
            start_time: format_hm_time(&booking.start_time),
            end_time: format_hm_time(&booking.end_time),
            status: booking.status,
        }
    }
}
