pub mod bookings;
pub mod halls;
pub mod users;
