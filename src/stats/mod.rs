mod responses;

use actix_web::{get, web, HttpResponse};
use diesel::prelude::*;

use crate::{
    auth::token::AdminUser,
    database::get_db_conn,
    error::ApiError,
    models::bookings::{BOOKING_STATUS_APPROVED, BOOKING_STATUS_PENDING, BOOKING_STATUS_REJECTED},
    DbPool,
};

use self::responses::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(summary);
}

#[get("/summary")]
async fn summary(_admin: AdminUser, pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls, users};

    let conn = get_db_conn(&pool)?;
    let summary = web::block(move || -> Result<StatsSummaryResponse, ApiError> {
        let halls_total: i64 = halls::table.count().get_result(&conn)?;
        let halls_available: i64 = halls::table
            .filter(halls::available.eq(true))
            .count()
            .get_result(&conn)?;
        let users_total: i64 = users::table.count().get_result(&conn)?;
        let bookings_total: i64 = bookings::table.count().get_result(&conn)?;
        let pending: i64 = bookings::table
            .filter(bookings::status.eq(BOOKING_STATUS_PENDING))
            .count()
            .get_result(&conn)?;
        let approved: i64 = bookings::table
            .filter(bookings::status.eq(BOOKING_STATUS_APPROVED))
            .count()
            .get_result(&conn)?;
        let rejected: i64 = bookings::table
            .filter(bookings::status.eq(BOOKING_STATUS_REJECTED))
            .count()
            .get_result(&conn)?;

        Ok(StatsSummaryResponse {
            halls: halls_total,
            available_halls: halls_available,
            users: users_total,
            bookings: bookings_total,
            pending_bookings: pending,
            approved_bookings: approved,
            rejected_bookings: rejected,
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(summary))
}
