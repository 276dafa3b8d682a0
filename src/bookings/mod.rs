mod requests;
mod responses;

use actix_web::{get, post, put, web, HttpResponse};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    auth::token::{AdminUser, AuthUser},
    database::{get_db_conn, last_insert_id},
    error::ApiError,
    models::{
        bookings::{
            Booking, NewBooking, BOOKING_STATUS_APPROVED, BOOKING_STATUS_PENDING,
            BOOKING_STATUS_REJECTED,
        },
        halls::Hall,
        users::{User, ROLE_DOCTOR},
    },
    utils::{get_str_pattern_opt, parse_date, parse_hm_time},
    DbPool,
};

use self::{requests::*, responses::*};

const RECENT_LIMIT: i64 = 10;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(request_booking)
        .service(recent_bookings)
        .service(list_bookings)
        .service(update_status);
}

/// Registered under the public scope, no token required.
pub fn public_config(cfg: &mut web::ServiceConfig) {
    cfg.service(public_bookings);
}

/// The overlap filter used by both the create and the approve path. Matches
/// approved bookings of the given hall and day whose half-open interval
/// intersects [start, end): existing.start < end AND existing.end > start.
fn count_approved_conflicts(
    conn: &diesel::MysqlConnection,
    hall_id: u64,
    date: chrono::NaiveDate,
    start: chrono::NaiveTime,
    end: chrono::NaiveTime,
    exclude_id: Option<u64>,
) -> Result<i64, ApiError> {
    use crate::schema::bookings;

    // ids start at 1, so 0 excludes nothing
    let exclude_id = exclude_id.unwrap_or(0);
    bookings::table
        .filter(bookings::hall_id.eq(hall_id))
        .filter(bookings::date.eq(date))
        .filter(bookings::status.eq(BOOKING_STATUS_APPROVED))
        .filter(bookings::start_time.lt(end))
        .filter(bookings::end_time.gt(start))
        .filter(bookings::id.ne(exclude_id))
        .count()
        .get_result(conn)
        .map_err(Into::into)
}

#[post("/request")]
async fn request_booking(
    user: AuthUser,
    pool: web::Data<DbPool>,
    info: web::Json<BookingRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls};

    if user.role != ROLE_DOCTOR {
        return Err(ApiError::forbidden(
            "only doctor accounts can request bookings",
        ));
    }

    let info = info.into_inner();
    if info.subject.trim().is_empty() {
        return Err(ApiError::bad_request("subject must not be empty"));
    }
    let date = parse_date(&info.date)?;
    let start_time = parse_hm_time(&info.start_time)?;
    let end_time = parse_hm_time(&info.end_time)?;
    if start_time >= end_time {
        return Err(ApiError::bad_request("startTime must be before endTime"));
    }

    let conn = get_db_conn(&pool)?;
    let user_id = user.id;
    let (booking, hall_name) = web::block(move || {
        conn.transaction::<(Booking, String), ApiError, _>(|| {
            // lock the hall row so concurrent requests for the same hall
            // cannot both pass the conflict check
            let hall = halls::table
                .find(info.hall_id)
                .for_update()
                .get_result::<Hall>(&conn)
                .optional()?
                .ok_or_else(|| ApiError::not_found("no such hall"))?;
            if !hall.available {
                return Err(ApiError::bad_request("hall is not available for booking"));
            }

            let conflicts =
                count_approved_conflicts(&conn, info.hall_id, date, start_time, end_time, None)?;
            if conflicts > 0 {
                return Err(ApiError::conflict(
                    "hall is already booked for an overlapping time slot",
                ));
            }

            let data = NewBooking {
                hall_id: info.hall_id,
                user_id,
                subject: info.subject,
                department: info.department,
                level: info.level,
                date,
                start_time,
                end_time,
                status: BOOKING_STATUS_PENDING.to_string(),
                created_at: Utc::now().naive_utc(),
            };
            diesel::insert_into(bookings::table).values(data).execute(&conn)?;

            let id: u64 = diesel::select(last_insert_id).get_result(&conn)?;
            let booking = bookings::table.find(id).get_result::<Booking>(&conn)?;
            Ok((booking, hall.name))
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(BookingItem::new(booking, hall_name, user.username)))
}

#[get("")]
async fn list_bookings(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls, users};

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        bookings::table
            .inner_join(halls::table.on(bookings::hall_id.eq(halls::id)))
            .inner_join(users::table.on(bookings::user_id.eq(users::id)))
            .order(bookings::created_at.desc())
            .get_results::<(Booking, Hall, User)>(&conn)
            .map_err(ApiError::from)
    })
    .await?;

    let items: Vec<BookingItem> = rows
        .into_iter()
        .map(|(booking, hall, user)| BookingItem::new(booking, hall.name, user.username))
        .collect();
    Ok(HttpResponse::Ok().json(items))
}

#[get("/recent")]
async fn recent_bookings(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls, users};

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        bookings::table
            .inner_join(halls::table.on(bookings::hall_id.eq(halls::id)))
            .inner_join(users::table.on(bookings::user_id.eq(users::id)))
            .order(bookings::created_at.desc())
            .limit(RECENT_LIMIT)
            .get_results::<(Booking, Hall, User)>(&conn)
            .map_err(ApiError::from)
    })
    .await?;

    let items: Vec<BookingItem> = rows
        .into_iter()
        .map(|(booking, hall, user)| BookingItem::new(booking, hall.name, user.username))
        .collect();
    Ok(HttpResponse::Ok().json(items))
}

#[put("/{id}/status")]
async fn update_status(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
    path: web::Path<u64>,
    info: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls, users};

    let id = path.into_inner();
    let status = info.into_inner().status;
    if status != BOOKING_STATUS_APPROVED && status != BOOKING_STATUS_REJECTED {
        return Err(ApiError::bad_request(
            "status must be \"approved\" or \"rejected\"",
        ));
    }

    let conn = get_db_conn(&pool)?;
    let (booking, hall, user) = web::block(move || {
        conn.transaction::<(Booking, Hall, User), ApiError, _>(|| {
            let booking = bookings::table
                .find(id)
                .get_result::<Booking>(&conn)
                .optional()?
                .ok_or_else(|| ApiError::not_found("no such booking"))?;

            if status == BOOKING_STATUS_APPROVED {
                // same per-hall serialization as the create path
                halls::table
                    .find(booking.hall_id)
                    .for_update()
                    .get_result::<Hall>(&conn)
                    .optional()?
                    .ok_or_else(|| ApiError::not_found("no such hall"))?;

                let conflicts = count_approved_conflicts(
                    &conn,
                    booking.hall_id,
                    booking.date,
                    booking.start_time,
                    booking.end_time,
                    Some(id),
                )?;
                if conflicts > 0 {
                    return Err(ApiError::conflict(
                        "an approved booking already occupies this time slot",
                    ));
                }
            }

            diesel::update(bookings::table.find(id))
                .set(bookings::status.eq(&status))
                .execute(&conn)?;

            bookings::table
                .inner_join(halls::table.on(bookings::hall_id.eq(halls::id)))
                .inner_join(users::table.on(bookings::user_id.eq(users::id)))
                .filter(bookings::id.eq(id))
                .get_result::<(Booking, Hall, User)>(&conn)
                .map_err(Into::into)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(BookingItem::new(booking, hall.name, user.username)))
}

#[get("/bookings")]
async fn public_bookings(
    pool: web::Data<DbPool>,
    query: web::Query<PublicBookingsQuery>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls};

    let query = query.into_inner();
    let department_pattern = get_str_pattern_opt(query.department);
    let level_pattern = get_str_pattern_opt(query.level);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        bookings::table
            .inner_join(halls::table.on(bookings::hall_id.eq(halls::id)))
            .filter(bookings::status.eq(BOOKING_STATUS_APPROVED))
            .filter(bookings::department.like(department_pattern))
            .filter(bookings::level.like(level_pattern))
            .order(bookings::date.asc())
            .then_order_by(bookings::start_time.asc())
            .get_results::<(Booking, Hall)>(&conn)
            .map_err(ApiError::from)
    })
    .await?;

    let items: Vec<PublicBookingItem> = rows
        .into_iter()
        .map(|(booking, hall)| PublicBookingItem::new(booking, hall.name))
        .collect();
    Ok(HttpResponse::Ok().json(items))
}
