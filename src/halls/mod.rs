mod requests;
mod responses;

use actix_web::{delete, get, post, put, web, HttpResponse};
use diesel::prelude::*;

use crate::{
    auth::token::AdminUser,
    database::{get_db_conn, last_insert_id},
    error::ApiError,
    models::halls::{Hall, NewHall, UpdateHall},
    protocol::MessageResponse,
    DbPool,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_halls)
        .service(get_hall)
        .service(create_hall)
        .service(update_hall)
        .service(delete_hall);
}

#[get("")]
async fn list_halls(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::halls;

    let conn = get_db_conn(&pool)?;
    let halls = web::block(move || {
        halls::table
            .order(halls::name.asc())
            .get_results::<Hall>(&conn)
            .map_err(ApiError::from)
    })
    .await?;

    let halls: Vec<HallItem> = halls.into_iter().map(HallItem::from).collect();
    Ok(HttpResponse::Ok().json(halls))
}

#[get("/{id}")]
async fn get_hall(pool: web::Data<DbPool>, path: web::Path<u64>) -> Result<HttpResponse, ApiError> {
    use crate::schema::halls;

    let id = path.into_inner();
    let conn = get_db_conn(&pool)?;
    let hall = web::block(move || {
        halls::table
            .find(id)
            .get_result::<Hall>(&conn)
            .optional()
            .map_err(ApiError::from)
    })
    .await?
    .ok_or_else(|| ApiError::not_found("no such hall"))?;

    Ok(HttpResponse::Ok().json(HallItem::from(hall)))
}

#[post("")]
async fn create_hall(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
    info: web::Json<CreateHallRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::halls;

    let info = info.into_inner();
    if info.name.trim().is_empty() {
        return Err(ApiError::bad_request("hall name must not be empty"));
    }
    if info.capacity <= 0 {
        return Err(ApiError::bad_request("capacity must be positive"));
    }

    let conn = get_db_conn(&pool)?;
    let hall = web::block(move || {
        conn.transaction::<Hall, ApiError, _>(|| {
            let data = NewHall {
                name: info.name,
                capacity: info.capacity,
                available: true,
            };
            diesel::insert_into(halls::table).values(data).execute(&conn)?;

            let id: u64 = diesel::select(last_insert_id).get_result(&conn)?;
            halls::table.find(id).get_result::<Hall>(&conn).map_err(Into::into)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(HallItem::from(hall)))
}

#[put("/{id}")]
async fn update_hall(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
    path: web::Path<u64>,
    info: web::Json<UpdateHallRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::halls;

    let id = path.into_inner();
    let info = info.into_inner();
    if let Some(name) = &info.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("hall name must not be empty"));
        }
    }
    if let Some(capacity) = info.capacity {
        if capacity <= 0 {
            return Err(ApiError::bad_request("capacity must be positive"));
        }
    }

    let conn = get_db_conn(&pool)?;
    let hall = web::block(move || {
        conn.transaction::<Hall, ApiError, _>(|| {
            let existing = halls::table
                .find(id)
                .get_result::<Hall>(&conn)
                .optional()?
                .ok_or_else(|| ApiError::not_found("no such hall"))?;

            let data = UpdateHall {
                name: info.name,
                capacity: info.capacity,
                available: info.available,
            };
            // diesel rejects an empty changeset, so skip the write then
            if data.name.is_none() && data.capacity.is_none() && data.available.is_none() {
                return Ok(existing);
            }

            diesel::update(halls::table.find(id)).set(&data).execute(&conn)?;
            halls::table.find(id).get_result::<Hall>(&conn).map_err(Into::into)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(HallItem::from(hall)))
}

#[delete("/{id}")]
async fn delete_hall(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, halls};

    let id = path.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, ApiError, _>(|| {
            let deleted = diesel::delete(halls::table.find(id)).execute(&conn)?;
            if deleted == 0 {
                return Err(ApiError::not_found("no such hall"));
            }

            // bookings of a removed hall are meaningless, drop them with it
            diesel::delete(bookings::table.filter(bookings::hall_id.eq(id))).execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("hall deleted")))
}
