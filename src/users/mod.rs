mod responses;

use actix_web::{delete, get, web, HttpResponse};
use diesel::prelude::*;

use crate::{
    auth::token::AdminUser, database::get_db_conn, error::ApiError, models::users::User,
    protocol::MessageResponse, DbPool,
};

use self::responses::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users).service(delete_user);
}

#[get("")]
async fn list_users(_admin: AdminUser, pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::users;

    let conn = get_db_conn(&pool)?;
    let users = web::block(move || {
        users::table
            .order(users::username.asc())
            .get_results::<User>(&conn)
            .map_err(ApiError::from)
    })
    .await?;

    let users: Vec<UserItem> = users.into_iter().map(UserItem::from).collect();
    Ok(HttpResponse::Ok().json(users))
}

#[delete("/{id}")]
async fn delete_user(
    admin: AdminUser,
    pool: web::Data<DbPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::{bookings, users};

    let id = path.into_inner();
    if id == admin.0.id {
        return Err(ApiError::bad_request(
            "administrators cannot delete their own account",
        ));
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, ApiError, _>(|| {
            let deleted = diesel::delete(users::table.find(id)).execute(&conn)?;
            if deleted == 0 {
                return Err(ApiError::not_found("no such user"));
            }

            diesel::delete(bookings::table.filter(bookings::user_id.eq(id))).execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("user deleted")))
}
