mod requests;
mod responses;
pub mod token;

use actix_web::{post, web, HttpResponse};
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    error::ApiError,
    models::users::{NewUser, User, ROLES, ROLE_STUDENT},
    protocol::MessageResponse,
    utils::hash_password,
    DbPool,
};

use self::{requests::*, responses::*, token::TokenKeys};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

#[post("/register")]
async fn register(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::users;

    let info = info.into_inner();
    if info.username.trim().is_empty() {
        return Err(ApiError::bad_request("username must not be empty"));
    }
    if info.password.is_empty() {
        return Err(ApiError::bad_request("password must not be empty"));
    }
    let role = info.role.clone().unwrap_or_else(|| ROLE_STUDENT.to_string());
    if !ROLES.contains(&role.as_str()) {
        return Err(ApiError::bad_request(format!("unknown role \"{}\"", role)));
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, ApiError, _>(|| {
            let taken: i64 = users::table
                .filter(users::username.eq(&info.username))
                .count()
                .get_result(&conn)?;
            if taken > 0 {
                return Err(ApiError::conflict("username already taken"));
            }

            let data = NewUser {
                username: info.username,
                password: hash_password(&info.password),
                role,
            };
            diesel::insert_into(users::table).values(data).execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("account created")))
}

#[post("/login")]
async fn login(
    pool: web::Data<DbPool>,
    keys: web::Data<TokenKeys>,
    info: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::users;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    // a single uniform failure for unknown username and wrong password
    let user = web::block(move || {
        users::table
            .filter(users::username.eq(&info.username))
            .filter(users::password.eq(hash_password(&info.password)))
            .get_result::<User>(&conn)
            .optional()
            .map_err(ApiError::from)
    })
    .await?
    .ok_or_else(|| ApiError::unauthorized("invalid username or password"))?;

    let token = keys.issue(user.id, &user.username, &user.role)?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        role: user.role,
    }))
}
