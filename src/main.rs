#[macro_use]
extern crate diesel;

mod auth;
mod bookings;
mod database;
mod error;
mod halls;
mod models;
mod protocol;
mod schema;
mod stats;
mod users;
mod utils;

use actix_web::{middleware, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

use auth::token::TokenKeys;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let secret = utils::jwt_secret().expect("JWT_SECRET not found");
    let keys = TokenKeys::from_secret(secret.as_bytes());

    let bind = utils::bind_addr();
    log::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .data(pool.clone())
            .data(keys.clone())
            .service(
                web::scope("/api")
                    .configure(auth::config)
                    .service(web::scope("/halls").configure(halls::config))
                    .service(web::scope("/users").configure(users::config))
                    .service(web::scope("/bookings").configure(bookings::config))
                    .service(web::scope("/public").configure(bookings::public_config))
                    .service(web::scope("/stats").configure(stats::config)),
            )
    })
    .bind(&bind)?
    .run()
    .await
}
