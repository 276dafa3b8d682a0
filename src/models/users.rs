use crate::schema::users;

#[derive(Queryable, Identifiable)]
#[table_name = "users"]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_DOCTOR: &str = "doctor";
pub const ROLE_STUDENT: &str = "student";

pub const ROLES: [&str; 3] = [ROLE_ADMIN, ROLE_DOCTOR, ROLE_STUDENT];
