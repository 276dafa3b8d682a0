use serde::Serialize;

use crate::models::users::User;

/// Listing shape for administrators; the password hash never leaves the
/// database layer.
#[derive(Serialize)]
pub struct UserItem {
    pub id: u64,
    pub username: String,
    pub role: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
