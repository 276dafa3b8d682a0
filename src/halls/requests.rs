use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateHallRequest {
    pub name: String,
    pub capacity: i32,
}

#[derive(Deserialize)]
pub struct UpdateHallRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub available: Option<bool>,
}
