use serde::Serialize;

use crate::models::halls::Hall;

#[derive(Serialize)]
pub struct HallItem {
    pub id: u64,
    pub name: String,
    pub capacity: i32,
    pub available: bool,
}

impl From<Hall> for HallItem {
    fn from(hall: Hall) -> Self {
        Self {
            id: hall.id,
            name: hall.name,
            capacity: hall.capacity,
            available: hall.available,
        }
    }
}
