use crate::schema::halls;

#[derive(Queryable, Identifiable)]
#[table_name = "halls"]
pub struct Hall {
    pub id: u64,
    pub name: String,
    pub capacity: i32,
    pub available: bool,
}

#[derive(Insertable)]
#[table_name = "halls"]
pub struct NewHall {
    pub name: String,
    pub capacity: i32,
    pub available: bool,
}

#[derive(AsChangeset, Default)]
#[table_name = "halls"]
pub struct UpdateHall {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub available: Option<bool>,
}
