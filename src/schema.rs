table! {
    bookings (id) {
        id -> Unsigned<Bigint>,
        hall_id -> Unsigned<Bigint>,
        user_id -> Unsigned<Bigint>,
        subject -> Varchar,
        department -> Varchar,
        level -> Varchar,
        date -> Date,
        start_time -> Time,
        end_time -> Time,
        status -> Varchar,
        created_at -> Datetime,
    }
}

table! {
    halls (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        capacity -> Integer,
        available -> Bool,
    }
}

table! {
    users (id) {
        id -> Unsigned<Bigint>,
        username -> Varchar,
        password -> Char,
        role -> Varchar,
    }
}

allow_tables_to_appear_in_same_query!(
    bookings,
    halls,
    users,
);
