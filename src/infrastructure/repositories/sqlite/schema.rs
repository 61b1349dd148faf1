diesel::table! {
    entries (id) {
        id -> Integer,
        text -> Text,
        tags -> Text,
        is_expanded -> Bool,
        created_ts -> Timestamp,
        updated_ts -> Timestamp,
        deleted_ts -> Nullable<Timestamp>,
    }
}
