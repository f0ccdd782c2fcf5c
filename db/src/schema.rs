diesel::table! {
    questions (id) {
        id -> Integer,
        question_text -> Text,
        pub_date -> TimestamptzSqlite,
    }
}
