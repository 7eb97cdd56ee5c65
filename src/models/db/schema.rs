table! {
    categories (id) {
        id -> Integer,
        #[sql_name = "type"]
        type_ -> Text,
    }
}

table! {
    questions (id) {
        id -> Integer,
        question -> Text,
        answer -> Text,
        difficulty -> Integer,
        category -> Integer,
    }
}

allow_tables_to_appear_in_same_query!(
    categories,
    questions,
);
