use {
    serde::Serialize,
    diesel::{Identifiable, Queryable, Insertable},
    super::schema::{questions, categories}
};

#[derive(Identifiable, Queryable, PartialEq, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct Category {
    pub(super) id: i32,
    pub kind: String
}

#[derive(Identifiable, Queryable, Serialize, PartialEq, Debug, Clone)]
#[diesel(table_name = questions)]
pub struct Question {
    pub(super) id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32
}

#[derive(Insertable, Debug)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub difficulty: i32,
    pub category: i32
}
