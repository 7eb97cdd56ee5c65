use {
    diesel::{
        insert_into,
        prelude::*,
        dsl::sql,
        sqlite::Sqlite,
        sql_types::{Bool, Text},
        result::{QueryResult, Error as QueryError}
    },
    crate::models::{
        quiz::CategoryFilter,
        pagination::PageWindow,
        db::{
            schema,
            Connection,
            models::{Category, Question, NewQuestion}
        }
    }
};

pub type CategoryId = i32;
pub type QuestionId = i32;

pub type BoxedQuestions<'a> = schema::questions::BoxedQuery<'a, Sqlite>;

// SQLite's own lower() and LIKE only fold ASCII
define_sql_function!(fn fold_case(text: Text) -> Text);

impl Category {
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Ties on the label fall back to id order.
    pub fn ordered_by_type(conn: &mut Connection) -> QueryResult<Vec<Category>> {
        use schema::categories::dsl::*;

        categories
            .order((type_.asc(), id.asc()))
            .load(conn)
    }

    pub fn get(category_id: CategoryId, conn: &mut Connection) -> QueryResult<Option<Category>> {
        use schema::categories::dsl::*;

        categories
            .find(category_id)
            .first(conn)
            .optional()
    }

    pub fn count(conn: &mut Connection) -> QueryResult<i64> {
        use schema::categories::dsl::*;

        categories
            .count()
            .get_result(conn)
    }
}

impl Question {
    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn count(conn: &mut Connection) -> QueryResult<i64> {
        use schema::questions::dsl::*;

        questions
            .count()
            .get_result(conn)
    }

    pub fn page(window: PageWindow, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        questions
            .order(id.asc())
            .limit(window.limit)
            .offset(window.offset)
            .load(conn)
    }

    pub fn of_category(category_id: CategoryId, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        questions
            .filter(category.eq(category_id))
            .order(id.asc())
            .load(conn)
    }

    /// Case-insensitive infix match on the question text.
    pub fn search(term: &str, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        fold_case_utils::register_impl(conn, |text: String| text.to_lowercase())?;

        questions
            .filter(fold_case(question)
                .like(infix_pattern(&term.to_lowercase()))
                .escape('\\')
            )
            .order(id.asc())
            .load(conn)
    }

    pub fn get(question_id: QuestionId, conn: &mut Connection) -> QueryResult<Option<Question>> {
        use schema::questions::dsl::*;

        questions
            .find(question_id)
            .first(conn)
            .optional()
    }

    /// Does not check that `new.category` exists.
    pub fn insert(new: &NewQuestion, conn: &mut Connection) -> QueryResult<Question> {
        use schema::questions::dsl::*;

        insert_into(questions)
            .values(new)
            .get_result(conn)
    }

    pub fn delete(question_id: QuestionId, conn: &mut Connection) -> QueryResult<()> {
        use schema::questions::dsl::*;

        diesel::delete(questions.find(question_id))
            .execute(conn)
            .and_then(|deleted| match deleted {
                0 => Err(QueryError::NotFound),
                _ => Ok(())
            })
    }

    /// All questions except `ids`, ordered by id. Further filters can be
    /// stacked on the returned query. The ids travel as one JSON array
    /// parameter, so any number of them stays under SQLite's bind limit.
    pub fn excluding(ids: &[QuestionId]) -> BoxedQuestions<'static> {
        use schema::questions::dsl::*;

        let seen = serde_json::to_string(ids)
            .unwrap_or_else(|_| String::from("[]"));

        questions
            .filter(sql::<Bool>("questions.id NOT IN (SELECT value FROM json_each(")
                .bind::<Text, _>(seen)
                .sql("))")
            )
            .order(id.asc())
            .into_boxed()
    }

    pub fn candidates(seen: &[QuestionId], filter: CategoryFilter, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::category;

        let query = match filter {
            CategoryFilter::All => Question::excluding(seen),
            CategoryFilter::Only(category_id) => Question::excluding(seen)
                .filter(category.eq(category_id))
        };

        query.load(conn)
    }
}

fn infix_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
