use {
    serde::Serialize,
    std::collections::BTreeMap,
    rocket::{
        get,
        serde::json::Json
    },
    crate::models::{
        trivia,
        error::Error,
        db::{
            DbConn,
            CategoryId,
            models::{Category, Question}
        }
    }
};

/// Categories as the front end wants them: id to label.
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|cat| (cat.id(), cat.kind.clone()))
        .collect()
}

#[derive(Serialize)]
pub struct JsonCategories {
    categories: CategoryMap
}

#[get("/categories")]
pub async fn list_categories(conn: DbConn) -> Result<Json<JsonCategories>, Error> {
    conn.run(|c| trivia::categories(c))
        .await
        .map(|categories| JsonCategories {
            categories: category_map(&categories)
        })
        .map(Json)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonCategoryQuestions {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String
}

#[get("/categories/<id>/questions")]
pub async fn category_questions(id: CategoryId, conn: DbConn) -> Result<Json<JsonCategoryQuestions>, Error> {
    conn.run(move |c| trivia::questions_of_category(id, c))
        .await
        .map(|(category, questions)| JsonCategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category: category.kind
        })
        .map(Json)
}
