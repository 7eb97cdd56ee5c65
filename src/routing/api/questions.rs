use {
    serde::{Serialize, Deserialize},
    rocket::{
        get,
        post,
        delete,
        serde::json::{self, Json}
    },
    super::categories::{CategoryMap, category_map},
    crate::models::{
        trivia::{self, QuestionDraft},
        pagination::page_or_first,
        web::OrInvalid,
        error::Error,
        db::{
            DbConn,
            CategoryId,
            QuestionId,
            models::Question
        }
    }
};

#[derive(Serialize)]
pub struct JsonQuestionPage {
    questions: Vec<Question>,
    total_questions: i64,
    categories: CategoryMap,
    current_category: Option<String>
}

#[get("/questions?<page>")]
pub async fn list_questions(page: Option<i64>, conn: DbConn) -> Result<Json<JsonQuestionPage>, Error> {
    let page = page_or_first(page);

    conn.run(move |c| trivia::question_page(page, c))
        .await
        .map(|page| JsonQuestionPage {
            current_category: page.categories
                .first()
                .map(|cat| cat.kind.clone()),
            categories: category_map(&page.categories),
            total_questions: page.total,
            questions: page.questions
        })
        .map(Json)
}

#[derive(Serialize)]
pub struct JsonDeleted {
    deleted: QuestionId
}

#[delete("/questions/<id>")]
pub async fn delete_question(id: QuestionId, conn: DbConn) -> Result<Json<JsonDeleted>, Error> {
    let deleted = conn.run(move |c| trivia::delete(id, c)).await?;
    log::info!("deleted question {}", deleted);

    Ok(Json(JsonDeleted { deleted }))
}

/// Every field is optional here so a missing one is reported as a bad
/// request instead of a decoding failure.
#[derive(Deserialize, Debug)]
pub struct JsonNewQuestion {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i32>,
    category: Option<CategoryId>
}

impl JsonNewQuestion {
    fn into_draft(self) -> Result<QuestionDraft, Error> {
        Ok(QuestionDraft {
            question: self.question.or_invalid("missing question")?,
            answer: self.answer.or_invalid("missing answer")?,
            difficulty: self.difficulty.or_invalid("missing difficulty")?,
            category: self.category.or_invalid("missing category")?
        })
    }
}

#[derive(Serialize)]
pub struct JsonCreated {
    created: QuestionId
}

#[post("/questions", data = "<body>")]
pub async fn create_question(body: Result<Json<JsonNewQuestion>, json::Error<'_>>, conn: DbConn) -> Result<Json<JsonCreated>, Error> {
    let draft = body
        .or_invalid("malformed question")?
        .into_draft()?;

    let created = conn.run(move |c| trivia::create(&draft, c)).await?;
    log::info!("created question {} in category {}", created.id(), created.category);

    Ok(Json(JsonCreated { created: created.id() }))
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonSearch {
    search_term: Option<String>
}

#[derive(Serialize)]
pub struct JsonSearchResults {
    total_questions: usize,
    questions: Vec<Question>,
    current_category: Option<String>
}

#[post("/questions/search", data = "<body>")]
pub async fn search_questions(body: Result<Json<JsonSearch>, json::Error<'_>>, conn: DbConn) -> Result<Json<JsonSearchResults>, Error> {
    let term = body
        .or_invalid("malformed search")?
        .search_term
        .or_invalid("missing searchTerm")?;

    conn.run(move |c| trivia::search(&term, c))
        .await
        .map(|questions| JsonSearchResults {
            total_questions: questions.len(),
            questions,
            current_category: None
        })
        .map(Json)
}

#[cfg(test)]
mod test {
    use {
        crate::test,
        serde_json::{json, Value},
        rocket::http::{Status, ContentType}
    };

    #[test]
    fn first_page() {
        let client = test::client(true);

        let response = client.get("/questions?page=1").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_json::<Value>().unwrap();
        assert_eq!(body["total_questions"], 19);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["current_category"], "Art");
        assert_eq!(body["categories"]["6"], "Sports");
        assert_eq!(
            body["questions"][0],
            json!({
                "id": 2,
                "question": "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
                "answer": "Apollo 13",
                "difficulty": 4,
                "category": 5
            })
        );
    }

    #[test]
    fn page_defaults_to_first() {
        let client = test::client(true);

        let body = client.get("/questions").dispatch().into_json::<Value>().unwrap();
        assert_eq!(body["questions"][0]["id"], 2);
    }

    #[test]
    fn page_out_of_range() {
        let client = test::client(true);

        assert_eq!(client.get("/questions?page=1000").dispatch().status(), Status::NotFound);
        assert_eq!(client.get("/questions?page=0").dispatch().status(), Status::BadRequest);
    }

    #[test]
    fn create_and_delete() {
        let client = test::client(true);

        let response = client.post("/questions")
            .header(ContentType::JSON)
            .body(json!({
                "question": "testQuestion",
                "answer": "testAnswer",
                "difficulty": 1,
                "category": 1
            }).to_string())
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let id = response.into_json::<Value>().unwrap()["created"].as_i64().unwrap();
        assert!(id > 0);

        let page = client.get("/questions?page=2").dispatch().into_json::<Value>().unwrap();
        let last = page["questions"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["id"], id);
        assert_eq!(last["question"], "testQuestion");
        assert_eq!(last["answer"], "testAnswer");
        assert_eq!(last["difficulty"], 1);
        assert_eq!(last["category"], 1);

        let response = client.delete(format!("/questions/{}", id)).dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>().unwrap(), json!({ "deleted": id }));

        let response = client.delete(format!("/questions/{}", id)).dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }

    #[test]
    fn create_with_missing_fields() {
        let client = test::client(true);

        let response = client.post("/questions")
            .header(ContentType::JSON)
            .body(json!({ "question": "testQuestion", "answer": "testAnswer" }).to_string())
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_json::<Value>().unwrap(),
            json!({ "success": false, "error": 400, "message": "bad request" })
        );
    }

    #[test]
    fn create_with_malformed_body() {
        let client = test::client(true);

        let response = client.post("/questions")
            .header(ContentType::JSON)
            .body("{ not json")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn create_in_unknown_category() {
        let client = test::client(true);

        let response = client.post("/questions")
            .header(ContentType::JSON)
            .body(json!({
                "question": "testQuestion",
                "answer": "testAnswer",
                "difficulty": 1,
                "category": 1000
            }).to_string())
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn search() {
        let client = test::client(true);

        for term in ["heav", "HEAV"] {
            let response = client.post("/questions/search")
                .header(ContentType::JSON)
                .body(json!({ "searchTerm": term }).to_string())
                .dispatch();
            assert_eq!(response.status(), Status::Ok);

            let body = response.into_json::<Value>().unwrap();
            assert_eq!(body["total_questions"], 1);
            assert_eq!(body["questions"][0]["answer"], "The Liver");
            assert_eq!(body["current_category"], Value::Null);
        }
    }

    #[test]
    fn search_without_term() {
        let client = test::client(true);

        let response = client.post("/questions/search")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }
}
