use {
    serde::{Serialize, Deserialize},
    rocket::{
        post,
        serde::json::{self, Json}
    },
    crate::models::{
        quiz::{self, CategoryFilter},
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

/// Category ids come from the keys of `/categories`, so some clients send
/// them as strings.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum LooseId {
    Number(CategoryId),
    Text(String)
}

impl LooseId {
    fn parse(self) -> Result<CategoryId, Error> {
        match self {
            LooseId::Number(id) => Ok(id),
            LooseId::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| Error::InvalidArgument("category id is not a number"))
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum JsonQuizCategory {
    Named(String),
    Detailed {
        id: Option<LooseId>,
        #[serde(rename = "type")]
        kind: Option<String>
    }
}

impl JsonQuizCategory {
    fn into_filter(self) -> Result<CategoryFilter, Error> {
        match self {
            JsonQuizCategory::Named(name) => CategoryFilter::from_name(&name),
            JsonQuizCategory::Detailed { id, kind } => CategoryFilter::from_parts(
                id.map(LooseId::parse).transpose()?,
                kind.as_deref()
            )
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct JsonQuiz {
    quiz_category: Option<JsonQuizCategory>,
    previous_questions: Option<Vec<QuestionId>>
}

#[derive(Serialize)]
pub struct JsonNextQuestion {
    success: bool,
    question: Question
}

#[post("/quizzes", data = "<body>")]
pub async fn play_quiz(body: Result<Json<JsonQuiz>, json::Error<'_>>, conn: DbConn) -> Result<Json<JsonNextQuestion>, Error> {
    let body = body.or_invalid("malformed quiz request")?;
    let filter = body.quiz_category
        .or_invalid("missing quiz_category")?
        .into_filter()?;
    let seen = body.previous_questions
        .or_invalid("missing previous_questions")?;

    conn.run(move |c| quiz::select_next(&seen, filter, c, &mut rand::thread_rng()))
        .await
        .map(|question| JsonNextQuestion {
            success: true,
            question
        })
        .map(Json)
}
