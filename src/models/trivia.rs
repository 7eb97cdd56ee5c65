use crate::models::{
    pagination::PageWindow,
    error::{Error, Result},
    db::{
        Connection,
        CategoryId,
        QuestionId,
        models::{Category, Question, NewQuestion}
    }
};

#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: i64,
    pub categories: Vec<Category>
}

/// Owned input for [`create`], checked before anything is written.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId
}

pub fn categories(conn: &mut Connection) -> Result<Vec<Category>> {
    let categories = Category::ordered_by_type(conn)?;
    if categories.is_empty() {
        return Err(Error::NotFound)
    }

    Ok(categories)
}

pub fn question_page(page: i64, conn: &mut Connection) -> Result<QuestionPage> {
    let window = PageWindow::for_page(page)?;

    let questions = Question::page(window, conn)?;
    if questions.is_empty() {
        return Err(Error::NotFound)
    }

    Ok(QuestionPage {
        questions,
        total: Question::count(conn)?,
        categories: Category::ordered_by_type(conn)?
    })
}

pub fn questions_of_category(category_id: CategoryId, conn: &mut Connection) -> Result<(Category, Vec<Question>)> {
    let category = Category::get(category_id, conn)?
        .ok_or(Error::NotFound)?;

    let questions = Question::of_category(category_id, conn)?;
    if questions.is_empty() {
        return Err(Error::NotFound)
    }

    Ok((category, questions))
}

pub fn search(term: &str, conn: &mut Connection) -> Result<Vec<Question>> {
    if term.trim().is_empty() {
        return Err(Error::InvalidArgument("empty search term"))
    }

    Question::search(term, conn)
        .map_err(Error::from)
}

pub fn create(draft: &QuestionDraft, conn: &mut Connection) -> Result<Question> {
    if draft.question.trim().is_empty() {
        return Err(Error::InvalidArgument("question text must not be empty"))
    }
    if draft.answer.trim().is_empty() {
        return Err(Error::InvalidArgument("answer must not be empty"))
    }
    if Category::get(draft.category, conn)?.is_none() {
        return Err(Error::InvalidArgument("unknown category"))
    }

    let new = NewQuestion {
        question: &draft.question,
        answer: &draft.answer,
        difficulty: draft.difficulty,
        category: draft.category
    };

    Question::insert(&new, conn)
        .map_err(Error::from)
}

pub fn delete(question_id: QuestionId, conn: &mut Connection) -> Result<QuestionId> {
    Question::delete(question_id, conn)
        .map(|()| question_id)
        .map_err(Error::from)
}
