pub mod categories;
pub mod questions;
pub mod quizzes;

pub use {
    categories::*,
    questions::*,
    quizzes::*
};
