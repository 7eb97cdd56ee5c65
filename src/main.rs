// diesel's `table!` schema won't compile without this
#[macro_use] extern crate diesel;

mod routing;
mod models;

use {
    std::env,
    rocket::{
        Rocket,
        Build,
        routes,
        catchers,
        figment::Figment
    },
    models::{
        db::{DbConn, setup_fairing},
        web::Cors
    }
};

/// Rocket's usual configuration sources, with `DATABASE_URL` taking
/// precedence for the `trivia` pool.
fn figment() -> Figment {
    let figment = rocket::Config::figment();
    match env::var("DATABASE_URL") {
        Ok(url) => figment.merge(("databases.trivia.url", url)),
        Err(_) => figment
    }
}

pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![
            routing::list_categories,
            routing::category_questions,
            routing::list_questions,
            routing::delete_question,
            routing::create_question,
            routing::search_questions,
            routing::play_quiz,
            routing::preflight
        ])
        .register("/", catchers![
            routing::catchers::bad_request,
            routing::catchers::not_found,
            routing::catchers::unprocessable,
            routing::catchers::unhandled
        ])
        .attach(DbConn::fairing())
        .attach(setup_fairing())
        .attach(Cors)
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenv::dotenv().ok();

    build(figment())
        .launch()
        .await
        .map(drop)
}
