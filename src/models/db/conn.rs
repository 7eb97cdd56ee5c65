use {
    serde::Deserialize,
    rocket_sync_db_pools::database,
    rocket::{
        Rocket,
        Build,
        fairing::AdHoc
    }
};

pub type Connection = diesel::SqliteConnection;

#[database("trivia")]
pub struct DbConn(Connection);

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub seed_data: bool
}

/// Creates the tables (and seeds them, if configured) once the pool is up.
/// Must be attached after `DbConn::fairing()`.
pub fn setup_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Trivia Schema", |rocket: Rocket<Build>| async move {
        let settings = rocket
            .figment()
            .extract::<Settings>()
            .unwrap_or_default();

        let conn = match DbConn::get_one(&rocket).await {
            Some(conn) => conn,
            None => {
                log::error!("no `trivia` database connection available");
                return Err(rocket)
            }
        };

        match conn.run(move |c| super::setup(c, settings.seed_data)).await {
            Ok(()) => Ok(rocket),
            Err(e) => {
                log::error!("failed to set up trivia schema: {}", e);
                Err(rocket)
            }
        }
    })
}
