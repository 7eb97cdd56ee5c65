pub mod models;
pub mod schema;
pub mod ops;
mod conn;

use diesel::{
    QueryResult,
    connection::SimpleConnection
};

pub use {
    conn::{DbConn, Connection, setup_fairing},
    ops::*
};

const SCHEMA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));
const SEED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/seed.sql"));

/// Idempotent. Seed data only goes into a database without categories,
/// so deleted question ids are never brought back.
pub fn setup(conn: &mut Connection, seed: bool) -> QueryResult<()> {
    conn.batch_execute(SCHEMA)?;

    if seed && models::Category::count(conn)? == 0 {
        conn.batch_execute(SEED)?;
    }

    Ok(())
}
