pub mod db;
pub mod web;
pub mod error;
pub mod pagination;
pub mod quiz;
pub mod trivia;
