//! Department and employee records behind a JSON REST API, plus the client
//! that lists, filters and summarises them.

pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
