pub mod app_state;
pub mod config;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub mod test_utils;
