// src/challenge/mod.rs

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod routes;
pub mod service;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use routes::challenge_routes;
