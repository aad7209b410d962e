// Infrastructure layer module
// Contains database adapters
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
pub mod search_executor;

pub use search_executor::SearchExecutor;
