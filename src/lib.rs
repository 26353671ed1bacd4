pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod router;

pub use db::TriviaStorage;
pub use error::TriviaError;
