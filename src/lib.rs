pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod views;

pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::seed;
pub use infrastructure::server;
