pub mod database_connection;
pub mod repositories;
pub mod services;
pub mod settings;
