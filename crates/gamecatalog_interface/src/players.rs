pub mod level;
pub mod model;
pub mod query;
pub mod repository;
pub mod service;
