pub mod memory_player_repository;
pub mod mongo_player_repository;
