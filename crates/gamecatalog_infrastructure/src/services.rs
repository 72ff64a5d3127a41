use std::sync::Arc;

use axum::extract::FromRef;

use gamecatalog_interface::players::repository::PlayerRepositoryHandle;
use gamecatalog_interface::players::service::PlayersServiceHandle;

pub mod players_service;

use players_service::RepositoryPlayersService;

#[derive(FromRef, Clone)]
pub struct ServiceRegistry {
    pub players_service: PlayersServiceHandle,
}

impl ServiceRegistry {
    pub fn new(player_repository: PlayerRepositoryHandle) -> Self {
        let players_service = Arc::new(RepositoryPlayersService::new(player_repository));

        Self { players_service }
    }
}
