use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::players::model::{Player, PlayerRequest};
use crate::players::query::GetPlayersQuery;

#[async_trait]
pub trait PlayersService {
    // Listing calls
    async fn get_players(&self, query: GetPlayersQuery) -> Result<Vec<Player>>;
    async fn count_players(&self, query: GetPlayersQuery) -> Result<usize>;
    // Single player calls
    async fn create_player(&self, req: PlayerRequest) -> Result<Player>;
    async fn get_player(&self, id: i64) -> Result<Player>;
    async fn update_player(&self, id: i64, req: PlayerRequest) -> Result<Player>;
    async fn delete_player(&self, id: i64) -> Result<()>;
}

pub type PlayersServiceHandle = Arc<dyn PlayersService + Send + Sync>;
