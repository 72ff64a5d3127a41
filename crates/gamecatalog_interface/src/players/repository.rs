use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::players::model::Player;

// Storage of the player records.
#[async_trait]
pub trait PlayerRepository {
    // Every stored player, ordered by id.
    async fn find_all(&self) -> Result<Vec<Player>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>>;
    // Insert the player when it has no id yet (an id is then assigned), replace it otherwise.
    async fn save(&self, player: Player) -> Result<Player>;
    async fn delete(&self, player: &Player) -> Result<()>;
}

pub type PlayerRepositoryHandle = Arc<dyn PlayerRepository + Send + Sync>;
