use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gamecatalog_interface::errors::Result;
use gamecatalog_interface::players::model::Player;
use gamecatalog_interface::players::repository::PlayerRepository;

// Players kept in the process memory, lost on restart.
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    store: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    last_id: i64,
    players: BTreeMap<i64, Player>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_all(&self) -> Result<Vec<Player>> {
        let store = self.store.read().await;
        Ok(store.players.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>> {
        let store = self.store.read().await;
        Ok(store.players.get(&id).cloned())
    }

    async fn save(&self, mut player: Player) -> Result<Player> {
        let mut store = self.store.write().await;

        let id = match player.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        player.id = Some(id);
        store.players.insert(id, player.clone());

        Ok(player)
    }

    async fn delete(&self, player: &Player) -> Result<()> {
        if let Some(id) = player.id {
            self.store.write().await.players.remove(&id);
        }
        Ok(())
    }
}
