use async_trait::async_trait;

use gamecatalog_interface::errors::{AppError, Result};
use gamecatalog_interface::players::model::{Player, PlayerRequest};
use gamecatalog_interface::players::query::GetPlayersQuery;
use gamecatalog_interface::players::repository::PlayerRepositoryHandle;
use gamecatalog_interface::players::service::PlayersService;

#[derive(Clone)]
pub struct RepositoryPlayersService {
    repository: PlayerRepositoryHandle,
}

impl RepositoryPlayersService {
    pub fn new(repository: PlayerRepositoryHandle) -> Self {
        Self { repository }
    }

    async fn find_player(&self, id: i64) -> Result<Player> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                msg: format!("no player found with id '{}'", id),
            })
    }
}

fn check_id(id: i64) -> Result<()> {
    if id <= 0 {
        tracing::warn!("rejected player id {}", id);
        return Err(AppError::BadRequest {
            msg: format!("the player id must be positive, received '{}'", id),
        });
    }
    Ok(())
}

#[async_trait]
impl PlayersService for RepositoryPlayersService {
    async fn get_players(&self, query: GetPlayersQuery) -> Result<Vec<Player>> {
        let page = query.page()?;

        let mut players = query.filter().apply(self.repository.find_all().await?);
        if let Some(order) = query.order {
            order.sort(&mut players);
        }

        tracing::debug!("{} players match {:?}", players.len(), query);
        Ok(page.slice(players))
    }

    async fn count_players(&self, query: GetPlayersQuery) -> Result<usize> {
        let players = query.filter().apply(self.repository.find_all().await?);

        Ok(players.len())
    }

    async fn create_player(&self, req: PlayerRequest) -> Result<Player> {
        let player = match req.to_new_player() {
            Some(player) if req.is_valid() => player,
            _ => {
                tracing::warn!("rejected invalid player {:?}", req);
                return Err(AppError::BadRequest {
                    msg: "the player to create is invalid".to_string(),
                });
            }
        };

        let player = self.repository.save(player).await?;

        tracing::info!("player {:?} '{}' created", player.id, player.name);
        Ok(player)
    }

    async fn get_player(&self, id: i64) -> Result<Player> {
        check_id(id)?;

        self.find_player(id).await
    }

    async fn update_player(&self, id: i64, mut req: PlayerRequest) -> Result<Player> {
        check_id(id)?;

        let mut player = self.find_player(id).await?;

        // Nothing received, the stored player is sent back as is.
        if req.is_empty() {
            return Ok(player);
        }

        // The whole request is refused when the player it would produce is invalid.
        req.fill_from(&player);
        if !req.is_valid() {
            tracing::warn!("rejected update of player {}: {:?}", id, req);
            return Err(AppError::BadRequest {
                msg: format!("the update of player '{}' is invalid", id),
            });
        }

        // Then each field is applied on its own, the ones not acceptable by themselves are skipped.
        if player.apply_update(&req) {
            player = self.repository.save(player).await?;
            tracing::info!("player {} updated", id);
        }

        Ok(player)
    }

    async fn delete_player(&self, id: i64) -> Result<()> {
        check_id(id)?;

        let player = self.find_player(id).await?;
        self.repository.delete(&player).await?;

        tracing::info!("player {} '{}' deleted", id, player.name);
        Ok(())
    }
}
