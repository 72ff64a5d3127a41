use axum::extract::{Json, Path, Query, State};
use axum::routing::get;
use axum::Router;

use gamecatalog_infrastructure::services::ServiceRegistry;

use gamecatalog_interface::errors::Result;
use gamecatalog_interface::players::model::{Player, PlayerRequest};
use gamecatalog_interface::players::query::GetPlayersQuery;
use gamecatalog_interface::players::service::PlayersServiceHandle;

pub struct PlayersRouter;

impl PlayersRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route(
                "/players",
                get(Self::get_players).post(Self::create_player),
            )
            .route("/players/count", get(Self::count_players))
            .route(
                "/players/:id",
                get(Self::get_player)
                    .post(Self::update_player)
                    .delete(Self::delete_player),
            )
            .with_state(service_registry)
    }

    /// Filtered, sorted and paginated list of players.
    async fn get_players(
        State(players_service): State<PlayersServiceHandle>,
        Query(params): Query<GetPlayersQuery>,
    ) -> Result<Json<Vec<Player>>> {
        players_service.get_players(params).await.map(Json)
    }

    /// Number of players matching the filters, paging is not considered.
    async fn count_players(
        State(players_service): State<PlayersServiceHandle>,
        Query(params): Query<GetPlayersQuery>,
    ) -> Result<Json<usize>> {
        players_service.count_players(params).await.map(Json)
    }

    async fn create_player(
        State(players_service): State<PlayersServiceHandle>,
        Json(body): Json<PlayerRequest>,
    ) -> Result<Json<Player>> {
        players_service.create_player(body).await.map(Json)
    }

    async fn get_player(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<i64>,
    ) -> Result<Json<Player>> {
        players_service.get_player(id).await.map(Json)
    }

    async fn update_player(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<i64>,
        Json(body): Json<PlayerRequest>,
    ) -> Result<Json<Player>> {
        players_service.update_player(id, body).await.map(Json)
    }

    async fn delete_player(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<i64>,
    ) -> Result<()> {
        players_service.delete_player(id).await
    }
}
