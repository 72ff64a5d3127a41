use std::sync::Arc;

use gamecatalog_infrastructure::{
    database_connection::DatabaseManager,
    repositories::{
        memory_player_repository::InMemoryPlayerRepository,
        mongo_player_repository::MongoPlayerRepository,
    },
    services::ServiceRegistry,
    settings::{Settings, StorageBackend},
};
use gamecatalog_interface::players::repository::PlayerRepositoryHandle;

use gamecatalog_routing::{logger, router::ApplicationController};

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Could not parse settings");

    logger::setup(&settings.logger.level);

    let player_repository: PlayerRepositoryHandle = match settings.database.backend {
        StorageBackend::Mongo => {
            let db = DatabaseManager::connect(
                settings.database.uri.as_str(),
                settings.database.name.as_str(),
            )
            .await
            .expect("Could not initialize the database");

            Arc::new(MongoPlayerRepository::new(db))
        }
        StorageBackend::Memory => {
            tracing::warn!("players are kept in memory and will be lost on shutdown");
            Arc::new(InMemoryPlayerRepository::new())
        }
    };

    let services = ServiceRegistry::new(player_repository);

    tracing::info!("starting the {} environment", settings.environment);
    ApplicationController::run(settings, services).await;
}
