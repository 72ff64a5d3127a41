use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReplaceOptions, ReturnDocument};
use serde::{Deserialize, Serialize};

use gamecatalog_interface::errors::{AppError, Result};
use gamecatalog_interface::players::model::{Player, Profession, Race};
use gamecatalog_interface::players::repository::PlayerRepository;

use crate::database_connection::DatabaseConnection;

const PLAYERS_COLLECTION: &str = "players";
const COUNTERS_COLLECTION: &str = "counters";

pub struct MongoPlayerRepository {
    db: DatabaseConnection,
}

impl MongoPlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // Atomically reserve the next player id. The counter document is created on first use.
    async fn next_id(&self) -> Result<i64> {
        let collection = self.db.collection::<Counter>(COUNTERS_COLLECTION);

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = collection
            .find_one_and_update(
                doc! {"_id": PLAYERS_COLLECTION},
                doc! {"$inc": {"seq": 1_i64}},
                options,
            )
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?
            .ok_or_else(|| AppError::MongoError {
                msg: "the players id counter could not be incremented".to_string(),
            })?;

        Ok(counter.seq)
    }
}

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

// The player as stored in the players collection.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlayerDocument {
    pub _id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: bson::DateTime,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl PlayerDocument {
    fn new(id: i64, player: &Player) -> Self {
        PlayerDocument {
            _id: id,
            name: player.name.clone(),
            title: player.title.clone(),
            race: player.race,
            profession: player.profession,
            birthday: bson::DateTime::from_millis(player.birthday.timestamp_millis()),
            banned: player.banned,
            experience: player.experience,
            level: player.level,
            until_next_level: player.until_next_level,
        }
    }
}

impl TryFrom<PlayerDocument> for Player {
    type Error = AppError;

    fn try_from(document: PlayerDocument) -> Result<Self> {
        let millis = document.birthday.timestamp_millis();
        let birthday =
            DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| AppError::MongoError {
                msg: format!("player {} has an out of range birthday: {}", document._id, millis),
            })?;

        Ok(Player {
            id: Some(document._id),
            name: document.name,
            title: document.title,
            race: document.race,
            profession: document.profession,
            birthday,
            banned: document.banned,
            experience: document.experience,
            level: document.level,
            until_next_level: document.until_next_level,
        })
    }
}

#[async_trait]
impl PlayerRepository for MongoPlayerRepository {
    async fn find_all(&self) -> Result<Vec<Player>> {
        let collection = self.db.collection::<PlayerDocument>(PLAYERS_COLLECTION);

        let find_options = FindOptions::builder().sort(doc! {"_id": 1}).build();

        let documents: Vec<PlayerDocument> = collection
            .find(None, find_options)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?
            .try_collect()
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        documents.into_iter().map(Player::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>> {
        let collection = self.db.collection::<PlayerDocument>(PLAYERS_COLLECTION);

        let document = collection
            .find_one(doc! {"_id": id}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        document.map(Player::try_from).transpose()
    }

    async fn save(&self, mut player: Player) -> Result<Player> {
        let collection = self.db.collection::<PlayerDocument>(PLAYERS_COLLECTION);

        match player.id {
            Some(id) => {
                let replace_options = ReplaceOptions::builder().upsert(true).build();

                collection
                    .replace_one(
                        doc! {"_id": id},
                        PlayerDocument::new(id, &player),
                        replace_options,
                    )
                    .await
                    .map_err(|e| AppError::MongoError { msg: e.to_string() })?;
            }
            None => {
                let id = self.next_id().await?;

                collection
                    .insert_one(PlayerDocument::new(id, &player), None)
                    .await
                    .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

                player.id = Some(id);
            }
        }

        Ok(player)
    }

    async fn delete(&self, player: &Player) -> Result<()> {
        let Some(id) = player.id else {
            return Ok(());
        };
        let collection = self.db.collection::<PlayerDocument>(PLAYERS_COLLECTION);

        collection
            .delete_one(doc! {"_id": id}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        Ok(())
    }
}
