use log::info;
use validator::Validate;

use crate::model::player::{Player, PlayerSchema};
use crate::repository::store::{fetch_all, fetch_one, remove, save, DocumentStore};
use crate::service::error::ServiceError;
use crate::stats::leaderboard::{leaderboards, PlayerLeaderboards};

pub async fn list_players_service(store: &dyn DocumentStore) -> Result<Vec<Player>, ServiceError> {
    Ok(fetch_all(store).await?)
}

pub async fn get_player_service(store: &dyn DocumentStore, id: &str) -> Result<Player, ServiceError> {
    fetch_one(store, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Player {}", id)))
}

pub async fn create_player_service(
    store: &dyn DocumentStore,
    schema: PlayerSchema,
) -> Result<Player, ServiceError> {
    schema.validate()?;
    let player = schema.into_player(uuid::Uuid::new_v4().to_string());
    save(store, &player).await?;
    info!("Created player {} ({}) for {}", player.name, player.id, player.team);
    Ok(player)
}

pub async fn update_player_service(
    store: &dyn DocumentStore,
    id: &str,
    schema: PlayerSchema,
) -> Result<Player, ServiceError> {
    schema.validate()?;
    let existing = get_player_service(store, id).await?;
    let player = schema.into_player(existing.id);
    save(store, &player).await?;
    Ok(player)
}

pub async fn delete_player_service(store: &dyn DocumentStore, id: &str) -> Result<(), ServiceError> {
    if remove::<Player>(store, id).await? {
        info!("Deleted player {}", id);
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("Player {}", id)))
    }
}

pub async fn leaderboards_service(
    store: &dyn DocumentStore,
    limit: usize,
) -> Result<PlayerLeaderboards, ServiceError> {
    let players: Vec<Player> = fetch_all(store).await?;
    Ok(leaderboards(&players, limit))
}
