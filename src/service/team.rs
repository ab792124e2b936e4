use log::{info, warn};
use validator::Validate;

use crate::model::team::{NewTeamSchema, Team, UpdateTeamSchema};
use crate::repository::store::{fetch_all, fetch_one, remove, save, DocumentStore};
use crate::service::error::ServiceError;

pub async fn list_teams_service(store: &dyn DocumentStore) -> Result<Vec<Team>, ServiceError> {
    Ok(fetch_all(store).await?)
}

pub async fn get_team_service(store: &dyn DocumentStore, id: &str) -> Result<Team, ServiceError> {
    fetch_one(store, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Team {}", id)))
}

async fn ensure_name_free(
    store: &dyn DocumentStore,
    name: &str,
    except_id: Option<&str>,
) -> Result<(), ServiceError> {
    let teams: Vec<Team> = fetch_all(store).await?;
    let taken = teams
        .iter()
        .any(|team| team.name == name && Some(team.id.as_str()) != except_id);
    if taken {
        return Err(ServiceError::Conflict(format!(
            "A team named {} already exists",
            name
        )));
    }
    Ok(())
}

/// New teams always start with an empty record.
pub async fn create_team_service(
    store: &dyn DocumentStore,
    new_team: NewTeamSchema,
) -> Result<Team, ServiceError> {
    new_team.validate()?;
    ensure_name_free(store, &new_team.name, None).await?;

    let team = Team::new(
        uuid::Uuid::new_v4().to_string(),
        new_team.name,
        new_team.short_name,
    );
    save(store, &team).await?;
    info!("Created team {} ({})", team.name, team.id);
    Ok(team)
}

/// Only the name and short name are editable; statistics belong to the
/// standings recalculation.
pub async fn update_team_service(
    store: &dyn DocumentStore,
    id: &str,
    changes: UpdateTeamSchema,
) -> Result<Team, ServiceError> {
    changes.validate()?;
    let mut team = get_team_service(store, id).await?;

    if let Some(name) = changes.name {
        if name != team.name {
            ensure_name_free(store, &name, Some(id)).await?;
            warn!(
                "Team {} renamed from {} to {}; fixtures naming {} no longer count towards its standings",
                id, team.name, name, team.name
            );
            team.name = name;
        }
    }
    if let Some(short_name) = changes.short_name {
        team.short_name = short_name;
    }

    save(store, &team).await?;
    Ok(team)
}

pub async fn delete_team_service(store: &dyn DocumentStore, id: &str) -> Result<(), ServiceError> {
    if remove::<Team>(store, id).await? {
        info!("Deleted team {}", id);
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("Team {}", id)))
    }
}
