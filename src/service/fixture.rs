use log::info;
use validator::Validate;

use crate::model::fixture::{Fixture, FixtureSchema};
use crate::repository::store::{fetch_all, fetch_one, remove, save, DocumentStore};
use crate::service::error::ServiceError;
use crate::stats::schedule::{group_by_matchday, Matchday};

/// All fixtures ordered by matchday.
pub async fn list_fixtures_service(store: &dyn DocumentStore) -> Result<Vec<Fixture>, ServiceError> {
    let mut fixtures: Vec<Fixture> = fetch_all(store).await?;
    fixtures.sort_by_key(|f| f.matchday);
    Ok(fixtures)
}

pub async fn schedule_service(store: &dyn DocumentStore) -> Result<Vec<Matchday>, ServiceError> {
    let fixtures: Vec<Fixture> = fetch_all(store).await?;
    Ok(group_by_matchday(&fixtures))
}

pub async fn get_fixture_service(store: &dyn DocumentStore, id: &str) -> Result<Fixture, ServiceError> {
    fetch_one(store, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Fixture {}", id)))
}

// Fixture edits never touch the standings; those change only when a
// recalculation is requested.
pub async fn create_fixture_service(
    store: &dyn DocumentStore,
    schema: FixtureSchema,
) -> Result<Fixture, ServiceError> {
    schema.validate()?;
    let fixture = schema.into_fixture(uuid::Uuid::new_v4().to_string());
    save(store, &fixture).await?;
    info!(
        "Created fixture {}: {} vs {} on matchday {}",
        fixture.id, fixture.home_team, fixture.away_team, fixture.matchday
    );
    Ok(fixture)
}

pub async fn update_fixture_service(
    store: &dyn DocumentStore,
    id: &str,
    schema: FixtureSchema,
) -> Result<Fixture, ServiceError> {
    schema.validate()?;
    let existing = get_fixture_service(store, id).await?;
    let fixture = schema.into_fixture(existing.id);
    save(store, &fixture).await?;
    Ok(fixture)
}

pub async fn delete_fixture_service(store: &dyn DocumentStore, id: &str) -> Result<(), ServiceError> {
    if remove::<Fixture>(store, id).await? {
        info!("Deleted fixture {}", id);
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("Fixture {}", id)))
    }
}
