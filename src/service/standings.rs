use chrono::Utc;
use futures::future::join_all;
use futures::try_join;
use log::{error, info};

use crate::model::fixture::Fixture;
use crate::model::response::RecalculationResponse;
use crate::model::team::Team;
use crate::repository::store::{fetch_all, save, DocumentStore};
use crate::service::error::ServiceError;
use crate::standings::aggregator::{self, Recalculation};
use crate::standings::ranker::{self, Standing};
use crate::stats::summary::{summarize, TournamentSummary};

pub async fn standings_service(store: &dyn DocumentStore) -> Result<Vec<Standing>, ServiceError> {
    let teams = fetch_all::<Team>(store).await?;
    Ok(ranker::standings(&teams))
}

pub async fn summary_service(store: &dyn DocumentStore) -> Result<TournamentSummary, ServiceError> {
    let (fixtures, teams) = try_join!(fetch_all::<Fixture>(store), fetch_all::<Team>(store))?;
    Ok(summarize(&fixtures, &teams))
}

/// Rebuild every team's statistics from the stored fixtures and write each
/// team back.
///
/// Team writes are issued concurrently and independently. If any of them
/// fails the call reports which teams were not saved; the writes that did
/// succeed stay in place, and running the recalculation again repairs the
/// table.
pub async fn recalculate_standings_service(
    store: &dyn DocumentStore,
) -> Result<RecalculationResponse, ServiceError> {
    let (teams, fixtures) = try_join!(fetch_all::<Team>(store), fetch_all::<Fixture>(store))?;

    let Recalculation { teams, skipped } = aggregator::recalculate(&teams, &fixtures);

    let writes = teams.iter().map(|team| async move {
        save(store, team)
            .await
            .map_err(|err| (team.id.clone(), err))
    });
    let failed: Vec<String> = join_all(writes)
        .await
        .into_iter()
        .filter_map(|outcome| outcome.err())
        .map(|(id, err)| {
            error!(
                "Failed to save recalculated standings for team {} on the {} store. The error: {}",
                id,
                store.backend_type(),
                err
            );
            id
        })
        .collect();

    if !failed.is_empty() {
        return Err(ServiceError::PartialRecalculation {
            failed,
            total: teams.len(),
            skipped,
        });
    }

    info!(
        "Recalculated standings for {} teams from {} fixtures ({} skipped)",
        teams.len(),
        fixtures.len(),
        skipped.len()
    );

    Ok(RecalculationResponse {
        recalculated: teams.len(),
        skipped_fixtures: skipped,
        recalculated_at: Utc::now(),
        standings: ranker::standings(&teams),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture::FixtureStatus;
    use crate::repository::memory::MemoryStore;
    use crate::repository::store::fetch_one;
    use crate::repository::testing::FlakyStore;

    fn finished(id: &str, home: &str, home_score: u32, away: &str, away_score: u32) -> Fixture {
        Fixture {
            id: id.to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: Some(home_score),
            away_score: Some(away_score),
            matchday: 1,
            status: FixtureStatus::Finished,
            ..Default::default()
        }
    }

    async fn seed(store: &dyn DocumentStore) {
        for team in [
            Team::new("t-home", "Home", "HOM"),
            Team::new("t-away", "Away", "AWY"),
            Team::new("t-idle", "Idle", "IDL"),
        ] {
            save(store, &team).await.unwrap();
        }
        for fixture in [
            finished("f1", "Home", 3, "Away", 1),
            finished("f2", "Away", 1, "Nobody", 0),
        ] {
            save(store, &fixture).await.unwrap();
        }
    }

    #[tokio::test]
    async fn persists_every_team() {
        let store = MemoryStore::new();
        seed(&store).await;

        let report = recalculate_standings_service(&store).await.unwrap();
        assert_eq!(report.recalculated, 3);
        assert_eq!(report.skipped_fixtures.len(), 1);
        assert_eq!(report.skipped_fixtures[0].fixture_id, "f2");
        assert_eq!(report.standings[0].team.name, "Home");

        let home: Team = fetch_one(&store, "t-home").await.unwrap().unwrap();
        assert_eq!((home.played, home.won, home.points, home.goal_difference), (1, 1, 3, 2));
        let away: Team = fetch_one(&store, "t-away").await.unwrap().unwrap();
        assert_eq!((away.played, away.lost, away.points, away.goal_difference), (1, 1, 0, -2));
    }

    #[tokio::test]
    async fn rerun_is_stable() {
        let store = MemoryStore::new();
        seed(&store).await;

        recalculate_standings_service(&store).await.unwrap();
        let first = fetch_all::<Team>(&store).await.unwrap();
        recalculate_standings_service(&store).await.unwrap();
        assert_eq!(fetch_all::<Team>(&store).await.unwrap(), first);
    }

    #[tokio::test]
    async fn failed_write_is_reported_and_others_kept() {
        let store = FlakyStore::failing_teams(["t-away"]);
        seed(&store.inner).await;

        let err = recalculate_standings_service(&store).await.unwrap_err();
        match err {
            ServiceError::PartialRecalculation { failed, total, skipped } => {
                assert_eq!(failed, vec!["t-away".to_string()]);
                assert_eq!(total, 3);
                assert_eq!(skipped.len(), 1);
                assert_eq!(skipped[0].fixture_id, "f2");
                assert_eq!(skipped[0].unknown_teams, vec!["Nobody".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let home: Team = fetch_one(&store, "t-home").await.unwrap().unwrap();
        assert_eq!(home.points, 3);
        let away: Team = fetch_one(&store, "t-away").await.unwrap().unwrap();
        assert_eq!(away.played, 0);
    }

    #[tokio::test]
    async fn summary_and_standings_read_current_state() {
        let store = MemoryStore::new();
        seed(&store).await;

        let before = standings_service(&store).await.unwrap();
        assert!(before.iter().all(|s| s.team.points == 0));
        assert_eq!(before[0].team.name, "Away");

        recalculate_standings_service(&store).await.unwrap();
        let summary = summary_service(&store).await.unwrap();
        assert_eq!(summary.total_matches, 2);
        assert_eq!(summary.matches_played, 2);
        assert_eq!(summary.total_goals, 5);
        assert_eq!(summary.leader.as_deref(), Some("Home"));
    }
}
