use serde::Serialize;

use crate::model::fixture::Fixture;
use crate::model::team::Team;
use crate::standings::ranker;

/// Headline numbers for the tournament front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub total_matches: usize,
    pub matches_played: usize,
    pub total_goals: u64,
    pub teams: usize,
    pub leader: Option<String>,
}

pub fn summarize(fixtures: &[Fixture], teams: &[Team]) -> TournamentSummary {
    let (matches_played, total_goals) = fixtures
        .iter()
        .filter(|f| f.is_finished())
        .fold((0, 0u64), |(played, goals), fixture| {
            let (home, away) = fixture.final_score();
            (played + 1, goals + u64::from(home) + u64::from(away))
        });

    TournamentSummary {
        total_matches: fixtures.len(),
        matches_played,
        total_goals,
        teams: teams.len(),
        leader: teams
            .iter()
            .min_by(|a, b| ranker::compare(a, b))
            .map(|team| team.name.clone()),
    }
}
