//! Rebuilds team statistics from fixture results.

use std::collections::HashMap;

use log::warn;
use serde::Serialize;

use crate::model::fixture::Fixture;
use crate::model::team::Team;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

/// A finished fixture that could not be matched to both of its teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFixture {
    pub fixture_id: String,
    pub home_team: String,
    pub away_team: String,
    pub unknown_teams: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Recalculation {
    /// One record per input team, in input order.
    pub teams: Vec<Team>,
    pub skipped: Vec<SkippedFixture>,
}

/// Recompute every team's statistics from the finished fixtures.
///
/// Counters start from zero on each call, so the result depends only on the
/// set of finished fixtures: running it again on its own output, or on a
/// reordered fixture list, gives the same table. Teams are matched by exact
/// name. When two teams share a name the first one receives the results.
pub fn recalculate(teams: &[Team], fixtures: &[Fixture]) -> Recalculation {
    let mut working: Vec<Team> = teams
        .iter()
        .cloned()
        .map(|mut team| {
            team.reset_stats();
            team
        })
        .collect();

    let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (idx, team) in teams.iter().enumerate() {
        by_name.entry(team.name.as_str()).or_insert(idx);
    }

    let mut skipped = Vec::new();
    for fixture in fixtures.iter().filter(|f| f.is_finished()) {
        let home = by_name.get(fixture.home_team.as_str()).copied();
        let away = by_name.get(fixture.away_team.as_str()).copied();

        match (home, away) {
            (Some(home), Some(away)) => {
                let (home_goals, away_goals) = fixture.final_score();
                record_result(&mut working, home, away, home_goals, away_goals);
            }
            _ => {
                let unknown_teams: Vec<String> = [
                    (home, &fixture.home_team),
                    (away, &fixture.away_team),
                ]
                .into_iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, name)| name.clone())
                .collect();
                warn!(
                    "Skipping finished fixture {} ({} vs {}): unknown team(s) {:?}",
                    fixture.id, fixture.home_team, fixture.away_team, unknown_teams
                );
                skipped.push(SkippedFixture {
                    fixture_id: fixture.id.clone(),
                    home_team: fixture.home_team.clone(),
                    away_team: fixture.away_team.clone(),
                    unknown_teams,
                });
            }
        }
    }

    for team in &mut working {
        team.goal_difference = team.expected_goal_difference();
        debug_assert!(team.is_consistent(), "inconsistent record for {}", team.name);
    }

    Recalculation {
        teams: working,
        skipped,
    }
}

fn record_result(teams: &mut [Team], home: usize, away: usize, home_goals: u32, away_goals: u32) {
    teams[home].played += 1;
    teams[away].played += 1;

    // Saturate rather than wrap; goal totals stop at u32::MAX.
    teams[home].goals_for = teams[home].goals_for.saturating_add(home_goals);
    teams[home].goals_against = teams[home].goals_against.saturating_add(away_goals);
    teams[away].goals_for = teams[away].goals_for.saturating_add(away_goals);
    teams[away].goals_against = teams[away].goals_against.saturating_add(home_goals);

    if home_goals > away_goals {
        teams[home].won += 1;
        teams[home].points += POINTS_FOR_WIN;
        teams[away].lost += 1;
    } else if away_goals > home_goals {
        teams[away].won += 1;
        teams[away].points += POINTS_FOR_WIN;
        teams[home].lost += 1;
    } else {
        teams[home].drawn += 1;
        teams[home].points += POINTS_FOR_DRAW;
        teams[away].drawn += 1;
        teams[away].points += POINTS_FOR_DRAW;
    }
}
