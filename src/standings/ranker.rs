//! Ordering teams into the league table.

use std::cmp::Ordering;

use serde::Serialize;

use crate::model::team::Team;

// What a table is sorted by, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankCriteria {
    Points,
    GoalDifference,
    GoalsScored,
    // Not part of the historical ordering, which left full ties in arrival
    // order. Kept last so the table is reproducible.
    Name,
}

pub const TABLE_ORDER: [RankCriteria; 4] = [
    RankCriteria::Points,
    RankCriteria::GoalDifference,
    RankCriteria::GoalsScored,
    RankCriteria::Name,
];

impl RankCriteria {
    fn compare(&self, a: &Team, b: &Team) -> Ordering {
        match self {
            RankCriteria::Points => b.points.cmp(&a.points),
            RankCriteria::GoalDifference => b.goal_difference.cmp(&a.goal_difference),
            RankCriteria::GoalsScored => b.goals_for.cmp(&a.goals_for),
            RankCriteria::Name => a.name.cmp(&b.name),
        }
    }
}

/// Compare two teams, best first.
pub fn compare(a: &Team, b: &Team) -> Ordering {
    TABLE_ORDER
        .iter()
        .map(|criteria| criteria.compare(a, b))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// The teams in table order. The input is left untouched.
pub fn rank(teams: &[Team]) -> Vec<Team> {
    let mut ranked = teams.to_vec();
    ranked.sort_by(compare);
    ranked
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-indexed place in the table.
    pub position: usize,
    pub leader: bool,
    #[serde(flatten)]
    pub team: Team,
}

pub fn standings(teams: &[Team]) -> Vec<Standing> {
    rank(teams)
        .into_iter()
        .enumerate()
        .map(|(idx, team)| Standing {
            position: idx + 1,
            leader: idx == 0,
            team,
        })
        .collect()
}
