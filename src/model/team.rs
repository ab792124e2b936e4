use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::store::{Collection, Document};

/// A team document together with its league statistics.
///
/// Fixtures refer to teams by `name`, not by `id`. Renaming a team therefore
/// detaches every fixture that still carries the old name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub drawn: u32,
    #[serde(default)]
    pub lost: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub points: u32,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            short_name: short_name.into(),
            ..Default::default()
        }
    }

    /// Zero every statistics counter, keeping identity fields.
    pub fn reset_stats(&mut self) {
        *self = Team {
            id: std::mem::take(&mut self.id),
            name: std::mem::take(&mut self.name),
            short_name: std::mem::take(&mut self.short_name),
            ..Default::default()
        };
    }

    /// `goals_for - goals_against`, clamped to the `i32` range.
    pub fn expected_goal_difference(&self) -> i32 {
        (i64::from(self.goals_for) - i64::from(self.goals_against))
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// True when the derived columns agree with the counters.
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.drawn + self.lost
            && self.points == 3 * self.won + self.drawn
            && self.goal_difference == self.expected_goal_difference()
    }
}

impl Document for Team {
    const COLLECTION: Collection = Collection::Teams;

    fn id(&self) -> &str {
        &self.id
    }
}

lazy_static! {
    static ref SHORT_NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9]{2,5}$").unwrap();
}

#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamSchema {
    #[validate(length(min = 1, max = 60, message = "Team name must be between 1 and 60 characters"))]
    pub name: String,
    #[validate(regex(
        path = "SHORT_NAME_RE",
        message = "Short name must be 2 to 5 letters or digits"
    ))]
    pub short_name: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamSchema {
    #[validate(length(min = 1, max = 60, message = "Team name must be between 1 and 60 characters"))]
    pub name: Option<String>,
    #[validate(regex(
        path = "SHORT_NAME_RE",
        message = "Short name must be 2 to 5 letters or digits"
    ))]
    pub short_name: Option<String>,
}
