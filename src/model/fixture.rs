use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::repository::store::{Collection, Document};

/// Highest score a single side can be recorded with.
pub const MAX_SCORE: u32 = 99;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// A match between two teams, referenced by team name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub matchday: u32,
    #[serde(default)]
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn is_finished(&self) -> bool {
        self.status == FixtureStatus::Finished
    }

    /// Home and away goals, with a missing score counted as zero.
    pub fn final_score(&self) -> (u32, u32) {
        (self.home_score.unwrap_or(0), self.away_score.unwrap_or(0))
    }
}

impl Document for Fixture {
    const COLLECTION: Collection = Collection::Fixtures;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body accepted when creating or replacing a fixture.
#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_distinct_teams", skip_on_field_errors = false))]
pub struct FixtureSchema {
    #[validate(length(min = 1, message = "Home team is required"))]
    pub home_team: String,
    #[validate(length(min = 1, message = "Away team is required"))]
    pub away_team: String,
    #[validate(range(max = 99, message = "Score must be between 0 and 99"))]
    pub home_score: Option<u32>,
    #[validate(range(max = 99, message = "Score must be between 0 and 99"))]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[validate(range(min = 1, message = "Matchday must be a positive number"))]
    pub matchday: u32,
    #[serde(default)]
    pub status: FixtureStatus,
}

impl FixtureSchema {
    pub fn into_fixture(self, id: String) -> Fixture {
        Fixture {
            id,
            home_team: self.home_team,
            away_team: self.away_team,
            home_score: self.home_score,
            away_score: self.away_score,
            date: self.date,
            time: self.time,
            matchday: self.matchday,
            status: self.status,
        }
    }
}

fn validate_distinct_teams(schema: &FixtureSchema) -> Result<(), ValidationError> {
    if schema.home_team == schema.away_team {
        let mut err = ValidationError::new("distinct_teams");
        err.message = Some(Cow::from("A team cannot play against itself"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(home: &str, away: &str, matchday: u32) -> FixtureSchema {
        FixtureSchema {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: None,
            away_score: None,
            date: "2026-05-02".to_string(),
            time: "15:00".to_string(),
            matchday,
            status: FixtureStatus::Scheduled,
        }
    }

    #[test]
    fn parses_status_and_optional_scores() {
        let fixture: Fixture = serde_json::from_str(
            r#"{"id":"f1","homeTeam":"Home","awayTeam":"Away","homeScore":2,"matchday":1,"status":"finished"}"#,
        )
        .unwrap();
        assert!(fixture.is_finished());
        assert_eq!(fixture.home_score, Some(2));
        assert_eq!(fixture.away_score, None);
        assert_eq!(fixture.final_score(), (2, 0));
    }

    #[test]
    fn status_defaults_to_scheduled() {
        let fixture: Fixture =
            serde_json::from_str(r#"{"homeTeam":"Home","awayTeam":"Away","matchday":3}"#).unwrap();
        assert_eq!(fixture.status, FixtureStatus::Scheduled);
        assert!(!fixture.is_finished());
    }

    #[test]
    fn rejects_self_fixture_and_zero_matchday() {
        assert!(schema("Home", "Away", 1).validate().is_ok());

        let errors = schema("Home", "Home", 0).validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
        assert!(errors.field_errors().contains_key("matchday"));
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let mut fixture = schema("Home", "Away", 1);
        fixture.home_score = Some(MAX_SCORE);
        fixture.away_score = Some(0);
        assert!(fixture.validate().is_ok());

        fixture.home_score = Some(u32::MAX);
        fixture.away_score = Some(MAX_SCORE + 1);
        let errors = fixture.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("home_score"));
        assert!(fields.contains_key("away_score"));
    }
}
