use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::store::{Collection, Document};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// Positions credited with clean sheets.
    pub fn keeps_clean_sheets(&self) -> bool {
        matches!(self, Position::Goalkeeper | Position::Defender)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_sheets: Option<u32>,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    pub position: Position,
}

impl Player {
    pub fn is_booked(&self) -> bool {
        self.yellow_cards > 0 || self.red_cards > 0
    }
}

impl Document for Player {
    const COLLECTION: Collection = Collection::Players;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSchema {
    #[validate(length(min = 1, max = 80, message = "Player name must be between 1 and 80 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Team is required"))]
    pub team: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    pub clean_sheets: Option<u32>,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    pub position: Position,
}

impl PlayerSchema {
    pub fn into_player(self, id: String) -> Player {
        Player {
            id,
            name: self.name,
            team: self.team,
            goals: self.goals,
            assists: self.assists,
            clean_sheets: self.clean_sheets,
            yellow_cards: self.yellow_cards,
            red_cards: self.red_cards,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_uses_short_codes() {
        let player: Player = serde_json::from_str(
            r#"{"id":"p1","name":"Keeper","team":"Home","position":"GK","yellowCards":1}"#,
        )
        .unwrap();
        assert_eq!(player.position, Position::Goalkeeper);
        assert!(player.position.keeps_clean_sheets());
        assert!(player.is_booked());
        assert_eq!(
            serde_json::to_value(Position::Forward).unwrap(),
            serde_json::json!("FWD")
        );
    }
}
