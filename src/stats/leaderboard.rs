use serde::Serialize;

use crate::model::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLeaderboards {
    pub top_scorers: Vec<Player>,
    pub top_assists: Vec<Player>,
    pub clean_sheets: Vec<Player>,
    pub disciplinary: Vec<Player>,
}

pub fn leaderboards(players: &[Player], limit: usize) -> PlayerLeaderboards {
    PlayerLeaderboards {
        top_scorers: top_by(players.iter(), limit, |p| p.goals),
        top_assists: top_by(players.iter(), limit, |p| p.assists),
        clean_sheets: top_by(
            players.iter().filter(|p| p.position.keeps_clean_sheets()),
            limit,
            |p| p.clean_sheets.unwrap_or(0),
        ),
        disciplinary: players.iter().filter(|p| p.is_booked()).cloned().collect(),
    }
}

// Stable, so equal values keep the order the store returned them in.
fn top_by<'a, I, F>(players: I, limit: usize, key: F) -> Vec<Player>
where
    I: Iterator<Item = &'a Player>,
    F: Fn(&Player) -> u32,
{
    let mut sorted: Vec<Player> = players.cloned().collect();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::Position;

    fn player(name: &str, position: Position, goals: u32, assists: u32) -> Player {
        Player {
            id: name.to_lowercase(),
            name: name.to_string(),
            team: "Home".to_string(),
            goals,
            assists,
            clean_sheets: None,
            yellow_cards: 0,
            red_cards: 0,
            position,
        }
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn sorts_and_truncates() {
        let players = vec![
            player("Ada", Position::Forward, 2, 5),
            player("Bo", Position::Midfielder, 7, 1),
            player("Cy", Position::Forward, 4, 3),
        ];
        let boards = leaderboards(&players, 2);
        assert_eq!(names(&boards.top_scorers), vec!["Bo", "Cy"]);
        assert_eq!(names(&boards.top_assists), vec!["Ada", "Cy"]);
    }

    #[test]
    fn clean_sheets_only_for_keepers_and_defenders() {
        let mut keeper = player("Keeper", Position::Goalkeeper, 0, 0);
        keeper.clean_sheets = Some(2);
        let defender = player("Back", Position::Defender, 0, 0);
        let mut striker = player("Striker", Position::Forward, 9, 0);
        striker.clean_sheets = Some(5);

        let boards = leaderboards(&[defender, striker, keeper], 10);
        assert_eq!(names(&boards.clean_sheets), vec!["Keeper", "Back"]);
    }

    #[test]
    fn disciplinary_lists_booked_players() {
        let mut booked = player("Hothead", Position::Defender, 0, 0);
        booked.red_cards = 1;
        let clean = player("Saint", Position::Midfielder, 0, 0);

        let boards = leaderboards(&[clean, booked], 10);
        assert_eq!(names(&boards.disciplinary), vec!["Hothead"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let players = vec![
            player("First", Position::Forward, 3, 0),
            player("Second", Position::Forward, 3, 0),
        ];
        assert_eq!(names(&leaderboards(&players, 10).top_scorers), vec!["First", "Second"]);
    }
}
