use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::fixture::Fixture;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matchday {
    pub matchday: u32,
    pub fixtures: Vec<Fixture>,
}

/// Group fixtures into rounds, earliest matchday first. Fixtures keep their
/// relative order inside a round.
pub fn group_by_matchday(fixtures: &[Fixture]) -> Vec<Matchday> {
    let mut rounds: BTreeMap<u32, Vec<Fixture>> = BTreeMap::new();
    for fixture in fixtures {
        rounds.entry(fixture.matchday).or_default().push(fixture.clone());
    }
    rounds
        .into_iter()
        .map(|(matchday, fixtures)| Matchday { matchday, fixtures })
        .collect()
}
