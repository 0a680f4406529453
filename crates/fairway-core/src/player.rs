use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Unique identifier for a player (document id in the round store).
pub type PlayerId = String;

/// One player's result on one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub hole_number: u8,
    pub par: u8,
    pub strokes: u8,
    /// Strokes received on this hole from handicap distribution.
    #[serde(default)]
    pub handicap_strokes: u8,
}

impl HoleScore {
    pub const fn new(hole_number: u8, par: u8, strokes: u8) -> Self {
        Self {
            hole_number,
            par,
            strokes,
            handicap_strokes: 0,
        }
    }

    pub const fn with_handicap_strokes(mut self, handicap_strokes: u8) -> Self {
        self.handicap_strokes = handicap_strokes;
        self
    }

    /// Strokes after handicap. May drop to zero or below on a generous allocation.
    pub fn net_strokes(&self) -> i32 {
        i32::from(self.strokes) - i32::from(self.handicap_strokes)
    }

    /// Net strokes relative to par (negative = under par).
    pub fn net_to_par(&self) -> i32 {
        self.net_strokes() - i32::from(self.par)
    }
}

/// A player's full card for a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundScore {
    pub player_id: PlayerId,
    pub display_name: String,
    #[serde(default)]
    pub handicap_index: Option<f32>,
    pub holes: Vec<HoleScore>,
}

impl PlayerRoundScore {
    pub fn new(
        player_id: impl Into<PlayerId>,
        display_name: impl Into<String>,
        holes: Vec<HoleScore>,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            handicap_index: None,
            holes,
        }
    }

    pub fn gross_total(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.strokes)).sum()
    }

    pub fn net_total(&self) -> i32 {
        self.holes.iter().map(HoleScore::net_strokes).sum()
    }

    pub fn total_handicap_strokes(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.handicap_strokes)).sum()
    }

    /// Check the card is well formed: every hole played in at least one
    /// stroke and no hole recorded twice.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let mut seen = HashSet::with_capacity(self.holes.len());
        for hole in &self.holes {
            if hole.strokes == 0 {
                return Err(ScoringError::InvalidStrokes {
                    player_id: self.player_id.clone(),
                    hole_number: hole.hole_number,
                });
            }
            if !seen.insert(hole.hole_number) {
                return Err(ScoringError::DuplicateHole {
                    player_id: self.player_id.clone(),
                    hole_number: hole.hole_number,
                });
            }
        }
        Ok(())
    }
}

/// A team's cards. Scramble-style formats carry a single combined card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoundScore {
    pub team_id: String,
    pub team_name: String,
    pub players: Vec<PlayerRoundScore>,
}

impl TeamRoundScore {
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.players.iter().try_for_each(PlayerRoundScore::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(strokes: &[u8]) -> PlayerRoundScore {
        let holes = strokes
            .iter()
            .enumerate()
            .map(|(i, &s)| HoleScore::new(i as u8 + 1, 4, s))
            .collect();
        PlayerRoundScore::new("p1", "Player One", holes)
    }

    #[test]
    fn net_strokes_subtracts_allocation() {
        let hole = HoleScore::new(1, 4, 5).with_handicap_strokes(1);
        assert_eq!(hole.net_strokes(), 4);
        assert_eq!(hole.net_to_par(), 0);
    }

    #[test]
    fn net_strokes_can_go_below_one() {
        let hole = HoleScore::new(1, 3, 1).with_handicap_strokes(2);
        assert_eq!(hole.net_strokes(), -1);
    }

    #[test]
    fn totals() {
        let mut c = card(&[4, 5, 3]);
        c.holes[1].handicap_strokes = 1;
        assert_eq!(c.gross_total(), 12);
        assert_eq!(c.net_total(), 11);
        assert_eq!(c.total_handicap_strokes(), 1);
    }

    #[test]
    fn validate_rejects_zero_strokes() {
        let c = card(&[4, 0, 3]);
        assert_eq!(
            c.validate(),
            Err(ScoringError::InvalidStrokes {
                player_id: "p1".to_string(),
                hole_number: 2,
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_hole() {
        let mut c = card(&[4, 4]);
        c.holes[1].hole_number = 1;
        assert!(matches!(
            c.validate(),
            Err(ScoringError::DuplicateHole { hole_number: 1, .. })
        ));
    }

    #[test]
    fn deserializes_camel_case_with_missing_handicap_strokes() {
        let json = r#"{
            "playerId": "abc",
            "displayName": "Sam",
            "holes": [{ "holeNumber": 1, "par": 4, "strokes": 5 }]
        }"#;
        let c: PlayerRoundScore = serde_json::from_str(json).unwrap();
        assert_eq!(c.player_id, "abc");
        assert_eq!(c.handicap_index, None);
        assert_eq!(c.holes[0].handicap_strokes, 0);
    }
}
