use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Which total a stroke leaderboard is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    Gross,
    #[default]
    Net,
}

/// Computed outcome for one player. Built fresh by every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualResult {
    pub player_id: PlayerId,
    pub display_name: String,
    pub gross_score: u32,
    pub net_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stableford_points: Option<u32>,
    pub holes_won: u32,
    pub holes_lost: u32,
    pub holes_halved: u32,
    pub skins_won: u32,
    /// Match-play margin such as `3&2`, `1UP` or `AS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_result: Option<String>,
}

impl IndividualResult {
    /// A result carrying only stroke totals.
    pub fn with_totals(
        player_id: impl Into<PlayerId>,
        display_name: impl Into<String>,
        gross_score: u32,
        net_score: i32,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            gross_score,
            net_score,
            stableford_points: None,
            holes_won: 0,
            holes_lost: 0,
            holes_halved: 0,
            skins_won: 0,
            match_result: None,
        }
    }

    pub fn score(&self, basis: ScoreBasis) -> i64 {
        match basis {
            ScoreBasis::Gross => i64::from(self.gross_score),
            ScoreBasis::Net => i64::from(self.net_score),
        }
    }
}

/// Computed outcome for a team, with the members' own results alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub team_id: String,
    pub team_name: String,
    pub gross_score: u32,
    pub net_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stableford_points: Option<u32>,
    pub holes_won: u32,
    pub holes_lost: u32,
    pub holes_halved: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_result: Option<String>,
    pub player_results: Vec<IndividualResult>,
}

impl TeamResult {
    pub fn score(&self, basis: ScoreBasis) -> i64 {
        match basis {
            ScoreBasis::Gross => i64::from(self.gross_score),
            ScoreBasis::Net => i64::from(self.net_score),
        }
    }
}
