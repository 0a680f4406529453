use anyhow::{Context, Result, bail};
use serde::Deserialize;

use fairway_core::player::{PlayerRoundScore, TeamRoundScore};
use fairway_scoring::handicap::apply_handicap;
use fairway_scoring::round::RoundEntries;

/// JSON round document as exported from the round store.
///
/// Exactly one of `players` or `teams` should be filled. When
/// `strokeIndexes` is present, every card with a `handicapIndex` has its
/// handicap strokes recomputed from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundFile {
    pub format: String,
    #[serde(default)]
    pub stroke_indexes: Option<Vec<u8>>,
    #[serde(default)]
    pub players: Vec<PlayerRoundScore>,
    #[serde(default)]
    pub teams: Vec<TeamRoundScore>,
}

impl RoundFile {
    pub fn into_entries(self, allowance_percent: u8) -> Result<RoundEntries> {
        let indexes = self.stroke_indexes.as_deref();
        let adjust = |card: PlayerRoundScore| -> Result<PlayerRoundScore> {
            match indexes {
                Some(indexes) if card.handicap_index.is_some() => {
                    apply_handicap(&card, indexes, allowance_percent)
                        .with_context(|| format!("applying handicap for {}", card.player_id))
                },
                _ => Ok(card),
            }
        };

        match (self.players.is_empty(), self.teams.is_empty()) {
            (false, true) => Ok(RoundEntries::Players(
                self.players
                    .into_iter()
                    .map(adjust)
                    .collect::<Result<_>>()?,
            )),
            (true, false) => {
                let teams = self
                    .teams
                    .into_iter()
                    .map(|team| -> Result<TeamRoundScore> {
                        let players = team
                            .players
                            .into_iter()
                            .map(adjust)
                            .collect::<Result<_>>()?;
                        Ok(TeamRoundScore { players, ..team })
                    })
                    .collect::<Result<_>>()?;
                Ok(RoundEntries::Teams(teams))
            },
            (true, true) => bail!("round file has no players or teams"),
            (false, false) => bail!("round file has both players and teams"),
        }
    }
}
