use serde::Serialize;

use fairway_core::error::ScoringError;
use fairway_core::player::{PlayerId, PlayerRoundScore};
use fairway_core::results::IndividualResult;

use crate::aligned_hole_count;
use crate::config::HoleCountPolicy;
use crate::stroke_play::score_stroke_play;

/// How one hole's skin was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinHole {
    pub hole_number: u8,
    /// Outright winner, or `None` when the low score was tied.
    pub winner: Option<PlayerId>,
    /// Skins paid out on this hole, including any carried in.
    pub skins_awarded: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinsOutcome {
    pub results: Vec<IndividualResult>,
    pub holes: Vec<SkinHole>,
    /// Skins still carried after the last hole. These are forfeited.
    pub unclaimed_skins: u32,
}

/// Play a skins game on net scores.
///
/// An outright low score wins the hole's skin plus everything carried in.
/// A tie for low carries the skin forward.
pub fn score_skins(
    players: &[PlayerRoundScore],
    policy: HoleCountPolicy,
) -> Result<SkinsOutcome, ScoringError> {
    let cards: Vec<&PlayerRoundScore> = players.iter().collect();
    let holes = aligned_hole_count(&cards, policy)?;

    let mut skins_won = vec![0u32; players.len()];
    let mut settled = Vec::with_capacity(holes);
    let mut carry = 0u32;

    for i in 0..holes {
        let nets: Vec<i32> = players.iter().map(|p| p.holes[i].net_strokes()).collect();
        let Some(&low) = nets.iter().min() else {
            break;
        };
        let mut at_low = nets.iter().enumerate().filter(|&(_, &n)| n == low);
        let hole_number = players[0].holes[i].hole_number;

        match (at_low.next(), at_low.next()) {
            (Some((winner, _)), None) => {
                let value = carry + 1;
                skins_won[winner] += value;
                carry = 0;
                settled.push(SkinHole {
                    hole_number,
                    winner: Some(players[winner].player_id.clone()),
                    skins_awarded: value,
                });
            },
            _ => {
                carry += 1;
                settled.push(SkinHole {
                    hole_number,
                    winner: None,
                    skins_awarded: 0,
                });
            },
        }
    }

    if carry > 0 {
        tracing::debug!(unclaimed = carry, "Skins carried past the final hole are forfeited");
    }

    let results = players
        .iter()
        .zip(skins_won)
        .map(|(p, skins)| IndividualResult {
            skins_won: skins,
            ..score_stroke_play(p)
        })
        .collect();

    Ok(SkinsOutcome {
        results,
        holes: settled,
        unclaimed_skins: carry,
    })
}
