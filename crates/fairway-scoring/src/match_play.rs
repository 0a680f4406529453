use std::cmp::Ordering;

use serde::Serialize;

use fairway_core::error::ScoringError;
use fairway_core::player::PlayerRoundScore;
use fairway_core::results::IndividualResult;

use crate::aligned_hole_count;
use crate::config::HoleCountPolicy;
use crate::stroke_play::score_stroke_play;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    A,
    B,
    Halved,
}

/// Result of a head-to-head match. Both sides carry the same margin string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayOutcome {
    pub result_a: IndividualResult,
    pub result_b: IndividualResult,
    pub winner: MatchWinner,
    pub holes_played: usize,
    /// True when the lead passed the holes remaining before the last hole.
    pub finished_early: bool,
}

/// Running state of a match from side A's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MatchTally {
    pub a_up: i32,
    pub won: u32,
    pub lost: u32,
    pub halved: u32,
    pub holes_played: usize,
}

impl MatchTally {
    pub fn winner(&self) -> MatchWinner {
        match self.a_up.cmp(&0) {
            Ordering::Greater => MatchWinner::A,
            Ordering::Less => MatchWinner::B,
            Ordering::Equal => MatchWinner::Halved,
        }
    }
}

/// Play `a` against `b` hole by hole on net score.
///
/// Stops as soon as the lead exceeds the holes left to play.
pub(crate) fn play_match(a: &PlayerRoundScore, b: &PlayerRoundScore, holes: usize) -> MatchTally {
    let mut tally = MatchTally::default();
    for (ha, hb) in a.holes.iter().zip(&b.holes).take(holes) {
        match ha.net_strokes().cmp(&hb.net_strokes()) {
            Ordering::Less => {
                tally.a_up += 1;
                tally.won += 1;
            },
            Ordering::Greater => {
                tally.a_up -= 1;
                tally.lost += 1;
            },
            Ordering::Equal => tally.halved += 1,
        }
        tally.holes_played += 1;

        let remaining = holes - tally.holes_played;
        if (tally.a_up.unsigned_abs() as usize) > remaining {
            break;
        }
    }
    tally
}

/// Format a final margin: `AS` when level, `3&2` when decided early,
/// `1UP` when decided on the last hole.
pub fn match_margin(lead: i32, holes_remaining: usize) -> String {
    let lead = lead.unsigned_abs();
    if lead == 0 {
        "AS".to_string()
    } else if holes_remaining == 0 {
        format!("{lead}UP")
    } else {
        format!("{lead}&{holes_remaining}")
    }
}

pub fn score_match_play(
    a: &PlayerRoundScore,
    b: &PlayerRoundScore,
    policy: HoleCountPolicy,
) -> Result<MatchPlayOutcome, ScoringError> {
    let holes = aligned_hole_count(&[a, b], policy)?;
    let tally = play_match(a, b, holes);
    let remaining = holes - tally.holes_played;
    let margin = match_margin(tally.a_up, remaining);

    if remaining > 0 {
        tracing::debug!(
            player_a = %a.player_id,
            player_b = %b.player_id,
            margin = %margin,
            "Match decided early"
        );
    }

    let result_a = IndividualResult {
        holes_won: tally.won,
        holes_lost: tally.lost,
        holes_halved: tally.halved,
        match_result: Some(margin.clone()),
        ..score_stroke_play(a)
    };
    let result_b = IndividualResult {
        holes_won: tally.lost,
        holes_lost: tally.won,
        holes_halved: tally.halved,
        match_result: Some(margin),
        ..score_stroke_play(b)
    };

    Ok(MatchPlayOutcome {
        result_a,
        result_b,
        winner: tally.winner(),
        holes_played: tally.holes_played,
        finished_early: remaining > 0,
    })
}
