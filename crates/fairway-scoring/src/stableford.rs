use fairway_core::player::{HoleScore, PlayerRoundScore};
use fairway_core::results::IndividualResult;

use crate::stroke_play::score_stroke_play;

/// Most points a single hole can earn (albatross or better).
pub const MAX_HOLE_POINTS: u8 = 5;

/// Stableford points for a hole score against par.
///
/// Albatross or better 5, eagle 4, birdie 3, par 2, bogey 1, anything worse 0.
pub fn stableford_points(strokes: i32, par: u8) -> u8 {
    let to_par = strokes.saturating_sub(i32::from(par));
    2i32.saturating_sub(to_par).clamp(0, i32::from(MAX_HOLE_POINTS)) as u8
}

/// Points for one hole, optionally after handicap strokes.
pub fn hole_points(hole: &HoleScore, use_net: bool) -> u8 {
    let strokes = if use_net {
        hole.net_strokes()
    } else {
        i32::from(hole.strokes)
    };
    stableford_points(strokes, hole.par)
}

pub fn score_stableford(player: &PlayerRoundScore, use_net: bool) -> IndividualResult {
    let points = player
        .holes
        .iter()
        .map(|h| u32::from(hole_points(h, use_net)))
        .sum();
    IndividualResult {
        stableford_points: Some(points),
        ..score_stroke_play(player)
    }
}
