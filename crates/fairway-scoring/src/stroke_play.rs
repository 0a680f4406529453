use fairway_core::player::PlayerRoundScore;
use fairway_core::results::IndividualResult;

/// Gross is the sum of strokes; net subtracts each hole's handicap strokes.
pub fn score_stroke_play(player: &PlayerRoundScore) -> IndividualResult {
    IndividualResult::with_totals(
        player.player_id.clone(),
        player.display_name.clone(),
        player.gross_total(),
        player.net_total(),
    )
}
