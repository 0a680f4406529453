pub mod error;
pub mod format_registry;
pub mod player;
pub mod results;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::player::{HoleScore, PlayerRoundScore, TeamRoundScore};

    /// Build a card for player `id` from per-hole strokes. Holes are numbered
    /// from 1 and all carry the given par.
    pub fn card_from_strokes(id: &str, par: u8, strokes: &[u8]) -> PlayerRoundScore {
        let holes = strokes
            .iter()
            .enumerate()
            .map(|(i, &s)| HoleScore::new(i as u8 + 1, par, s))
            .collect();
        PlayerRoundScore::new(id, format!("Player {id}"), holes)
    }

    /// A card of `holes` holes, every one played in exactly par.
    pub fn par_card(id: &str, par: u8, holes: usize) -> PlayerRoundScore {
        card_from_strokes(id, par, &vec![par; holes])
    }

    /// Set per-hole handicap strokes on a card, in hole order.
    pub fn with_handicap_strokes(mut card: PlayerRoundScore, strokes: &[u8]) -> PlayerRoundScore {
        for (hole, &s) in card.holes.iter_mut().zip(strokes) {
            *hole = hole.with_handicap_strokes(s);
        }
        card
    }

    pub fn team_of(id: &str, players: Vec<PlayerRoundScore>) -> TeamRoundScore {
        TeamRoundScore {
            team_id: id.to_string(),
            team_name: format!("Team {id}"),
            players,
        }
    }
}
