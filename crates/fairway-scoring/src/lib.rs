//! Pure scoring functions for golf game formats.
//!
//! Every function takes fully materialised cards and returns fresh results.
//! Nothing here holds state, so calls can run concurrently without
//! coordination.

pub mod config;
pub mod handicap;
pub mod match_play;
pub mod ranking;
pub mod round;
pub mod skins;
pub mod stableford;
pub mod stroke_play;
pub mod team;

use fairway_core::error::ScoringError;
use fairway_core::player::PlayerRoundScore;

use config::HoleCountPolicy;

/// Number of holes to compare across cards scored hole-by-hole.
///
/// Under [`HoleCountPolicy::Truncate`] the shortest card wins; under
/// [`HoleCountPolicy::Reject`] any difference is an error.
pub(crate) fn aligned_hole_count(
    cards: &[&PlayerRoundScore],
    policy: HoleCountPolicy,
) -> Result<usize, ScoringError> {
    let Some(first) = cards.first() else {
        return Ok(0);
    };
    let expected = first.holes.len();
    let mut shortest = expected;
    let mut mismatched = false;
    for card in &cards[1..] {
        let found = card.holes.len();
        if found != expected {
            if policy == HoleCountPolicy::Reject {
                return Err(ScoringError::HoleCountMismatch { expected, found });
            }
            mismatched = true;
            shortest = shortest.min(found);
        }
    }
    if mismatched {
        tracing::warn!(holes = shortest, "Cards differ in length, truncating");
    }
    Ok(shortest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::par_card;

    #[test]
    fn aligned_count_equal_cards() {
        let a = par_card("a", 4, 18);
        let b = par_card("b", 4, 18);
        assert_eq!(aligned_hole_count(&[&a, &b], HoleCountPolicy::Reject), Ok(18));
    }

    #[test]
    fn aligned_count_rejects_mismatch() {
        let a = par_card("a", 4, 18);
        let b = par_card("b", 4, 17);
        assert_eq!(
            aligned_hole_count(&[&a, &b], HoleCountPolicy::Reject),
            Err(ScoringError::HoleCountMismatch {
                expected: 18,
                found: 17,
            })
        );
    }

    #[test]
    fn aligned_count_truncates_to_shortest() {
        let a = par_card("a", 4, 9);
        let b = par_card("b", 4, 18);
        let c = par_card("c", 4, 7);
        assert_eq!(
            aligned_hole_count(&[&a, &b, &c], HoleCountPolicy::Truncate),
            Ok(7)
        );
    }

    #[test]
    fn aligned_count_empty() {
        assert_eq!(aligned_hole_count(&[], HoleCountPolicy::Reject), Ok(0));
    }
}
