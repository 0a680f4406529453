use fairway_core::error::ScoringError;
use fairway_core::player::PlayerRoundScore;

/// Rounded handicap allowance from a handicap index.
///
/// `allowance_percent` scales the index first (e.g. 85 for a four-ball
/// allowance). Halves round away from zero.
pub fn course_handicap(handicap_index: f32, allowance_percent: u8) -> i32 {
    (handicap_index * f32::from(allowance_percent) / 100.0).round() as i32
}

/// Spread `handicap` strokes across holes by stroke index (1 = hardest).
///
/// Every hole gets `handicap / holes` strokes; the remainder goes one each
/// to the hardest holes. Plus (negative) and zero handicaps receive nothing.
/// Holes sharing a stroke index are served in card order.
///
/// A hole holds at most `u8::MAX` strokes. Handicaps above
/// `u8::MAX * holes` are capped there, so the total falls short of them.
pub fn distribute_handicap_strokes(handicap: i32, stroke_indexes: &[u8]) -> Vec<u8> {
    let holes = stroke_indexes.len();
    if handicap <= 0 || holes == 0 {
        return vec![0; holes];
    }

    let handicap = handicap as usize;
    let cap = usize::from(u8::MAX) * holes;
    if handicap > cap {
        tracing::warn!(handicap, cap, "Handicap exceeds strokes a card can hold, capping");
    }
    let handicap = handicap.min(cap);
    let full_pass = u8::try_from(handicap / holes).unwrap_or(u8::MAX);
    let remainder = handicap % holes;

    let mut strokes = vec![full_pass; holes];
    let mut hardest_first: Vec<usize> = (0..holes).collect();
    hardest_first.sort_by_key(|&i| stroke_indexes[i]);
    for &i in hardest_first.iter().take(remainder) {
        strokes[i] = strokes[i].saturating_add(1);
    }
    strokes
}

/// Return a copy of `card` with handicap strokes allotted to every hole from
/// the player's handicap index. A card without an index plays off scratch.
pub fn apply_handicap(
    card: &PlayerRoundScore,
    stroke_indexes: &[u8],
    allowance_percent: u8,
) -> Result<PlayerRoundScore, ScoringError> {
    if stroke_indexes.len() != card.holes.len() {
        return Err(ScoringError::StrokeIndexMismatch {
            holes: card.holes.len(),
            stroke_indexes: stroke_indexes.len(),
        });
    }

    let handicap = card
        .handicap_index
        .map(|index| course_handicap(index, allowance_percent))
        .unwrap_or(0);
    let allotted = distribute_handicap_strokes(handicap, stroke_indexes);

    tracing::debug!(
        player_id = %card.player_id,
        handicap,
        "Distributed handicap strokes"
    );

    let mut adjusted = card.clone();
    for (hole, strokes) in adjusted.holes.iter_mut().zip(allotted) {
        hole.handicap_strokes = strokes;
    }
    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::par_card;

    const STANDARD_18: [u8; 18] = [7, 15, 1, 11, 3, 13, 5, 17, 9, 8, 16, 2, 12, 4, 14, 6, 18, 10];

    #[test]
    fn course_handicap_rounding() {
        assert_eq!(course_handicap(12.4, 100), 12);
        assert_eq!(course_handicap(12.5, 100), 13);
        assert_eq!(course_handicap(20.0, 85), 17);
        assert_eq!(course_handicap(-1.6, 100), -2);
        assert_eq!(course_handicap(0.0, 100), 0);
    }

    #[test]
    fn handicap_under_hole_count_goes_to_hardest() {
        let strokes = distribute_handicap_strokes(3, &STANDARD_18);
        // Stroke indexes 1, 2 and 3 sit on holes 3, 12 and 5.
        for (i, &s) in strokes.iter().enumerate() {
            let expected = u8::from(matches!(i + 1, 3 | 5 | 12));
            assert_eq!(s, expected, "hole {}", i + 1);
        }
    }

    #[test]
    fn handicap_over_hole_count_wraps() {
        let strokes = distribute_handicap_strokes(20, &STANDARD_18);
        assert_eq!(strokes.iter().map(|&s| u32::from(s)).sum::<u32>(), 20);
        assert_eq!(strokes[2], 2); // index 1
        assert_eq!(strokes[11], 2); // index 2
        assert_eq!(strokes[4], 1); // index 3
    }

    #[test]
    fn exact_multiple_is_uniform() {
        assert_eq!(distribute_handicap_strokes(36, &STANDARD_18), vec![2; 18]);
    }

    #[test]
    fn plus_and_scratch_get_nothing() {
        assert_eq!(distribute_handicap_strokes(0, &STANDARD_18), vec![0; 18]);
        assert_eq!(distribute_handicap_strokes(-3, &STANDARD_18), vec![0; 18]);
    }

    #[test]
    fn oversized_handicap_is_capped_per_hole() {
        assert_eq!(distribute_handicap_strokes(300, &[1]), vec![u8::MAX]);
        assert_eq!(distribute_handicap_strokes(600, &[2, 1]), vec![u8::MAX, u8::MAX]);
        // At the cap the total is still exact.
        let strokes = distribute_handicap_strokes(510, &[2, 1]);
        assert_eq!(strokes.iter().map(|&s| u32::from(s)).sum::<u32>(), 510);
    }

    #[test]
    fn no_holes() {
        assert!(distribute_handicap_strokes(10, &[]).is_empty());
    }

    #[test]
    fn nine_hole_indexes() {
        let strokes = distribute_handicap_strokes(4, &[5, 3, 1, 9, 7, 2, 8, 4, 6]);
        assert_eq!(strokes, vec![0, 1, 1, 0, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn apply_handicap_fills_card() {
        let mut card = par_card("p1", 4, 18);
        card.handicap_index = Some(18.2);
        let adjusted = apply_handicap(&card, &STANDARD_18, 100).unwrap();
        assert!(adjusted.holes.iter().all(|h| h.handicap_strokes == 1));
        assert_eq!(adjusted.net_total(), 54);
        assert_eq!(card.net_total(), 72, "input card untouched");
    }

    #[test]
    fn apply_handicap_without_index_is_scratch() {
        let card = par_card("p1", 4, 18);
        let adjusted = apply_handicap(&card, &STANDARD_18, 100).unwrap();
        assert_eq!(adjusted.total_handicap_strokes(), 0);
    }

    #[test]
    fn apply_handicap_checks_index_length() {
        let card = par_card("p1", 4, 9);
        assert_eq!(
            apply_handicap(&card, &STANDARD_18, 100),
            Err(ScoringError::StrokeIndexMismatch {
                holes: 9,
                stroke_indexes: 18,
            })
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distribution_conserves_handicap(
                handicap in 0i32..=200,
                indexes in proptest::collection::vec(1u8..=18, 1..=18),
            ) {
                let strokes = distribute_handicap_strokes(handicap, &indexes);
                prop_assert_eq!(strokes.len(), indexes.len());
                let total: i32 = strokes.iter().map(|&s| i32::from(s)).sum();
                prop_assert_eq!(total, handicap);
            }

            #[test]
            fn harder_holes_never_get_fewer_strokes(
                handicap in 0i32..=54,
                indexes in Just((1u8..=18).collect::<Vec<_>>()).prop_shuffle(),
            ) {
                let strokes = distribute_handicap_strokes(handicap, &indexes);
                for i in 0..indexes.len() {
                    for j in 0..indexes.len() {
                        if indexes[i] < indexes[j] {
                            prop_assert!(strokes[i] >= strokes[j]);
                        }
                    }
                }
            }
        }
    }
}
