//! Leaderboard ordering. All sorts are stable: tied entries keep the order
//! they were supplied in.

use std::cmp::Reverse;

use fairway_core::results::{IndividualResult, ScoreBasis, TeamResult};

/// Lowest gross or net score first.
pub fn rank_by_strokes(
    mut results: Vec<IndividualResult>,
    basis: ScoreBasis,
) -> Vec<IndividualResult> {
    results.sort_by_key(|r| r.score(basis));
    results
}

/// Most Stableford points first. Results without points sort last.
pub fn rank_by_stableford(mut results: Vec<IndividualResult>) -> Vec<IndividualResult> {
    results.sort_by_key(|r| Reverse(r.stableford_points));
    results
}

/// Most skins first.
pub fn rank_by_skins(mut results: Vec<IndividualResult>) -> Vec<IndividualResult> {
    results.sort_by_key(|r| Reverse(r.skins_won));
    results
}

pub fn rank_teams_by_strokes(mut teams: Vec<TeamResult>, basis: ScoreBasis) -> Vec<TeamResult> {
    teams.sort_by_key(|t| t.score(basis));
    teams
}

pub fn rank_teams_by_points(mut teams: Vec<TeamResult>) -> Vec<TeamResult> {
    teams.sort_by_key(|t| Reverse(t.stableford_points));
    teams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, gross: u32, net: i32) -> IndividualResult {
        IndividualResult::with_totals(id, id, gross, net)
    }

    fn ids(results: &[IndividualResult]) -> Vec<&str> {
        results.iter().map(|r| r.player_id.as_str()).collect()
    }

    fn team(id: &str, gross: u32, net: i32, points: Option<u32>) -> TeamResult {
        TeamResult {
            team_id: id.to_string(),
            team_name: id.to_string(),
            gross_score: gross,
            net_score: net,
            stableford_points: points,
            holes_won: 0,
            holes_lost: 0,
            holes_halved: 0,
            match_result: None,
            player_results: Vec::new(),
        }
    }

    #[test]
    fn strokes_gross_and_net() {
        let results = vec![result("a", 80, 70), result("b", 75, 73), result("c", 90, 68)];
        assert_eq!(ids(&rank_by_strokes(results.clone(), ScoreBasis::Gross)), ["b", "a", "c"]);
        assert_eq!(ids(&rank_by_strokes(results, ScoreBasis::Net)), ["c", "a", "b"]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let results = vec![result("x", 72, 72), result("y", 70, 70), result("z", 72, 72)];
        assert_eq!(ids(&rank_by_strokes(results, ScoreBasis::Gross)), ["y", "x", "z"]);
    }

    #[test]
    fn stableford_descending() {
        let mut a = result("a", 0, 0);
        a.stableford_points = Some(30);
        let mut b = result("b", 0, 0);
        b.stableford_points = Some(36);
        let c = result("c", 0, 0);
        assert_eq!(ids(&rank_by_stableford(vec![c, a, b])), ["b", "a", "c"]);
    }

    #[test]
    fn skins_descending() {
        let mut a = result("a", 0, 0);
        a.skins_won = 2;
        let mut b = result("b", 0, 0);
        b.skins_won = 5;
        let c = result("c", 0, 0);
        let mut d = result("d", 0, 0);
        d.skins_won = 2;
        assert_eq!(ids(&rank_by_skins(vec![a, b, c, d])), ["b", "a", "d", "c"]);
    }

    #[test]
    fn teams() {
        let teams = vec![
            team("t1", 70, 64, Some(40)),
            team("t2", 68, 66, Some(44)),
            team("t3", 72, 62, Some(40)),
        ];
        let by_net: Vec<_> = rank_teams_by_strokes(teams.clone(), ScoreBasis::Net)
            .into_iter()
            .map(|t| t.team_id)
            .collect();
        assert_eq!(by_net, ["t3", "t1", "t2"]);

        let by_points: Vec<_> = rank_teams_by_points(teams)
            .into_iter()
            .map(|t| t.team_id)
            .collect();
        assert_eq!(by_points, ["t2", "t1", "t3"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_by_strokes(Vec::new(), ScoreBasis::Net).is_empty());
        assert!(rank_teams_by_points(Vec::new()).is_empty());
    }
}
