use std::path::PathBuf;

use fairway_cli::round_file::RoundFile;
use fairway_cli::{score_path, score_round_file};
use fairway_core::test_helpers::par_card;
use fairway_scoring::config::{HoleCountPolicy, ScoringRules};
use fairway_scoring::round::RoundOutcome;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn score(name: &str, format: Option<&str>) -> RoundOutcome {
    score_path(&fixture(name), format, &ScoringRules::default()).unwrap()
}

#[test]
fn level_par_stroke_play() {
    let RoundOutcome::Leaderboard { results, .. } = score("level_par.json", None) else {
        panic!("expected leaderboard");
    };
    assert_eq!(results[0].gross_score, 72);
    assert_eq!(results[0].net_score, 72);
}

#[test]
fn level_par_stableford_via_override() {
    let RoundOutcome::Leaderboard { format, results } = score("level_par.json", Some("stableford"))
    else {
        panic!("expected leaderboard");
    };
    assert_eq!(format, "stableford");
    assert_eq!(results[0].stableford_points, Some(36));
}

#[test]
fn match_decided_ten_and_eight() {
    let RoundOutcome::Match { outcome, .. } = score("match_ten_and_eight.json", None) else {
        panic!("expected match");
    };
    assert_eq!(outcome.holes_played, 10);
    assert_eq!(outcome.result_a.match_result.as_deref(), Some("10&8"));
    assert_eq!(outcome.result_a.holes_won, outcome.result_b.holes_lost);
}

#[test]
fn league_round_applies_handicaps() {
    let RoundOutcome::Leaderboard { results, .. } = score("league_net.json", None) else {
        panic!("expected leaderboard");
    };
    let order: Vec<_> = results.iter().map(|r| r.player_id.as_str()).collect();
    // p3 nets 71; p1 and p2 tie on 72 and keep file order.
    assert_eq!(order, ["p3", "p1", "p2"]);
    assert_eq!(results[0].gross_score, 81);
    assert_eq!(results[1].net_score, 72);
}

#[test]
fn league_round_with_reduced_allowance() {
    let rules = ScoringRules {
        handicap_allowance_percent: 50,
        ..ScoringRules::default()
    };
    let RoundOutcome::Leaderboard { results, .. } =
        score_path(&fixture("league_net.json"), None, &rules).unwrap()
    else {
        panic!("expected leaderboard");
    };
    // p1 receives 9, p3 receives 5: nets 81 and 76.
    assert_eq!(results[0].player_id, "p2");
    assert_eq!(results[1].net_score, 76);
    assert_eq!(results[2].net_score, 81);
}

#[test]
fn skins_with_carry_and_forfeit() {
    let RoundOutcome::Skins { outcome, .. } = score("skins.json", None) else {
        panic!("expected skins");
    };
    // a takes the carried skin on 2 and again on 4; the tie on 9 is forfeited.
    assert_eq!(outcome.results[0].player_id, "a");
    assert_eq!(outcome.results[0].skins_won, 4);
    assert_eq!(outcome.results[1].skins_won, 2);
    assert_eq!(outcome.unclaimed_skins, 1);
}

#[test]
fn fourball_team_match() {
    let RoundOutcome::TeamMatch { outcome, .. } = score("fourball.json", None) else {
        panic!("expected team match");
    };
    assert_eq!(outcome.team_a.team_name, "Early Birds");
    assert_eq!(outcome.team_a.match_result.as_deref(), Some("1UP"));
    assert_eq!(outcome.team_a.holes_halved, 8);
}

#[test]
fn mismatched_cards_fail_unless_truncating() {
    let err = score_path(&fixture("mismatched.json"), None, &ScoringRules::default()).unwrap_err();
    assert!(format!("{err:#}").contains("hole count mismatch"));

    let rules = ScoringRules {
        hole_count_policy: HoleCountPolicy::Truncate,
        ..ScoringRules::default()
    };
    let RoundOutcome::Match { outcome, .. } =
        score_path(&fixture("mismatched.json"), None, &rules).unwrap()
    else {
        panic!("expected match");
    };
    assert_eq!(outcome.holes_played, 9);
    assert_eq!(outcome.result_a.match_result.as_deref(), Some("AS"));
}

#[test]
fn unknown_format_is_an_error() {
    let file = RoundFile {
        format: "nassau".to_string(),
        stroke_indexes: None,
        players: vec![par_card("p1", 4, 9)],
        teams: Vec::new(),
    };
    let err = score_round_file(file, None, &ScoringRules::default()).unwrap_err();
    assert_eq!(err.to_string(), "unknown game format: nassau");
}

#[test]
fn short_round_is_rejected() {
    let file = RoundFile {
        format: "stroke_play".to_string(),
        stroke_indexes: None,
        players: vec![par_card("p1", 4, 5)],
        teams: Vec::new(),
    };
    let err = score_round_file(file, None, &ScoringRules::default()).unwrap_err();
    assert!(format!("{err:#}").contains("stroke_play is not played over 5 holes"));
}

#[test]
fn missing_file_reports_path() {
    let err = score_path(&fixture("nope.json"), None, &ScoringRules::default()).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn outcome_prints_as_json() {
    let json = serde_json::to_value(score("skins.json", None)).unwrap();
    assert_eq!(json["kind"], "skins");
    assert_eq!(json["unclaimedSkins"], 1);
    assert_eq!(json["holes"][1]["skinsAwarded"], 2);
}
