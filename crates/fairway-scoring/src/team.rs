//! Team formats: best ball, single-ball (scramble, alternate shot,
//! greensome), and team match play.

use serde::Serialize;

use fairway_core::error::ScoringError;
use fairway_core::player::{HoleScore, PlayerRoundScore, TeamRoundScore};
use fairway_core::results::TeamResult;

use crate::aligned_hole_count;
use crate::config::HoleCountPolicy;
use crate::match_play::{MatchWinner, match_margin, play_match};
use crate::stableford::{hole_points, score_stableford};
use crate::stroke_play::score_stroke_play;

/// How a best-ball team's hole score is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestBallMode {
    /// Best gross and best net stroke count on each hole.
    Strokes,
    /// Best Stableford points on each hole.
    Points { use_net: bool },
}

fn team_result(team: &TeamRoundScore, gross: u32, net: i32) -> TeamResult {
    TeamResult {
        team_id: team.team_id.clone(),
        team_name: team.team_name.clone(),
        gross_score: gross,
        net_score: net,
        stableford_points: None,
        holes_won: 0,
        holes_lost: 0,
        holes_halved: 0,
        match_result: None,
        player_results: Vec::new(),
    }
}

/// Holes at position `i` across the members who have one.
fn holes_at(team: &TeamRoundScore, i: usize) -> impl Iterator<Item = &HoleScore> {
    team.players.iter().filter_map(move |p| p.holes.get(i))
}

fn longest_card(team: &TeamRoundScore) -> usize {
    team.players.iter().map(|p| p.holes.len()).max().unwrap_or(0)
}

/// Score a best-ball team. Members' own results are returned alongside the
/// team total.
pub fn score_best_ball(team: &TeamRoundScore, mode: BestBallMode) -> TeamResult {
    let mut gross = 0u32;
    let mut net = 0i32;
    let mut points = 0u32;

    for i in 0..longest_card(team) {
        if let Some(best) = holes_at(team, i).map(|h| h.strokes).min() {
            gross += u32::from(best);
        }
        if let Some(best) = holes_at(team, i).map(HoleScore::net_strokes).min() {
            net += best;
        }
        if let BestBallMode::Points { use_net } = mode
            && let Some(best) = holes_at(team, i).map(|h| hole_points(h, use_net)).max()
        {
            points += u32::from(best);
        }
    }

    let player_results = team
        .players
        .iter()
        .map(|p| match mode {
            BestBallMode::Strokes => score_stroke_play(p),
            BestBallMode::Points { use_net } => score_stableford(p, use_net),
        })
        .collect();

    TeamResult {
        stableford_points: matches!(mode, BestBallMode::Points { .. }).then_some(points),
        player_results,
        ..team_result(team, gross, net)
    }
}

/// Score a team that records one combined card (scramble and other
/// single-ball formats). The card is scored as stroke play under the
/// team's identity.
pub fn score_scramble(team_id: &str, team_name: &str, card: &PlayerRoundScore) -> TeamResult {
    let result = score_stroke_play(card);
    TeamResult {
        team_id: team_id.to_string(),
        team_name: team_name.to_string(),
        gross_score: result.gross_score,
        net_score: result.net_score,
        stableford_points: None,
        holes_won: 0,
        holes_lost: 0,
        holes_halved: 0,
        match_result: None,
        player_results: Vec::new(),
    }
}

/// Reduce a best-ball team to one card holding its lowest net hole score on
/// each hole. Ties go to the member listed first.
pub fn best_ball_card(team: &TeamRoundScore) -> PlayerRoundScore {
    let holes = (0..longest_card(team))
        .filter_map(|i| holes_at(team, i).min_by_key(|h| h.net_strokes()).copied())
        .collect();
    PlayerRoundScore::new(team.team_id.clone(), team.team_name.clone(), holes)
}

/// The card a team plays a match with: its only card for single-ball
/// formats, otherwise its best-ball card.
fn match_card(team: &TeamRoundScore) -> PlayerRoundScore {
    match team.players.as_slice() {
        [only] => PlayerRoundScore::new(
            team.team_id.clone(),
            team.team_name.clone(),
            only.holes.clone(),
        ),
        _ => best_ball_card(team),
    }
}

/// Gross and net totals as a stroke leaderboard reports them: the single card
/// for single-ball teams, best gross and best net per hole otherwise.
fn stroke_totals(team: &TeamRoundScore) -> TeamResult {
    match team.players.as_slice() {
        [only] => score_scramble(&team.team_id, &team.team_name, only),
        _ => score_best_ball(team, BestBallMode::Strokes),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchOutcome {
    pub team_a: TeamResult,
    pub team_b: TeamResult,
    pub winner: MatchWinner,
    pub holes_played: usize,
    pub finished_early: bool,
}

/// Four-ball or alternate-shot match between two teams.
pub fn score_team_match(
    a: &TeamRoundScore,
    b: &TeamRoundScore,
    policy: HoleCountPolicy,
) -> Result<TeamMatchOutcome, ScoringError> {
    let card_a = match_card(a);
    let card_b = match_card(b);
    let holes = aligned_hole_count(&[&card_a, &card_b], policy)?;
    let tally = play_match(&card_a, &card_b, holes);
    let remaining = holes - tally.holes_played;
    let margin = match_margin(tally.a_up, remaining);

    tracing::debug!(
        team_a = %a.team_id,
        team_b = %b.team_id,
        margin = %margin,
        holes_played = tally.holes_played,
        "Team match scored"
    );

    let team_a = TeamResult {
        holes_won: tally.won,
        holes_lost: tally.lost,
        holes_halved: tally.halved,
        match_result: Some(margin.clone()),
        ..stroke_totals(a)
    };
    let team_b = TeamResult {
        holes_won: tally.lost,
        holes_lost: tally.won,
        holes_halved: tally.halved,
        match_result: Some(margin),
        ..stroke_totals(b)
    };

    Ok(TeamMatchOutcome {
        team_a,
        team_b,
        winner: tally.winner(),
        holes_played: tally.holes_played,
        finished_early: remaining > 0,
    })
}
