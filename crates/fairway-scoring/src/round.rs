//! Score a whole round under a catalog format.

use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format_registry::{GameFormatDefinition, HandicapMode, ScoringMethod, TeamScoring};
use fairway_core::player::{PlayerRoundScore, TeamRoundScore};
use fairway_core::results::{IndividualResult, ScoreBasis, TeamResult};

use crate::config::ScoringRules;
use crate::match_play::{MatchPlayOutcome, score_match_play};
use crate::ranking::{
    rank_by_skins, rank_by_stableford, rank_by_strokes, rank_teams_by_points,
    rank_teams_by_strokes,
};
use crate::skins::{SkinsOutcome, score_skins};
use crate::stableford::score_stableford;
use crate::stroke_play::score_stroke_play;
use crate::team::{
    BestBallMode, TeamMatchOutcome, score_best_ball, score_scramble, score_team_match,
};

/// Cards handed in for a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEntries {
    Players(Vec<PlayerRoundScore>),
    Teams(Vec<TeamRoundScore>),
}

impl RoundEntries {
    /// The same entries with every handicap stroke removed.
    fn off_scratch(&self) -> Self {
        let strip = |card: &PlayerRoundScore| {
            let mut card = card.clone();
            for hole in &mut card.holes {
                hole.handicap_strokes = 0;
            }
            card
        };
        match self {
            Self::Players(players) => Self::Players(players.iter().map(strip).collect()),
            Self::Teams(teams) => Self::Teams(
                teams
                    .iter()
                    .map(|t| TeamRoundScore {
                        players: t.players.iter().map(strip).collect(),
                        ..t.clone()
                    })
                    .collect(),
            ),
        }
    }

    /// Hole count of every entry. A team counts its longest member card.
    fn hole_counts(&self) -> Vec<usize> {
        match self {
            Self::Players(players) => players.iter().map(|p| p.holes.len()).collect(),
            Self::Teams(teams) => teams
                .iter()
                .map(|t| t.players.iter().map(|p| p.holes.len()).max().unwrap_or(0))
                .collect(),
        }
    }
}

/// Ranked outcome of a round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundOutcome {
    Leaderboard {
        format: &'static str,
        results: Vec<IndividualResult>,
    },
    Match {
        format: &'static str,
        #[serde(flatten)]
        outcome: MatchPlayOutcome,
    },
    Skins {
        format: &'static str,
        #[serde(flatten)]
        outcome: SkinsOutcome,
    },
    TeamLeaderboard {
        format: &'static str,
        results: Vec<TeamResult>,
    },
    TeamMatch {
        format: &'static str,
        #[serde(flatten)]
        outcome: TeamMatchOutcome,
    },
}

/// Stroke leaderboards rank on gross only when the format is played off scratch.
fn stroke_basis(format: &GameFormatDefinition) -> ScoreBasis {
    match format.handicap_mode {
        HandicapMode::Scratch => ScoreBasis::Gross,
        HandicapMode::Net | HandicapMode::Both => ScoreBasis::Net,
    }
}

fn unsupported(format: &GameFormatDefinition, why: &str) -> ScoringError {
    ScoringError::UnsupportedFormat(format!("{}: {why}", format.id))
}

fn check_hole_counts(
    format: &GameFormatDefinition,
    entries: &RoundEntries,
) -> Result<(), ScoringError> {
    let bad = entries
        .hole_counts()
        .into_iter()
        .find(|&n| !u8::try_from(n).is_ok_and(|n| format.supports_holes(n)));
    match bad {
        Some(holes) => Err(ScoringError::UnsupportedHoleCount {
            format: format.id.to_string(),
            holes,
        }),
        None => Ok(()),
    }
}

/// Validate the cards and score them under `format`.
///
/// Every card must cover one of the format's supported hole counts. Formats
/// played off scratch ignore any handicap strokes on the cards.
pub fn score_round(
    format: &'static GameFormatDefinition,
    entries: &RoundEntries,
    rules: &ScoringRules,
) -> Result<RoundOutcome, ScoringError> {
    tracing::debug!(format = format.id, "Scoring round");
    match (format.team_scoring, entries) {
        (TeamScoring::Individual, RoundEntries::Players(players)) => {
            players.iter().try_for_each(PlayerRoundScore::validate)?;
        },
        (TeamScoring::Individual, RoundEntries::Teams(_)) => {
            return Err(unsupported(format, "scored per player, got team entries"));
        },
        (_, RoundEntries::Teams(teams)) => {
            teams.iter().try_for_each(TeamRoundScore::validate)?;
        },
        (_, RoundEntries::Players(_)) => {
            return Err(unsupported(format, "team format needs team entries"));
        },
    }
    check_hole_counts(format, entries)?;

    let stripped;
    let entries = if format.handicap_mode == HandicapMode::Scratch {
        tracing::debug!(format = format.id, "Played off scratch, ignoring handicap strokes");
        stripped = entries.off_scratch();
        &stripped
    } else {
        entries
    };

    match entries {
        RoundEntries::Players(players) => score_individual(format, players, rules),
        RoundEntries::Teams(teams) => score_teams(format, teams, rules),
    }
}

fn score_individual(
    format: &'static GameFormatDefinition,
    players: &[PlayerRoundScore],
    rules: &ScoringRules,
) -> Result<RoundOutcome, ScoringError> {
    let id = format.id;
    match format.scoring_method {
        ScoringMethod::TotalStrokes | ScoringMethod::NetStrokes => {
            let results = players.iter().map(score_stroke_play).collect();
            Ok(RoundOutcome::Leaderboard {
                format: id,
                results: rank_by_strokes(results, stroke_basis(format)),
            })
        },
        ScoringMethod::Points => {
            let results = players
                .iter()
                .map(|p| score_stableford(p, rules.stableford_use_net))
                .collect();
            Ok(RoundOutcome::Leaderboard {
                format: id,
                results: rank_by_stableford(results),
            })
        },
        ScoringMethod::HolesWon => match players {
            [a, b] => Ok(RoundOutcome::Match {
                format: id,
                outcome: score_match_play(a, b, rules.hole_count_policy)?,
            }),
            _ => Err(ScoringError::WrongPlayerCount {
                expected: 2,
                found: players.len(),
            }),
        },
        ScoringMethod::Comparison => {
            let mut outcome = score_skins(players, rules.hole_count_policy)?;
            outcome.results = rank_by_skins(outcome.results);
            Ok(RoundOutcome::Skins { format: id, outcome })
        },
    }
}

fn score_teams(
    format: &'static GameFormatDefinition,
    teams: &[TeamRoundScore],
    rules: &ScoringRules,
) -> Result<RoundOutcome, ScoringError> {
    let id = format.id;
    let single_ball = format.team_scoring.is_single_ball();

    if single_ball && let Some(team) = teams.iter().find(|t| t.players.len() != 1) {
        return Err(ScoringError::WrongPlayerCount {
            expected: 1,
            found: team.players.len(),
        });
    }

    match format.scoring_method {
        ScoringMethod::HolesWon => match teams {
            [a, b] => Ok(RoundOutcome::TeamMatch {
                format: id,
                outcome: score_team_match(a, b, rules.hole_count_policy)?,
            }),
            _ => Err(ScoringError::WrongPlayerCount {
                expected: 2,
                found: teams.len(),
            }),
        },
        ScoringMethod::TotalStrokes | ScoringMethod::NetStrokes => {
            let results = teams
                .iter()
                .map(|t| {
                    if single_ball {
                        score_scramble(&t.team_id, &t.team_name, &t.players[0])
                    } else {
                        score_best_ball(t, BestBallMode::Strokes)
                    }
                })
                .collect();
            Ok(RoundOutcome::TeamLeaderboard {
                format: id,
                results: rank_teams_by_strokes(results, stroke_basis(format)),
            })
        },
        ScoringMethod::Points if !single_ball => {
            let mode = BestBallMode::Points {
                use_net: rules.stableford_use_net,
            };
            let results = teams.iter().map(|t| score_best_ball(t, mode)).collect();
            Ok(RoundOutcome::TeamLeaderboard {
                format: id,
                results: rank_teams_by_points(results),
            })
        },
        ScoringMethod::Points | ScoringMethod::Comparison => Err(unsupported(
            format,
            "no team scorer for this scoring method",
        )),
    }
}
