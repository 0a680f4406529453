//! Static catalog of supported golf game formats.
//!
//! The catalog is fixed at compile time. Lookups by id go through an index
//! built on first use; every other query is a filter over [`GAME_FORMATS`]
//! in catalog order.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Who a format is played by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    Individual,
    TwoPlayerTeam,
    FourPlayerTeam,
}

impl FormatCategory {
    /// Display order used by [`formats_grouped`].
    pub const ALL: [FormatCategory; 3] = [
        FormatCategory::Individual,
        FormatCategory::TwoPlayerTeam,
        FormatCategory::FourPlayerTeam,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::TwoPlayerTeam => "2-Player Teams",
            Self::FourPlayerTeam => "4-Player Teams",
        }
    }
}

/// How a result is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    TotalStrokes,
    Points,
    HolesWon,
    /// Hole-by-hole comparison across the whole field (skins).
    Comparison,
    NetStrokes,
}

/// How a team's per-hole score is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamScoring {
    Individual,
    BestBall,
    AlternateShot,
    Scramble,
    Greensome,
}

impl TeamScoring {
    /// Formats where the team plays a single ball and records one card.
    pub fn is_single_ball(self) -> bool {
        matches!(self, Self::AlternateShot | Self::Scramble | Self::Greensome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandicapMode {
    Scratch,
    Net,
    Both,
}

/// Surfaces of the app a format can be picked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    League,
    Cup,
    Scorecard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatAvailability {
    pub league: bool,
    pub cup: bool,
    pub scorecard: bool,
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFormatDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub category: FormatCategory,
    pub scoring_method: ScoringMethod,
    pub team_scoring: TeamScoring,
    pub handicap_mode: HandicapMode,
    pub team_size: u8,
    pub hole_by_hole: bool,
    pub supported_holes: &'static [u8],
    pub availability: FormatAvailability,
    pub icon: &'static str,
    pub rules: &'static [&'static str],
}

impl GameFormatDefinition {
    pub fn is_team(&self) -> bool {
        self.team_size > 1
    }

    pub fn supports_holes(&self, holes: u8) -> bool {
        self.supported_holes.contains(&holes)
    }

    pub fn available_in(&self, mode: GameMode) -> bool {
        match mode {
            GameMode::League => self.availability.league,
            GameMode::Cup => self.availability.cup,
            GameMode::Scorecard => self.availability.scorecard,
        }
    }
}

const NINE_OR_EIGHTEEN: &[u8] = &[9, 18];

pub static GAME_FORMATS: &[GameFormatDefinition] = &[
    GameFormatDefinition {
        id: "stroke_play",
        name: "Stroke Play",
        short_name: "Stroke",
        description: "Count every stroke. Lowest total wins.",
        category: FormatCategory::Individual,
        scoring_method: ScoringMethod::TotalStrokes,
        team_scoring: TeamScoring::Individual,
        handicap_mode: HandicapMode::Both,
        team_size: 1,
        hole_by_hole: false,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "golf",
        rules: &[
            "Every stroke counts toward the total",
            "Net score subtracts handicap strokes",
            "Lowest score wins",
        ],
    },
    GameFormatDefinition {
        id: "stableford",
        name: "Stableford",
        short_name: "Stableford",
        description: "Earn points against par on every hole. Most points wins.",
        category: FormatCategory::Individual,
        scoring_method: ScoringMethod::Points,
        team_scoring: TeamScoring::Individual,
        handicap_mode: HandicapMode::Net,
        team_size: 1,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "star",
        rules: &[
            "Albatross or better 5, eagle 4, birdie 3, par 2, bogey 1",
            "Double bogey or worse scores 0",
            "Highest points total wins",
        ],
    },
    GameFormatDefinition {
        id: "match_play",
        name: "Match Play",
        short_name: "Match",
        description: "Win holes, not strokes. Head-to-head over the round.",
        category: FormatCategory::Individual,
        scoring_method: ScoringMethod::HolesWon,
        team_scoring: TeamScoring::Individual,
        handicap_mode: HandicapMode::Both,
        team_size: 1,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: true,
            scorecard: true,
        },
        icon: "swords",
        rules: &[
            "Lower net score wins the hole",
            "Match ends once the lead exceeds holes remaining",
        ],
    },
    GameFormatDefinition {
        id: "skins",
        name: "Skins",
        short_name: "Skins",
        description: "Each hole is worth a skin. Ties carry over.",
        category: FormatCategory::Individual,
        scoring_method: ScoringMethod::Comparison,
        team_scoring: TeamScoring::Individual,
        handicap_mode: HandicapMode::Both,
        team_size: 1,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: false,
            cup: false,
            scorecard: true,
        },
        icon: "cash",
        rules: &[
            "Outright lowest score wins the skin",
            "Tied holes carry the skin to the next hole",
            "Skins still carried after the last hole are forfeited",
        ],
    },
    GameFormatDefinition {
        id: "best_ball",
        name: "Best Ball",
        short_name: "Best Ball",
        description: "Two-player teams. The better score on each hole counts.",
        category: FormatCategory::TwoPlayerTeam,
        scoring_method: ScoringMethod::TotalStrokes,
        team_scoring: TeamScoring::BestBall,
        handicap_mode: HandicapMode::Both,
        team_size: 2,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "people",
        rules: &[
            "Both players play their own ball",
            "Lowest score on each hole is the team score",
        ],
    },
    GameFormatDefinition {
        id: "best_ball_stableford",
        name: "Better Ball Stableford",
        short_name: "BB Stableford",
        description: "Two-player teams. The better Stableford points on each hole count.",
        category: FormatCategory::TwoPlayerTeam,
        scoring_method: ScoringMethod::Points,
        team_scoring: TeamScoring::BestBall,
        handicap_mode: HandicapMode::Net,
        team_size: 2,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "people",
        rules: &[
            "Both players play their own ball",
            "Higher Stableford points on each hole is the team score",
        ],
    },
    GameFormatDefinition {
        id: "fourball_match",
        name: "Four-Ball Match",
        short_name: "Four-Ball",
        description: "Two-player teams in match play. The better ball wins holes.",
        category: FormatCategory::TwoPlayerTeam,
        scoring_method: ScoringMethod::HolesWon,
        team_scoring: TeamScoring::BestBall,
        handicap_mode: HandicapMode::Both,
        team_size: 2,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: false,
            cup: true,
            scorecard: true,
        },
        icon: "swords",
        rules: &[
            "Each team's better net ball is compared hole by hole",
            "Match ends once the lead exceeds holes remaining",
        ],
    },
    GameFormatDefinition {
        id: "scramble_2",
        name: "Two-Person Scramble",
        short_name: "2 Scramble",
        description: "Both players hit, the team plays from the best shot.",
        category: FormatCategory::TwoPlayerTeam,
        scoring_method: ScoringMethod::TotalStrokes,
        team_scoring: TeamScoring::Scramble,
        handicap_mode: HandicapMode::Both,
        team_size: 2,
        hole_by_hole: false,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "people",
        rules: &[
            "Both players hit every shot",
            "Team picks the best result and plays from there",
            "One team score per hole",
        ],
    },
    GameFormatDefinition {
        id: "alternate_shot",
        name: "Alternate Shot",
        short_name: "Foursomes",
        description: "Partners take turns hitting one ball.",
        category: FormatCategory::TwoPlayerTeam,
        scoring_method: ScoringMethod::HolesWon,
        team_scoring: TeamScoring::AlternateShot,
        handicap_mode: HandicapMode::Both,
        team_size: 2,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: false,
            cup: true,
            scorecard: true,
        },
        icon: "swap",
        rules: &[
            "Partners alternate tee shots and every shot after",
            "One ball and one score per team",
        ],
    },
    GameFormatDefinition {
        id: "greensome",
        name: "Greensome",
        short_name: "Greensome",
        description: "Both tee off, pick the best drive, then alternate.",
        category: FormatCategory::TwoPlayerTeam,
        scoring_method: ScoringMethod::TotalStrokes,
        team_scoring: TeamScoring::Greensome,
        handicap_mode: HandicapMode::Both,
        team_size: 2,
        hole_by_hole: false,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: false,
            cup: true,
            scorecard: true,
        },
        icon: "swap",
        rules: &[
            "Both players drive",
            "Team picks one drive and alternates from there",
        ],
    },
    GameFormatDefinition {
        id: "scramble_4",
        name: "Four-Person Scramble",
        short_name: "4 Scramble",
        description: "All four hit, the team plays from the best shot.",
        category: FormatCategory::FourPlayerTeam,
        scoring_method: ScoringMethod::TotalStrokes,
        team_scoring: TeamScoring::Scramble,
        handicap_mode: HandicapMode::Both,
        team_size: 4,
        hole_by_hole: false,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "groups",
        rules: &[
            "All four players hit every shot",
            "One team score per hole",
        ],
    },
    GameFormatDefinition {
        id: "best_ball_4",
        name: "Four-Person Best Ball",
        short_name: "4 Best Ball",
        description: "Four-player teams. The best net score on each hole counts.",
        category: FormatCategory::FourPlayerTeam,
        scoring_method: ScoringMethod::NetStrokes,
        team_scoring: TeamScoring::BestBall,
        handicap_mode: HandicapMode::Net,
        team_size: 4,
        hole_by_hole: true,
        supported_holes: NINE_OR_EIGHTEEN,
        availability: FormatAvailability {
            league: true,
            cup: false,
            scorecard: true,
        },
        icon: "groups",
        rules: &[
            "Every player plays their own ball",
            "Lowest net score on each hole is the team score",
        ],
    },
];

static FORMAT_INDEX: LazyLock<HashMap<&'static str, &'static GameFormatDefinition>> =
    LazyLock::new(|| GAME_FORMATS.iter().map(|f| (f.id, f)).collect());

pub fn all_formats() -> &'static [GameFormatDefinition] {
    GAME_FORMATS
}

/// Look up a format by id. Unknown or retired ids return `None`.
pub fn format_by_id(id: &str) -> Option<&'static GameFormatDefinition> {
    FORMAT_INDEX.get(id).copied()
}

pub fn formats_by_category(category: FormatCategory) -> Vec<&'static GameFormatDefinition> {
    GAME_FORMATS
        .iter()
        .filter(|f| f.category == category)
        .collect()
}

pub fn formats_for_mode(mode: GameMode) -> Vec<&'static GameFormatDefinition> {
    GAME_FORMATS.iter().filter(|f| f.available_in(mode)).collect()
}

pub fn league_formats() -> Vec<&'static GameFormatDefinition> {
    formats_for_mode(GameMode::League)
}

pub fn cup_formats() -> Vec<&'static GameFormatDefinition> {
    formats_for_mode(GameMode::Cup)
}

pub fn scorecard_formats() -> Vec<&'static GameFormatDefinition> {
    formats_for_mode(GameMode::Scorecard)
}

pub fn individual_formats() -> Vec<&'static GameFormatDefinition> {
    GAME_FORMATS.iter().filter(|f| !f.is_team()).collect()
}

pub fn team_formats() -> Vec<&'static GameFormatDefinition> {
    GAME_FORMATS.iter().filter(|f| f.is_team()).collect()
}

/// Formats grouped by category in display order. Empty groups are omitted.
pub fn formats_grouped() -> Vec<(FormatCategory, Vec<&'static GameFormatDefinition>)> {
    FormatCategory::ALL
        .iter()
        .map(|&c| (c, formats_by_category(c)))
        .filter(|(_, formats)| !formats.is_empty())
        .collect()
}
