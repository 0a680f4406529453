use crate::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Cards that must be compared hole-by-hole have different lengths.
    HoleCountMismatch { expected: usize, found: usize },
    /// A hole was recorded with zero strokes.
    InvalidStrokes { player_id: PlayerId, hole_number: u8 },
    DuplicateHole { player_id: PlayerId, hole_number: u8 },
    /// Stroke index list does not cover the card.
    StrokeIndexMismatch { holes: usize, stroke_indexes: usize },
    UnknownFormat(String),
    /// The format exists but cannot be scored from the supplied entries.
    UnsupportedFormat(String),
    WrongPlayerCount { expected: usize, found: usize },
    /// The format is not played over this many holes.
    UnsupportedHoleCount { format: String, holes: usize },
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoleCountMismatch { expected, found } => {
                write!(f, "hole count mismatch: expected {expected}, found {found}")
            },
            Self::InvalidStrokes {
                player_id,
                hole_number,
            } => write!(
                f,
                "player {player_id} has no strokes recorded on hole {hole_number}"
            ),
            Self::DuplicateHole {
                player_id,
                hole_number,
            } => write!(f, "player {player_id} has hole {hole_number} recorded twice"),
            Self::StrokeIndexMismatch {
                holes,
                stroke_indexes,
            } => write!(
                f,
                "card has {holes} holes but {stroke_indexes} stroke indexes were supplied"
            ),
            Self::UnknownFormat(id) => write!(f, "unknown game format: {id}"),
            Self::UnsupportedFormat(msg) => write!(f, "unsupported format: {msg}"),
            Self::WrongPlayerCount { expected, found } => {
                write!(f, "expected {expected} entries, found {found}")
            },
            Self::UnsupportedHoleCount { format, holes } => {
                write!(f, "{format} is not played over {holes} holes")
            },
        }
    }
}

impl std::error::Error for ScoringError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ScoringError::HoleCountMismatch {
            expected: 18,
            found: 9,
        };
        assert_eq!(e.to_string(), "hole count mismatch: expected 18, found 9");
        assert_eq!(
            ScoringError::UnknownFormat("nassau".into()).to_string(),
            "unknown game format: nassau"
        );
        let e = ScoringError::UnsupportedHoleCount {
            format: "stroke_play".into(),
            holes: 5,
        };
        assert_eq!(e.to_string(), "stroke_play is not played over 5 holes");
    }
}
