pub mod round_file;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use fairway_core::format_registry::{
    FormatCategory, GameFormatDefinition, GameMode, all_formats, format_by_id, formats_grouped,
};
use fairway_scoring::config::ScoringRules;
use fairway_scoring::round::{RoundOutcome, score_round};

use round_file::RoundFile;

/// A category heading with its formats, as printed by `fairway formats --grouped`.
#[derive(Debug, Serialize)]
pub struct FormatGroup {
    pub category: FormatCategory,
    pub label: &'static str,
    pub formats: Vec<&'static GameFormatDefinition>,
}

/// Catalog entries matching every filter given.
pub fn list_formats(
    category: Option<FormatCategory>,
    mode: Option<GameMode>,
) -> Vec<&'static GameFormatDefinition> {
    all_formats()
        .iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .filter(|f| mode.is_none_or(|m| f.available_in(m)))
        .collect()
}

pub fn grouped_formats() -> Vec<FormatGroup> {
    formats_grouped()
        .into_iter()
        .map(|(category, formats)| FormatGroup {
            category,
            label: category.label(),
            formats,
        })
        .collect()
}

/// Score a parsed round file. `format_override` replaces the file's format id.
pub fn score_round_file(
    file: RoundFile,
    format_override: Option<&str>,
    rules: &ScoringRules,
) -> Result<RoundOutcome> {
    let format_id = format_override.unwrap_or(&file.format).to_string();
    let format = format_by_id(&format_id)
        .ok_or_else(|| fairway_core::error::ScoringError::UnknownFormat(format_id.clone()))?;

    let entries = file.into_entries(rules.handicap_allowance_percent)?;
    let outcome = score_round(format, &entries, rules)
        .with_context(|| format!("scoring round as {}", format.name))?;
    tracing::info!(format = format.id, "Round scored");
    Ok(outcome)
}

/// Read a JSON round file from disk and score it.
pub fn score_path(
    path: &Path,
    format_override: Option<&str>,
    rules: &ScoringRules,
) -> Result<RoundOutcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading round file {}", path.display()))?;
    let file: RoundFile = serde_json::from_str(&content)
        .with_context(|| format!("parsing round file {}", path.display()))?;
    score_round_file(file, format_override, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_with_filters() {
        assert_eq!(list_formats(None, None).len(), all_formats().len());

        let cup_teams = list_formats(Some(FormatCategory::TwoPlayerTeam), Some(GameMode::Cup));
        assert!(!cup_teams.is_empty());
        assert!(
            cup_teams
                .iter()
                .all(|f| f.category == FormatCategory::TwoPlayerTeam && f.availability.cup)
        );
    }

    #[test]
    fn groups_have_labels() {
        let groups = grouped_formats();
        assert_eq!(groups[0].label, "Individual");
        assert!(groups.iter().all(|g| !g.formats.is_empty()));
    }
}
