//! Analysis catalog and the add-analysis draft.
//!
//! Count options (row count, column count) describe the whole dataset and are
//! only selectable while no column is selected; every other option needs at
//! least one column.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::check::RuleId;

pub const DEFAULT_TOP_K: u32 = 5;
pub const TOP_K_RANGE: RangeInclusive<u32> = 1..=100;

const TOP_K_PREFIX: &str = "distribution_top_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisGroup {
    Stats,
    Distribution,
    Trend,
}

impl AnalysisGroup {
    pub const ALL: [AnalysisGroup; 3] = [
        AnalysisGroup::Stats,
        AnalysisGroup::Distribution,
        AnalysisGroup::Trend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisGroup::Stats => "Statistics",
            AnalysisGroup::Distribution => "Distribution",
            AnalysisGroup::Trend => "Trend",
        }
    }

    pub fn options(self) -> impl Iterator<Item = AnalysisOption> {
        AnalysisOption::CATALOG
            .into_iter()
            .filter(move |option| option.group() == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisOption {
    StatsMin,
    StatsMax,
    StatsMean,
    StatsRowCount,
    StatsCompleteness,
    StatsColumnCount,
    Distribution,
    DistributionTopK,
    TrendMin,
    TrendMax,
    TrendMean,
    TrendSum,
}

impl AnalysisOption {
    pub const CATALOG: [AnalysisOption; 12] = [
        AnalysisOption::StatsMin,
        AnalysisOption::StatsMax,
        AnalysisOption::StatsMean,
        AnalysisOption::StatsRowCount,
        AnalysisOption::StatsCompleteness,
        AnalysisOption::StatsColumnCount,
        AnalysisOption::Distribution,
        AnalysisOption::DistributionTopK,
        AnalysisOption::TrendMin,
        AnalysisOption::TrendMax,
        AnalysisOption::TrendMean,
        AnalysisOption::TrendSum,
    ];

    /// Identifier sent to the backend.
    pub fn id(self) -> &'static str {
        match self {
            AnalysisOption::StatsMin => "stats_min",
            AnalysisOption::StatsMax => "stats_max",
            AnalysisOption::StatsMean => "stats_mean",
            AnalysisOption::StatsRowCount => "stats_row_count",
            AnalysisOption::StatsCompleteness => "stats_completeness",
            AnalysisOption::StatsColumnCount => "stats_column_count",
            AnalysisOption::Distribution => "distribution",
            AnalysisOption::DistributionTopK => "distribution_top_k",
            AnalysisOption::TrendMin => "trend_min",
            AnalysisOption::TrendMax => "trend_max",
            AnalysisOption::TrendMean => "trend_mean",
            AnalysisOption::TrendSum => "trend_sum",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisOption::StatsMin | AnalysisOption::TrendMin => "Min",
            AnalysisOption::StatsMax | AnalysisOption::TrendMax => "Max",
            AnalysisOption::StatsMean | AnalysisOption::TrendMean => "Mean",
            AnalysisOption::StatsRowCount => "Row Count",
            AnalysisOption::StatsCompleteness => "Completeness",
            AnalysisOption::StatsColumnCount => "Column Count",
            AnalysisOption::Distribution => "Distribution",
            AnalysisOption::DistributionTopK => "Top K Distribution",
            AnalysisOption::TrendSum => "Sum",
        }
    }

    pub fn group(self) -> AnalysisGroup {
        match self {
            AnalysisOption::StatsMin
            | AnalysisOption::StatsMax
            | AnalysisOption::StatsMean
            | AnalysisOption::StatsRowCount
            | AnalysisOption::StatsCompleteness
            | AnalysisOption::StatsColumnCount => AnalysisGroup::Stats,
            AnalysisOption::Distribution | AnalysisOption::DistributionTopK => {
                AnalysisGroup::Distribution
            }
            AnalysisOption::TrendMin
            | AnalysisOption::TrendMax
            | AnalysisOption::TrendMean
            | AnalysisOption::TrendSum => AnalysisGroup::Trend,
        }
    }

    pub fn is_count(self) -> bool {
        matches!(
            self,
            AnalysisOption::StatsRowCount | AnalysisOption::StatsColumnCount
        )
    }

    pub fn from_id(id: &str) -> Option<AnalysisOption> {
        AnalysisOption::CATALOG.into_iter().find(|option| option.id() == id)
    }
}

/// Human-readable label for an emitted option identifier, including the
/// rewritten top-K form (`distribution_top_7` -> `Top 7 Distribution`).
pub fn option_label(id: &str) -> String {
    if let Some(option) = AnalysisOption::from_id(id) {
        return match option.group() {
            AnalysisGroup::Trend => format!("{} ({})", option.label(), option.group().label()),
            _ => option.label().to_string(),
        };
    }
    match id.strip_prefix(TOP_K_PREFIX).and_then(|k| k.parse::<u32>().ok()) {
        Some(k) => format!("Top {k} Distribution"),
        None => id.to_string(),
    }
}

/// A saved analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: RuleId,
    pub options: Vec<String>,
    pub columns: Vec<String>,
}

/// Form state of the analysis editor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisDraft {
    options: Vec<AnalysisOption>,
    columns: Vec<String>,
    top_k: u32,
}

impl Default for AnalysisDraft {
    fn default() -> Self {
        AnalysisDraft {
            options: Vec::new(),
            columns: Vec::new(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AnalysisDraft {
    pub fn options(&self) -> &[AnalysisOption] {
        &self.options
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    pub fn has_selected_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn is_selected(&self, option: AnalysisOption) -> bool {
        self.options.contains(&option)
    }

    pub fn is_column_selected(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn is_option_enabled(&self, option: AnalysisOption) -> bool {
        if option.is_count() {
            !self.has_selected_columns()
        } else {
            self.has_selected_columns()
        }
    }

    /// Toggles an option. Disabled options are left untouched; returns whether
    /// anything changed.
    pub fn toggle_option(&mut self, option: AnalysisOption) -> bool {
        if !self.is_option_enabled(option) {
            return false;
        }
        match self.options.iter().position(|o| *o == option) {
            Some(index) => {
                self.options.remove(index);
            }
            None => self.options.push(option),
        }
        true
    }

    pub fn toggle_column(&mut self, column: &str) {
        match self.columns.iter().position(|c| c == column) {
            Some(index) => {
                self.columns.remove(index);
            }
            None => self.columns.push(column.to_string()),
        }
        self.purge_disabled_options();
    }

    pub fn remove_column(&mut self, column: &str) {
        self.columns.retain(|c| c != column);
        self.purge_disabled_options();
    }

    /// Selections made incompatible by a column change are dropped.
    fn purge_disabled_options(&mut self) {
        let has_columns = self.has_selected_columns();
        self.options.retain(|option| option.is_count() != has_columns);
    }

    pub fn set_top_k(&mut self, k: u32) {
        self.top_k = k.clamp(*TOP_K_RANGE.start(), *TOP_K_RANGE.end());
    }

    /// Applies raw input from the top-K field. Unparsable input and `0` fall
    /// back to the default; other values are clamped.
    pub fn set_top_k_input(&mut self, input: &str) {
        match input.trim().parse::<i64>() {
            Ok(0) | Err(_) => self.top_k = DEFAULT_TOP_K,
            Ok(k) => {
                let (low, high) = (*TOP_K_RANGE.start(), *TOP_K_RANGE.end());
                self.top_k = k.clamp(i64::from(low), i64::from(high)) as u32;
            }
        }
    }

    pub fn requires_columns(&self) -> bool {
        self.options.iter().any(|option| !option.is_count())
    }

    pub fn can_save(&self) -> bool {
        !self.options.is_empty() && !(self.requires_columns() && self.columns.is_empty())
    }

    /// Option identifiers as emitted on save, with top-K resolved.
    pub fn emitted_options(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| match option {
                AnalysisOption::DistributionTopK => format!("{TOP_K_PREFIX}{}", self.top_k),
                other => other.id().to_string(),
            })
            .collect()
    }

    /// Builds the analysis to hand to the caller, or `None` when saving is blocked.
    pub fn finish(&self) -> Option<Analysis> {
        if !self.can_save() {
            return None;
        }
        Some(Analysis {
            id: RuleId::generate(),
            options: self.emitted_options(),
            columns: self.columns.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = AnalysisDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count_options() -> Vec<AnalysisOption> {
        AnalysisOption::CATALOG.into_iter().filter(|o| o.is_count()).collect()
    }

    #[test]
    fn catalog_is_grouped() {
        let stats: Vec<_> = AnalysisGroup::Stats.options().map(|o| o.label()).collect();
        assert_eq!(
            stats,
            vec!["Min", "Max", "Mean", "Row Count", "Completeness", "Column Count"]
        );
        assert_eq!(AnalysisGroup::Distribution.options().count(), 2);
        assert_eq!(AnalysisGroup::Trend.options().count(), 4);
        assert_eq!(count_options().len(), 2);
    }

    #[test]
    fn enablement_follows_column_selection() {
        let mut draft = AnalysisDraft::default();
        for option in AnalysisOption::CATALOG {
            assert_eq!(draft.is_option_enabled(option), option.is_count());
        }
        draft.toggle_column("AMT");
        for option in AnalysisOption::CATALOG {
            assert_eq!(draft.is_option_enabled(option), !option.is_count());
        }
    }

    #[test]
    fn disabled_options_cannot_be_toggled() {
        let mut draft = AnalysisDraft::default();
        assert!(!draft.toggle_option(AnalysisOption::StatsMin));
        assert!(draft.options().is_empty());
        assert!(draft.toggle_option(AnalysisOption::StatsRowCount));
        assert!(draft.toggle_option(AnalysisOption::StatsRowCount));
        assert!(draft.options().is_empty());
    }

    #[test]
    fn column_changes_purge_incompatible_selections() {
        let mut draft = AnalysisDraft::default();
        draft.toggle_option(AnalysisOption::StatsColumnCount);
        draft.toggle_column("A");
        assert!(draft.options().is_empty());

        draft.toggle_option(AnalysisOption::TrendSum);
        draft.toggle_option(AnalysisOption::Distribution);
        draft.toggle_column("B");
        assert_eq!(draft.options().len(), 2);

        draft.remove_column("A");
        draft.toggle_column("B");
        assert!(draft.options().is_empty());
        assert!(!draft.can_save());
    }

    #[test]
    fn save_rules() {
        let mut draft = AnalysisDraft::default();
        assert!(!draft.can_save());

        draft.toggle_option(AnalysisOption::StatsRowCount);
        assert!(draft.can_save());

        draft.toggle_option(AnalysisOption::StatsRowCount);
        draft.toggle_column("A");
        draft.toggle_option(AnalysisOption::StatsMean);
        assert!(draft.can_save());
        assert_eq!(draft.finish().unwrap().columns, vec!["A".to_string()]);
    }

    #[test]
    fn top_k_is_rewritten_on_save() {
        let mut draft = AnalysisDraft::default();
        draft.toggle_column("STATE");
        draft.toggle_option(AnalysisOption::DistributionTopK);
        draft.toggle_option(AnalysisOption::Distribution);
        draft.set_top_k(7);

        let analysis = draft.finish().unwrap();
        assert_eq!(
            analysis.options,
            vec!["distribution_top_7".to_string(), "distribution".to_string()]
        );
        assert!(!analysis.options.iter().any(|o| o == "distribution_top_k"));
    }

    #[test]
    fn top_k_input_is_bounded() {
        let mut draft = AnalysisDraft::default();
        draft.set_top_k_input("250");
        assert_eq!(draft.top_k(), 100);
        draft.set_top_k_input("abc");
        assert_eq!(draft.top_k(), DEFAULT_TOP_K);
        draft.set_top_k_input("0");
        assert_eq!(draft.top_k(), DEFAULT_TOP_K);
        draft.set_top_k_input(" 12 ");
        assert_eq!(draft.top_k(), 12);
        draft.set_top_k_input("-3");
        assert_eq!(draft.top_k(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut draft = AnalysisDraft::default();
        draft.toggle_column("A");
        draft.toggle_option(AnalysisOption::TrendMax);
        draft.set_top_k(9);
        draft.reset();
        assert_eq!(draft, AnalysisDraft::default());
    }

    #[test]
    fn labels_for_emitted_ids() {
        assert_eq!(option_label("distribution_top_7"), "Top 7 Distribution");
        assert_eq!(option_label("stats_row_count"), "Row Count");
        assert_eq!(option_label("trend_sum"), "Sum (Trend)");
        assert_eq!(option_label("custom"), "custom");
    }
}
