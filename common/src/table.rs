//! Filtering and sorting state of the checks table.

use std::cmp::Ordering;

use crate::model::category::CheckCategory;
use crate::model::check::{distinct_columns, Check};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// `None -> Asc -> Desc -> None`.
fn cycle(order: Option<SortOrder>) -> Option<SortOrder> {
    match order {
        None => Some(SortOrder::Asc),
        Some(SortOrder::Asc) => Some(SortOrder::Desc),
        Some(SortOrder::Desc) => None,
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecksView {
    pub column_filter: Option<String>,
    pub category_filter: Option<CheckCategory>,
    pub column_sort: Option<SortOrder>,
    pub category_sort: Option<SortOrder>,
    pub column_search: String,
}

impl ChecksView {
    pub fn toggle_column_sort(&mut self) {
        self.column_sort = cycle(self.column_sort);
        self.category_sort = None;
    }

    pub fn toggle_category_sort(&mut self) {
        self.category_sort = cycle(self.category_sort);
        self.column_sort = None;
    }

    /// Picking a column filter also clears the search box.
    pub fn filter_column(&mut self, column: &str) {
        self.column_filter = Some(column.to_string());
        self.column_search.clear();
    }

    pub fn filter_category(&mut self, category: CheckCategory) {
        self.category_filter = Some(category);
    }

    pub fn has_filters(&self) -> bool {
        self.column_filter.is_some() || self.category_filter.is_some()
    }

    pub fn clear_filters(&mut self) {
        self.column_filter = None;
        self.category_filter = None;
    }

    /// Columns offered by the column filter: the schema when known, otherwise
    /// the distinct columns of the checks; narrowed by the case-insensitive search.
    pub fn filter_candidates(&self, schema_columns: &[String], checks: &[Check]) -> Vec<String> {
        let mut candidates: Vec<String> = if schema_columns.is_empty() {
            distinct_columns(checks)
        } else {
            schema_columns.to_vec()
        };
        let needle = self.column_search.trim().to_lowercase();
        if !needle.is_empty() {
            candidates.retain(|column| column.to_lowercase().contains(&needle));
        }
        candidates
    }

    /// Rows to display, filtered then sorted. Sorting is stable.
    pub fn apply<'a>(&self, checks: &'a [Check]) -> Vec<&'a Check> {
        let mut rows: Vec<&Check> = checks
            .iter()
            .filter(|check| {
                self.column_filter
                    .as_ref()
                    .is_none_or(|column| &check.column == column)
            })
            .filter(|check| {
                self.category_filter
                    .is_none_or(|category| check.category == category)
            })
            .collect();

        if let Some(order) = self.column_sort {
            rows.sort_by(|a, b| directed(a.column.cmp(&b.column), order));
        } else if let Some(order) = self.category_sort {
            rows.sort_by(|a, b| directed(a.category.label().cmp(b.category.label()), order));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::check::RuleId;
    use pretty_assertions::assert_eq;

    fn check(id: i64, column: &str, category: CheckCategory) -> Check {
        Check {
            id: RuleId::from(id),
            column: column.to_string(),
            category,
            description: String::new(),
            rule: None,
            code: String::new(),
            current_value: None,
            include: true,
        }
    }

    fn ids(rows: &[&Check]) -> Vec<String> {
        rows.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn sort_cycles_and_resets_the_other_sort() {
        let mut view = ChecksView::default();
        view.toggle_column_sort();
        assert_eq!(view.column_sort, Some(SortOrder::Asc));
        view.toggle_column_sort();
        assert_eq!(view.column_sort, Some(SortOrder::Desc));
        view.toggle_category_sort();
        assert_eq!(view.column_sort, None);
        assert_eq!(view.category_sort, Some(SortOrder::Asc));
        view.toggle_category_sort();
        view.toggle_category_sort();
        assert_eq!(view.category_sort, None);
    }

    #[test]
    fn filters_combine() {
        let checks = vec![
            check(1, "A", CheckCategory::Completeness),
            check(2, "B", CheckCategory::Completeness),
            check(3, "A", CheckCategory::Uniqueness),
        ];
        let mut view = ChecksView::default();
        view.filter_column("A");
        assert_eq!(ids(&view.apply(&checks)), vec!["1", "3"]);
        view.filter_category(CheckCategory::Uniqueness);
        assert_eq!(ids(&view.apply(&checks)), vec!["3"]);
        view.clear_filters();
        assert!(!view.has_filters());
        assert_eq!(view.apply(&checks).len(), 3);
    }

    #[test]
    fn sorts_by_column_or_category_label() {
        let checks = vec![
            check(1, "B", CheckCategory::RowCount),
            check(2, "C", CheckCategory::Completeness),
            check(3, "A", CheckCategory::Pattern),
        ];
        let mut view = ChecksView::default();
        view.toggle_column_sort();
        assert_eq!(ids(&view.apply(&checks)), vec!["3", "1", "2"]);
        view.toggle_column_sort();
        assert_eq!(ids(&view.apply(&checks)), vec!["2", "1", "3"]);

        view.toggle_category_sort();
        assert_eq!(ids(&view.apply(&checks)), vec!["2", "3", "1"]);
    }

    #[test]
    fn filter_candidates_fall_back_to_check_columns() {
        let checks = vec![
            check(1, "ORDER_ID", CheckCategory::Other),
            check(2, "AMOUNT", CheckCategory::Other),
            check(3, "ORDER_ID", CheckCategory::Other),
        ];
        let mut view = ChecksView::default();
        assert_eq!(view.filter_candidates(&[], &checks), vec!["ORDER_ID", "AMOUNT"]);

        view.column_search = "order".to_string();
        let schema = vec!["ORDER_ID".to_string(), "ORDER_TS".to_string(), "AMOUNT".to_string()];
        assert_eq!(view.filter_candidates(&schema, &checks), vec!["ORDER_ID", "ORDER_TS"]);

        view.filter_column("ORDER_TS");
        assert_eq!(view.column_search, "");
    }
}
