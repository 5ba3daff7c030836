//! Verification and analysis-preview results as returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire;

const SUCCESS_STATUS: &str = "Success";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintResult {
    #[serde(default)]
    pub constraint: String,
    #[serde(default)]
    pub constraint_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::opt_text")]
    pub current_value: Option<String>,
}

impl ConstraintResult {
    pub fn passed(&self) -> bool {
        self.constraint_status == SUCCESS_STATUS
    }
}

/// Outcome of running the generated check code against the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub success: u64,
    #[serde(default)]
    pub failure: u64,
    #[serde(default)]
    pub per_constraint: Vec<ConstraintResult>,
}

impl VerificationReport {
    /// Percentage of passed constraints with one decimal, `"0"` when nothing ran.
    pub fn success_rate(&self) -> String {
        if self.total == 0 {
            return "0".to_string();
        }
        format!("{:.1}", self.success as f64 / self.total as f64 * 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl DataTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text for display; null renders as `-`.
    pub fn cell_text(cell: &Value) -> String {
        wire::value_text(cell).unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default)]
    pub table: DataTable,
}

/// One label of a chart with its share of the chart total.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    /// Whole-number percentage, already formatted.
    pub percent: String,
}

impl Chart {
    pub fn slices(&self) -> Vec<ChartSlice> {
        let total: f64 = self.values.iter().sum();
        self.labels
            .iter()
            .zip(self.values.iter())
            .map(|(label, value)| {
                let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                ChartSlice {
                    label: label.clone(),
                    value: *value,
                    percent: format!("{share:.0}"),
                }
            })
            .collect()
    }
}

/// Response of the analysis preview endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPreview {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub metrics: DataTable,
    #[serde(default)]
    pub charts: Vec<Chart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn success_rate_has_one_decimal() {
        let report = VerificationReport {
            total: 10,
            success: 7,
            failure: 3,
            per_constraint: vec![],
        };
        assert_eq!(report.success_rate(), "70.0");

        let report = VerificationReport {
            total: 3,
            success: 2,
            failure: 1,
            per_constraint: vec![],
        };
        assert_eq!(report.success_rate(), "66.7");
        assert_eq!(VerificationReport::default().success_rate(), "0");
    }

    #[test]
    fn constraint_status() {
        let results: Vec<ConstraintResult> = serde_json::from_value(json!([
            { "constraint": "CompletenessConstraint(A)", "constraint_status": "Success", "current_value": 1.0 },
            { "constraint": "UniquenessConstraint(B)", "constraint_status": "Failure" }
        ]))
        .unwrap();
        assert!(results[0].passed());
        assert_eq!(results[0].current_value.as_deref(), Some("1.0"));
        assert!(!results[1].passed());
        assert_eq!(results[1].current_value, None);
    }

    #[test]
    fn chart_slices_share_the_total() {
        let chart = Chart {
            id: "c1".to_string(),
            title: "STATE".to_string(),
            kind: "pie".to_string(),
            labels: vec!["CA".to_string(), "NY".to_string(), "TX".to_string()],
            values: vec![2.0, 1.0, 1.0],
            table: DataTable::default(),
        };
        let percents: Vec<_> = chart.slices().into_iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec!["50", "25", "25"]);
    }

    #[test]
    fn null_cells_render_as_dash() {
        assert_eq!(DataTable::cell_text(&json!(null)), "-");
        assert_eq!(DataTable::cell_text(&json!(3.5)), "3.5");
    }
}
