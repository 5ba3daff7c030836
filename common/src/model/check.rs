//! Check rule model: the stored check, the editor draft, and the owned list.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::CheckCategory;
use super::wire;

/// Code placeholder the backend uses for "not generated yet".
pub const PENDING_CODE: &str = "-";

/// Stable identifier of a check or analysis. The backend issues integers for
/// suggested rows; rules created in the browser get a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleId {
    Number(i64),
    Text(String),
}

impl RuleId {
    pub fn generate() -> Self {
        RuleId::Text(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::Number(n) => write!(f, "{n}"),
            RuleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RuleId {
    fn from(value: &str) -> Self {
        RuleId::Text(value.to_string())
    }
}

impl From<i64> for RuleId {
    fn from(value: i64) -> Self {
        RuleId::Number(value)
    }
}

/// One declarative data-quality rule, in the row shape exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub id: RuleId,
    #[serde(alias = "column_name")]
    pub column: String,
    #[serde(default)]
    pub category: CheckCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::opt_text")]
    pub rule: Option<String>,
    /// Empty (or [`PENDING_CODE`]) means the code must be regenerated from `description`.
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::opt_text")]
    pub current_value: Option<String>,
    #[serde(default = "wire::default_include", deserialize_with = "wire::include_flag")]
    pub include: bool,
}

impl Check {
    pub fn from_payload(id: RuleId, payload: CheckPayload) -> Self {
        Check {
            id,
            column: payload.column,
            category: payload.category,
            description: payload.description,
            rule: None,
            code: String::new(),
            current_value: None,
            include: true,
        }
    }

    pub fn needs_code(&self) -> bool {
        let code = self.code.trim();
        code.is_empty() || code == PENDING_CODE
    }

    /// Re-derives `category` from `code`. A check without code keeps the
    /// category chosen in the editor.
    pub fn sync_category(&mut self) {
        if !self.needs_code() {
            self.category = CheckCategory::infer(&self.code);
        }
    }

    /// Takes code, rule and current value from a transpiled row.
    pub fn apply_transpiled(&mut self, row: &Check) {
        self.code = row.code.clone();
        self.rule = row.rule.clone();
        self.current_value = row.current_value.clone();
        self.sync_category();
    }

    pub fn current_value_display(&self) -> &str {
        self.current_value.as_deref().unwrap_or(PENDING_CODE)
    }
}

/// Merges transpiled rows into `checks` by id. Returns how many checks changed.
/// Rows with unknown ids are ignored.
pub fn merge_transpiled(checks: &mut [Check], rows: &[Check]) -> usize {
    let mut merged = 0;
    for row in rows {
        if let Some(check) = checks.iter_mut().find(|c| c.id == row.id) {
            check.apply_transpiled(row);
            merged += 1;
        }
    }
    merged
}

/// What the check editor emits on save. The caller assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckPayload {
    pub column: String,
    pub category: CheckCategory,
    pub description: String,
}

/// Form state of the check editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckDraft {
    pub column: String,
    pub category: Option<CheckCategory>,
    pub description: String,
}

impl CheckDraft {
    pub fn from_check(check: &Check) -> Self {
        CheckDraft {
            column: check.column.clone(),
            category: Some(check.category),
            description: check.description.clone(),
        }
    }

    /// Picking the already selected column clears it.
    pub fn select_column(&mut self, column: &str) {
        if self.column == column {
            self.column.clear();
        } else {
            self.column = column.to_string();
        }
    }

    pub fn can_save(&self) -> bool {
        !self.column.is_empty() && self.category.is_some() && !self.description.trim().is_empty()
    }

    pub fn description_hint(&self) -> String {
        match self.category {
            Some(category) if !self.column.is_empty() => category.description_hint(&self.column),
            _ => "Select a column and category first".to_string(),
        }
    }

    /// Builds the save payload, prefixing the column name when the description
    /// does not mention it. `None` while the draft is incomplete.
    pub fn to_payload(&self) -> Option<CheckPayload> {
        if !self.can_save() {
            return None;
        }
        let category = self.category?;
        let description = self.description.trim();
        let description = if description
            .to_lowercase()
            .contains(&self.column.to_lowercase())
        {
            description.to_string()
        } else {
            format!("{} {}", self.column, description)
        };
        Some(CheckPayload {
            column: self.column.clone(),
            category,
            description,
        })
    }
}

/// The checks owned by the page, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckList {
    checks: Vec<Check>,
}

impl CheckList {
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn get(&self, id: &RuleId) -> Option<&Check> {
        self.checks.iter().find(|c| &c.id == id)
    }

    pub fn add(&mut self, payload: CheckPayload) -> RuleId {
        let id = RuleId::generate();
        self.checks.push(Check::from_payload(id.clone(), payload));
        id
    }

    /// Replaces the editable fields. Generated code, rule and current value are
    /// dropped so the code is regenerated from the new description.
    pub fn update(&mut self, id: &RuleId, payload: CheckPayload) -> bool {
        match self.checks.iter_mut().find(|c| &c.id == id) {
            Some(check) => {
                let include = check.include;
                *check = Check::from_payload(id.clone(), payload);
                check.include = include;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RuleId) -> Option<Check> {
        let index = self.checks.iter().position(|c| &c.id == id)?;
        Some(self.checks.remove(index))
    }

    pub fn set_include(&mut self, id: &RuleId, include: bool) -> bool {
        match self.checks.iter_mut().find(|c| &c.id == id) {
            Some(check) => {
                check.include = include;
                true
            }
            None => false,
        }
    }

    /// Replaces the whole list, e.g. with suggested rows, re-deriving categories.
    pub fn replace_all(&mut self, mut checks: Vec<Check>) {
        checks.iter_mut().for_each(Check::sync_category);
        self.checks = checks;
    }

    pub fn merge_transpiled(&mut self, rows: &[Check]) -> usize {
        merge_transpiled(&mut self.checks, rows)
    }

    /// Like [`CheckList::merge_transpiled`], but skips checks edited or
    /// removed since `sent` was snapshotted for the request.
    pub fn merge_if_unchanged(&mut self, sent: &[Check], rows: &[Check]) -> usize {
        let mut merged = 0;
        for row in rows {
            let Some(snapshot) = sent.iter().find(|c| c.id == row.id) else {
                continue;
            };
            if let Some(check) = self.checks.iter_mut().find(|c| c.id == row.id) {
                if check == snapshot {
                    check.apply_transpiled(row);
                    merged += 1;
                }
            }
        }
        merged
    }

    pub fn pending(&self) -> Vec<Check> {
        self.checks.iter().filter(|c| c.needs_code()).cloned().collect()
    }
}

/// Distinct columns referenced by `checks`, first occurrence first.
pub fn distinct_columns(checks: &[Check]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for check in checks {
        if !columns.contains(&check.column) {
            columns.push(check.column.clone());
        }
    }
    columns
}
