//! State owned by the index page.
//!
//! The page is the single owner of the data path, the check list and the
//! analysis list. Editors and dialogs receive copies and report changes back
//! through messages.

use serde_json::Value;

use common::jobs::RequestSlot;
use common::model::analysis::Analysis;
use common::model::check::{CheckList, RuleId};
use common::model::schema::Schema;

pub struct IndexPage {
    pub data_path: String,
    pub schema: Schema,
    /// Row count reported with the last suggestions.
    pub row_count: Option<u64>,
    /// Key columns sent with the suggestion request.
    pub key_cols: Vec<String>,

    pub checks: CheckList,
    pub analyses: Vec<Analysis>,

    pub check_editor_open: bool,
    /// Check being edited; `None` while the editor is in create mode.
    pub editing: Option<RuleId>,
    pub analysis_editor_open: bool,
    pub code_dialog_open: bool,

    pub schema_job: RequestSlot<()>,
    pub suggest_job: RequestSlot<()>,
    pub analysis_run: RequestSlot<Value>,
    pub analysis_run_target: Option<RuleId>,
}

impl IndexPage {
    pub fn new() -> Self {
        Self {
            data_path: String::new(),
            schema: Schema::default(),
            row_count: None,
            key_cols: Vec::new(),
            checks: CheckList::default(),
            analyses: Vec::new(),
            check_editor_open: false,
            editing: None,
            analysis_editor_open: false,
            code_dialog_open: false,
            schema_job: RequestSlot::default(),
            suggest_job: RequestSlot::default(),
            analysis_run: RequestSlot::default(),
            analysis_run_target: None,
        }
    }

    pub fn schema_columns(&self) -> Vec<String> {
        self.schema.names()
    }

    /// Trimmed data path, or `None` when nothing was entered.
    pub fn data_path(&self) -> Option<String> {
        let path = self.data_path.trim();
        (!path.is_empty()).then(|| path.to_string())
    }
}
