use yew::prelude::*;

use common::model::check::{Check, RuleId};

#[derive(Properties, PartialEq, Clone)]
pub struct ChecksTableProps {
    pub checks: Vec<Check>,
    /// Schema columns offered by the column filter; falls back to the checks' columns.
    #[prop_or_default]
    pub schema_columns: Vec<String>,
    pub on_edit: Callback<RuleId>,
    pub on_delete: Callback<RuleId>,
    pub on_include: Callback<(RuleId, bool)>,
}
