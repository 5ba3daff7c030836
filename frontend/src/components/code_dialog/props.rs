use yew::prelude::*;

use common::model::analysis::Analysis;
use common::model::check::Check;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct CodeDialogProps {
    pub open: bool,
    pub client: ApiClient,
    pub data_path: String,
    pub checks: Vec<Check>,
    pub analyses: Vec<Analysis>,
    /// `(sent, merged)`: the checks a run started with and the same checks
    /// after the transpile merge.
    pub on_checks_transpiled: Callback<(Vec<Check>, Vec<Check>)>,
    pub on_close: Callback<()>,
}
