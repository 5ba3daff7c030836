use yew::prelude::*;

use common::model::analysis::Analysis;

#[derive(Properties, PartialEq, Clone)]
pub struct AnalysisEditorProps {
    pub open: bool,
    pub columns: Vec<String>,
    pub on_save: Callback<Analysis>,
    pub on_close: Callback<()>,
}
