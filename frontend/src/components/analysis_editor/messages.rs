use common::model::analysis::AnalysisOption;

pub enum Msg {
    ToggleOption(AnalysisOption),
    ToggleColumn(String),
    RemoveColumn(String),
    SetColumnSearch(String),
    SetTopK(String),
    Save,
    Close,
}
