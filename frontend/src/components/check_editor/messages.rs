pub enum Msg {
    SelectColumn(String),
    SetColumn(String),
    SetColumnSearch(String),
    SetCategory(String),
    SetDescription(String),
    Save,
    Close,
}
