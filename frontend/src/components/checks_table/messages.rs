pub enum Msg {
    ToggleColumnSort,
    ToggleCategorySort,
    SetColumnSearch(String),
    FilterColumn(String),
    FilterCategory(String),
    ClearFilters,
}
