//! Filterable, sortable list of the page's checks with edit, delete and
//! include actions. The table never mutates checks itself: every change goes
//! back to the page through its callbacks.

use std::str::FromStr;

use yew::prelude::*;

use common::model::category::CheckCategory;
use common::table::ChecksView;

mod messages;
mod props;
mod view;

pub use messages::Msg;
pub use props::ChecksTableProps;

#[derive(Default)]
pub struct ChecksTable {
    pub table: ChecksView,
}

impl Component for ChecksTable {
    type Message = Msg;
    type Properties = ChecksTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleColumnSort => self.table.toggle_column_sort(),
            Msg::ToggleCategorySort => self.table.toggle_category_sort(),
            Msg::SetColumnSearch(search) => self.table.column_search = search,
            Msg::FilterColumn(column) if column.is_empty() => self.table.column_filter = None,
            Msg::FilterColumn(column) => self.table.filter_column(&column),
            Msg::FilterCategory(label) => match CheckCategory::from_str(&label) {
                Ok(category) => self.table.filter_category(category),
                Err(_) => self.table.category_filter = None,
            },
            Msg::ClearFilters => self.table.clear_filters(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
