//! Add/edit dialog for a single check.
//!
//! The editor only collects the form. On save it emits a `CheckPayload`
//! without id and closes; the page assigns the id and triggers transpilation.
//! Closing without saving discards the draft.

use gloo_console::warn;
use std::str::FromStr;
use yew::prelude::*;

use common::model::category::CheckCategory;
use common::model::check::CheckDraft;

mod messages;
mod props;
mod view;

pub use messages::Msg;
pub use props::CheckEditorProps;

pub struct CheckEditor {
    pub draft: CheckDraft,
    pub column_search: String,
}

impl CheckEditor {
    fn draft_for(props: &CheckEditorProps) -> CheckDraft {
        props
            .check
            .as_ref()
            .map(CheckDraft::from_check)
            .unwrap_or_default()
    }
}

impl Component for CheckEditor {
    type Message = Msg;
    type Properties = CheckEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: Self::draft_for(ctx.props()),
            column_search: String::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let target = props.check.as_ref().map(|c| &c.id);
        let old_target = old_props.check.as_ref().map(|c| &c.id);
        // A merge into the edited check must not wipe what is being typed.
        if props.open != old_props.open || target != old_target {
            self.draft = Self::draft_for(props);
            self.column_search.clear();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectColumn(column) => {
                self.draft.select_column(&column);
                true
            }
            Msg::SetColumn(column) => {
                self.draft.column = column.trim().to_string();
                true
            }
            Msg::SetColumnSearch(search) => {
                self.column_search = search;
                true
            }
            Msg::SetCategory(label) => {
                match CheckCategory::from_str(&label) {
                    Ok(category) => self.draft.category = Some(category),
                    Err(err) => {
                        warn!(err.to_string());
                        self.draft.category = None;
                    }
                }
                true
            }
            Msg::SetDescription(description) => {
                self.draft.description = description;
                true
            }
            Msg::Save => {
                let Some(payload) = self.draft.to_payload() else {
                    return false;
                };
                ctx.props().on_save.emit(payload);
                ctx.props().on_close.emit(());
                false
            }
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
