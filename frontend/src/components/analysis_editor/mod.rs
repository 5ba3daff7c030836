//! Add dialog for an analysis.
//!
//! Count options (row count, column count) are selectable only while no column
//! is selected; every other option needs at least one column. A column change
//! drops selections it made incompatible. The draft is reset every time the
//! dialog opens or closes.

use yew::prelude::*;

use common::model::analysis::AnalysisDraft;

mod messages;
mod props;
mod view;

pub use messages::Msg;
pub use props::AnalysisEditorProps;

#[derive(Default)]
pub struct AnalysisEditor {
    pub draft: AnalysisDraft,
    pub column_search: String,
}

impl Component for AnalysisEditor {
    type Message = Msg;
    type Properties = AnalysisEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().open != old_props.open {
            self.draft.reset();
            self.column_search.clear();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleOption(option) => self.draft.toggle_option(option),
            Msg::ToggleColumn(column) => {
                self.draft.toggle_column(&column);
                true
            }
            Msg::RemoveColumn(column) => {
                self.draft.remove_column(&column);
                true
            }
            Msg::SetColumnSearch(search) => {
                self.column_search = search;
                true
            }
            Msg::SetTopK(input) => {
                self.draft.set_top_k_input(&input);
                true
            }
            Msg::Save => {
                if let Some(analysis) = self.draft.finish() {
                    ctx.props().on_save.emit(analysis);
                    ctx.props().on_close.emit(());
                }
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
