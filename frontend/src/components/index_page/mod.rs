//! Index page: data path, schema, the check and analysis lists and the
//! dialogs that edit them.
//!
//! `update` holds the message handling; `view` renders the page and mounts the
//! editors and the code dialog.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::IndexPageProps;
pub use state::IndexPage;

impl Component for IndexPage {
    type Message = Msg;
    type Properties = IndexPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        IndexPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
