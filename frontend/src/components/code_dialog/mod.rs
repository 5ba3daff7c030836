//! Code dialog: generated check code, analysis code and results.
//!
//! Opening the dialog starts a [`CodePipeline`] run (transpile, generate,
//! batch analysis). While open, a run is restarted whenever the page's data
//! path, checks or analyses differ from what the run is working on. Closing
//! cancels the run; responses still in flight are dropped by ticket.
//!
//! Verification, analysis preview and MySQL code are manual actions with a
//! request slot each, so a control stays disabled while its request is out.
//!
//! [`CodePipeline`]: common::jobs::pipeline::CodePipeline

use yew::prelude::*;

mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CodeDialogProps;
pub use state::CodeDialog;

impl Component for CodeDialog {
    type Message = Msg;
    type Properties = CodeDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut dialog = CodeDialog::new();
        if ctx.props().open {
            update::start_run(&mut dialog, ctx);
        }
        dialog
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if !props.open {
            if old_props.open {
                self.reset();
            }
            return true;
        }
        let reopened = !old_props.open;
        let outdated = self
            .pipeline
            .is_outdated(&props.data_path, &props.checks, &props.analyses);
        if reopened || outdated {
            update::start_run(self, ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
