//! Message handling for the code dialog.
//!
//! The pipeline decides what to send next; this module only performs the
//! request it asks for and reports its notices to the user.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::jobs::pipeline::{PipelineCommand, PipelineNotice, Step};
use common::jobs::Ticket;
use common::requests::{analysis_specs, Sanitize};

use super::messages::Msg;
use super::state::CodeDialog;
use crate::helpers::{copy_to_clipboard, show_toast_kind, warn_row_errors, ToastKind};

/// Starts a new run over the current props, superseding any previous one.
pub fn start_run(dialog: &mut CodeDialog, ctx: &Context<CodeDialog>) {
    let props = ctx.props();
    dialog.started_with = props.checks.clone();
    let (ticket, step) = dialog.pipeline.start(
        props.data_path.clone(),
        props.checks.clone(),
        props.analyses.clone(),
    );
    log!(format!("Code pipeline run started: {}", dialog.pipeline.stage().label()));
    dispatch(dialog, ctx, ticket, step);
}

/// Reports the notices of a transition and sends its request, if any.
fn dispatch(dialog: &CodeDialog, ctx: &Context<CodeDialog>, ticket: Ticket, step: Step) {
    for notice in step.notices {
        match notice {
            PipelineNotice::ChecksUpdated => ctx.props().on_checks_transpiled.emit((
                dialog.started_with.clone(),
                dialog.pipeline.checks().to_vec(),
            )),
            PipelineNotice::TranspileWarnings(errors) => warn_row_errors(&errors),
            PipelineNotice::Failed { stage, error: err } => {
                error!(format!("Code pipeline failed while {}: {err}", stage.label()));
                show_toast_kind(&err.to_string(), ToastKind::Error);
            }
            PipelineNotice::Stale { stage } => {
                log!(format!("Dropped stale response while {}", stage.label()));
            }
        }
    }

    let Some(command) = step.command else {
        return;
    };
    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    match command {
        PipelineCommand::Transpile(request) => spawn_local(async move {
            let result = client.transpile(request).await;
            link.send_message(Msg::Transpiled(ticket, result));
        }),
        PipelineCommand::Generate(request) => spawn_local(async move {
            let result = client.generate_code(request).await;
            link.send_message(Msg::Generated(ticket, result));
        }),
        PipelineCommand::BatchAnalyze(request) => spawn_local(async move {
            let result = client.batch_analysis(request).await;
            link.send_message(Msg::BatchAnalyzed(ticket, result));
        }),
    }
}

pub fn update(dialog: &mut CodeDialog, ctx: &Context<CodeDialog>, msg: Msg) -> bool {
    match msg {
        Msg::Transpiled(ticket, result) => {
            let step = dialog.pipeline.on_transpiled(ticket, result);
            dispatch(dialog, ctx, ticket, step);
            true
        }
        Msg::Generated(ticket, result) => {
            let step = dialog.pipeline.on_generated(ticket, result);
            dispatch(dialog, ctx, ticket, step);
            true
        }
        Msg::BatchAnalyzed(ticket, result) => {
            let step = dialog.pipeline.on_batch_analyzed(ticket, result);
            dispatch(dialog, ctx, ticket, step);
            true
        }

        Msg::VerifyCode => {
            let path = ctx.props().data_path.clone();
            let Some(code) = dialog.pipeline.generated_code().map(str::to_string) else {
                return false;
            };
            if path.is_empty() {
                show_toast_kind("Please enter a data path", ToastKind::Warning);
                return false;
            }
            let Some(ticket) = dialog.verify.begin() else {
                return false;
            };
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.verify_code(&path, &code).await;
                link.send_message(Msg::Verified(ticket, result));
            });
            true
        }
        Msg::Verified(ticket, result) => {
            let failure = result.as_ref().err().cloned();
            finished(dialog.verify.finish(ticket, result), failure)
        }

        Msg::PreviewAnalysis => {
            let props = ctx.props();
            if props.data_path.is_empty() || props.analyses.is_empty() {
                return false;
            }
            let Some(ticket) = dialog.preview.begin() else {
                return false;
            };
            let client = props.client.clone();
            let link = ctx.link().clone();
            let path = props.data_path.clone();
            let analyses = analysis_specs(&props.analyses);
            spawn_local(async move {
                let result = client.preview_analysis(&path, analyses).await;
                link.send_message(Msg::Previewed(ticket, result));
            });
            true
        }
        Msg::Previewed(ticket, result) => {
            let failure = result.as_ref().err().cloned();
            finished(dialog.preview.finish(ticket, result), failure)
        }

        Msg::SetSanitize(label) => {
            dialog.sanitize = if label == Sanitize::NonSanitized.label() {
                Sanitize::NonSanitized
            } else {
                Sanitize::Sanitized
            };
            true
        }
        Msg::GenerateMysql => {
            let data_set = ctx.props().data_path.clone();
            if data_set.is_empty() {
                show_toast_kind("Please enter a data path", ToastKind::Warning);
                return false;
            }
            let Some(ticket) = dialog.mysql.begin() else {
                return false;
            };
            let sanitize = dialog.sanitize;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.mysql_code(&data_set, sanitize).await;
                link.send_message(Msg::MysqlGenerated(ticket, result));
            });
            true
        }
        Msg::MysqlGenerated(ticket, result) => {
            let failure = result.as_ref().err().cloned();
            finished(dialog.mysql.finish(ticket, result.map(|r| r.code)), failure)
        }

        Msg::SetTab(tab) => {
            dialog.tab = tab;
            true
        }
        Msg::Copy(code) => {
            copy_to_clipboard(code);
            false
        }
        Msg::Close => {
            ctx.props().on_close.emit(());
            false
        }
    }
}

/// Toasts the failure of an accepted manual request. Returns whether to re-render.
fn finished(accepted: bool, failure: Option<ApiError>) -> bool {
    if !accepted {
        log!("Dropped stale response");
        return false;
    }
    if let Some(err) = failure {
        show_toast_kind(&err.to_string(), ToastKind::Error);
    }
    true
}
