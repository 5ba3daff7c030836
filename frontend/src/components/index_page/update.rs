//! Update function for the index page.
//!
//! Elm-style: mutates the page state for a `Msg` and returns whether the view
//! should re-render. Requests are spawned here and come back as messages
//! carrying the ticket they were issued under; a response whose ticket is no
//! longer current is dropped.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::model::check::{Check, RuleId};
use common::model::schema::Schema;
use common::requests::TranspileResponse;

use super::messages::Msg;
use super::state::IndexPage;
use crate::helpers::{format_count, show_toast, show_toast_kind, warn_row_errors, ToastKind};

const MISSING_PATH: &str = "Please enter a data path";

pub fn update(page: &mut IndexPage, ctx: &Context<IndexPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetDataPath(path) => {
            page.data_path = path;
            true
        }
        Msg::LoadSchema => {
            let Some(path) = page.data_path() else {
                show_toast_kind(MISSING_PATH, ToastKind::Warning);
                return false;
            };
            let Some(ticket) = page.schema_job.begin() else {
                return false;
            };
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.fetch_schema(&path).await;
                link.send_message(Msg::SchemaLoaded(ticket, result));
            });
            true
        }
        Msg::SchemaLoaded(ticket, result) => match result {
            Ok(response) => {
                if !page.schema_job.finish(ticket, Ok(())) {
                    return false;
                }
                page.schema = Schema::from(response);
                let schema = &page.schema;
                page.key_cols.retain(|column| schema.contains(column));
                show_toast(&format!("Loaded {} columns", page.schema.columns.len()));
                true
            }
            Err(err) => report_failure(page.schema_job.finish(ticket, Err(err.clone())), &err),
        },
        Msg::ToggleKeyCol(column) => {
            match page.key_cols.iter().position(|c| *c == column) {
                Some(index) => {
                    page.key_cols.remove(index);
                }
                None => page.key_cols.push(column),
            }
            true
        }
        Msg::GetSuggestions => {
            let Some(path) = page.data_path() else {
                show_toast_kind(MISSING_PATH, ToastKind::Warning);
                return false;
            };
            let Some(ticket) = page.suggest_job.begin() else {
                return false;
            };
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            let key_cols = page.key_cols.clone();
            spawn_local(async move {
                let result = client.suggest_checks(&path, key_cols).await;
                link.send_message(Msg::SuggestionsLoaded(ticket, result));
            });
            true
        }
        Msg::SuggestionsLoaded(ticket, result) => match result {
            Ok(response) => {
                if !page.suggest_job.finish(ticket, Ok(())) {
                    return false;
                }
                let count = response.rows.len();
                page.checks.replace_all(response.rows);
                page.row_count = Some(response.row_count);
                if let Some(columns) = response.schema {
                    page.schema = Schema::new(columns);
                }
                show_toast(&format!(
                    "{count} suggested checks for {} rows",
                    format_count(response.row_count)
                ));
                true
            }
            Err(err) => report_failure(page.suggest_job.finish(ticket, Err(err.clone())), &err),
        },

        Msg::OpenCheckEditor(target) => {
            page.editing = target;
            page.check_editor_open = true;
            true
        }
        Msg::CloseCheckEditor => {
            page.check_editor_open = false;
            page.editing = None;
            true
        }
        Msg::SaveCheck(payload) => {
            let id = match page.editing.clone() {
                Some(id) if page.checks.update(&id, payload.clone()) => id,
                _ => page.checks.add(payload),
            };
            show_toast("Check saved");
            transpile_saved(page, ctx, &id);
            true
        }
        Msg::CheckTranspiled { sent, result } => match result {
            Ok(TranspileResponse { rows, errors }) => {
                let merged = page.checks.merge_if_unchanged(&sent, &rows);
                if merged < rows.len() {
                    log!(format!(
                        "Dropped {} transpiled rows for checks edited meanwhile",
                        rows.len() - merged
                    ));
                }
                warn_row_errors(&errors);
                merged > 0
            }
            Err(err) => {
                show_toast_kind(&format!("Code generation failed: {err}"), ToastKind::Error);
                false
            }
        },
        Msg::PipelineTranspiled { sent, merged } => page.checks.merge_if_unchanged(&sent, &merged) > 0,
        Msg::DeleteCheck(id) => {
            if page.checks.remove(&id).is_some() {
                show_toast("Check deleted");
            }
            true
        }
        Msg::SetInclude(id, include) => page.checks.set_include(&id, include),

        Msg::OpenAnalysisEditor => {
            page.analysis_editor_open = true;
            true
        }
        Msg::CloseAnalysisEditor => {
            page.analysis_editor_open = false;
            true
        }
        Msg::SaveAnalysis(analysis) => {
            page.analyses.push(analysis);
            show_toast("Analysis saved");
            true
        }
        Msg::DeleteAnalysis(id) => {
            page.analyses.retain(|a| a.id != id);
            if page.analysis_run_target.as_ref() == Some(&id) {
                page.analysis_run.reset();
                page.analysis_run_target = None;
            }
            true
        }
        Msg::RunAnalysis(id) => {
            let Some(path) = page.data_path() else {
                show_toast_kind(MISSING_PATH, ToastKind::Warning);
                return false;
            };
            let Some(analysis) = page.analyses.iter().find(|a| a.id == id).cloned() else {
                return false;
            };
            let Some(ticket) = page.analysis_run.begin() else {
                return false;
            };
            page.analysis_run_target = Some(id);
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.run_analysis(&path, &analysis).await;
                link.send_message(Msg::AnalysisRan(ticket, result));
            });
            true
        }
        Msg::AnalysisRan(ticket, result) => {
            let failure = result.as_ref().err().cloned();
            let accepted = page.analysis_run.finish(ticket, result.map(|r| r.results));
            match failure {
                Some(err) => report_failure(accepted, &err),
                None => accepted,
            }
        }

        Msg::OpenCodeDialog => {
            page.code_dialog_open = true;
            true
        }
        Msg::CloseCodeDialog => {
            page.code_dialog_open = false;
            true
        }
    }
}

/// Transpiles the check just saved so its code is regenerated from the new
/// description.
fn transpile_saved(page: &IndexPage, ctx: &Context<IndexPage>, id: &RuleId) {
    let Some(check) = page.checks.get(id).filter(|c| c.needs_code()) else {
        return;
    };
    let sent: Vec<Check> = vec![check.clone()];
    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = client.transpile_checks(sent.clone()).await;
        link.send_message(Msg::CheckTranspiled { sent, result });
    });
}

/// Toasts a failure unless its response was stale. Returns whether to re-render.
fn report_failure(accepted: bool, err: &ApiError) -> bool {
    if !accepted {
        log!(format!("Dropped stale failure: {err}"));
        return false;
    }
    error!(err.to_string());
    show_toast_kind(&err.to_string(), ToastKind::Error);
    true
}
