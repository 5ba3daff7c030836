use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::check::{Check, RuleId};

use super::messages::Msg;
use super::state::IndexPage;
use crate::components::analysis_editor::AnalysisEditor;
use crate::components::analysis_table::AnalysisTable;
use crate::components::check_editor::CheckEditor;
use crate::components::checks_table::ChecksTable;
use crate::components::code_dialog::CodeDialog;
use crate::helpers::format_count;

pub fn view(page: &IndexPage, ctx: &Context<IndexPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="index-page">
            { data_source_panel(page, link) }

            <section class="panel">
                <div class="panel-header">
                    <h2>{"Checks"}</h2>
                    <div class="panel-actions">
                        <button class="btn" onclick={link.callback(|_| Msg::OpenCheckEditor(None))}>
                            {"Add Check"}
                        </button>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCodeDialog)}>
                            {"Generate Code"}
                        </button>
                    </div>
                </div>
                <ChecksTable
                    checks={page.checks.checks().to_vec()}
                    schema_columns={page.schema_columns()}
                    on_edit={link.callback(|id| Msg::OpenCheckEditor(Some(id)))}
                    on_delete={link.callback(Msg::DeleteCheck)}
                    on_include={link.callback(|(id, include): (RuleId, bool)| Msg::SetInclude(id, include))}
                />
            </section>

            <section class="panel">
                <div class="panel-header">
                    <h2>{"Analyses"}</h2>
                    <button class="btn" onclick={link.callback(|_| Msg::OpenAnalysisEditor)}>
                        {"Add Analysis"}
                    </button>
                </div>
                <AnalysisTable
                    analyses={page.analyses.clone()}
                    running={page.analysis_run.is_in_flight().then(|| page.analysis_run_target.clone()).flatten()}
                    result={page.analysis_run_target.clone().zip(page.analysis_run.value().cloned())}
                    on_run={link.callback(Msg::RunAnalysis)}
                    on_delete={link.callback(Msg::DeleteAnalysis)}
                />
            </section>

            { dialogs(page, ctx) }
        </div>
    }
}

fn data_source_panel(page: &IndexPage, link: &Scope<IndexPage>) -> Html {
    let loading_schema = page.schema_job.is_in_flight();
    let suggesting = page.suggest_job.is_in_flight();

    html! {
        <section class="panel data-source">
            <div class="field-row">
                <input
                    type="text"
                    class="data-path"
                    placeholder="Data path, e.g. /data/claims.parquet"
                    value={page.data_path.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetDataPath(input.value())
                    })}
                />
                <button class="btn" disabled={loading_schema} onclick={link.callback(|_| Msg::LoadSchema)}>
                    { if loading_schema { "Loading..." } else { "Load Schema" } }
                </button>
                <button class="btn btn-primary" disabled={suggesting} onclick={link.callback(|_| Msg::GetSuggestions)}>
                    { if suggesting { "Suggesting..." } else { "Get Suggestions" } }
                </button>
            </div>
            {
                match page.row_count {
                    Some(rows) => html! { <p class="muted">{ format!("{} rows", format_count(rows)) }</p> },
                    None => html! {},
                }
            }
            { key_columns(page, link) }
        </section>
    }
}

/// Multiselect of the key columns sent with the suggestion request.
fn key_columns(page: &IndexPage, link: &Scope<IndexPage>) -> Html {
    if page.schema.is_empty() {
        return html! {};
    }
    html! {
        <div class="key-columns">
            <span>{"Key columns"}</span>
            <div class="chips">
                { for page.schema.columns.iter().map(|column| {
                    let name = column.name().to_string();
                    let selected = page.key_cols.contains(&name);
                    let title = column.data_type().unwrap_or_default().to_string();
                    let value = name.clone();
                    html! {
                        <button
                            class={classes!("chip", selected.then_some("selected"))}
                            title={title}
                            onclick={link.callback(move |_| Msg::ToggleKeyCol(value.clone()))}
                        >
                            { name }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn dialogs(page: &IndexPage, ctx: &Context<IndexPage>) -> Html {
    let link = ctx.link();
    let editing = page.editing.as_ref().and_then(|id| page.checks.get(id)).cloned();

    html! {
        <>
            <CheckEditor
                open={page.check_editor_open}
                check={editing}
                columns={page.schema_columns()}
                on_save={link.callback(Msg::SaveCheck)}
                on_close={link.callback(|_| Msg::CloseCheckEditor)}
            />
            <AnalysisEditor
                open={page.analysis_editor_open}
                columns={page.schema_columns()}
                on_save={link.callback(Msg::SaveAnalysis)}
                on_close={link.callback(|_| Msg::CloseAnalysisEditor)}
            />
            <CodeDialog
                open={page.code_dialog_open}
                client={ctx.props().client.clone()}
                data_path={page.data_path.trim().to_string()}
                checks={page.checks.checks().to_vec()}
                analyses={page.analyses.clone()}
                on_checks_transpiled={link.callback(|(sent, merged): (Vec<Check>, Vec<Check>)| {
                    Msg::PipelineTranspiled { sent, merged }
                })}
                on_close={link.callback(|_| Msg::CloseCodeDialog)}
            />
        </>
    }
}
