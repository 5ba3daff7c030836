use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use common::jobs::pipeline::Stage;
use common::jobs::JobStatus;
use common::requests::Sanitize;

use super::dialogs::analysis_results::analysis_preview;
use super::dialogs::verify_results::verify_results;
use super::messages::Msg;
use super::state::{CodeDialog, Tab};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn view(dialog: &CodeDialog, ctx: &Context<CodeDialog>) -> Html {
    let link = ctx.link();

    html! {
        <YwMaterialTopSheet
            open={ctx.props().open}
            title="Generated Code"
            on_close={link.callback(|_| Msg::Close)}
            wide=true
        >
            <div class="code-dialog">
                { stage_banner(dialog) }
                <div class="tab-bar">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                class={classes!("tab-btn", (dialog.tab == tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetTab(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </div>
                {
                    match dialog.tab {
                        Tab::Checks => checks_tab(dialog, link),
                        Tab::Analysis => analysis_tab(dialog, ctx),
                        Tab::Mysql => mysql_tab(dialog, link),
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}

fn stage_banner(dialog: &CodeDialog) -> Html {
    let stage = dialog.pipeline.stage();
    if !dialog.pipeline.is_running() {
        return html! {};
    }
    let step = match stage {
        Stage::Transpiling => 1,
        Stage::Generating => 2,
        _ => 3,
    };
    html! {
        <div class="stage-banner">
            <div class="spin" />
            <span>{ format!("Step {step}/3: {}...", stage.label()) }</span>
        </div>
    }
}

fn code_block(code: Option<&str>, empty: &str, link: &Scope<CodeDialog>) -> Html {
    match code {
        Some(code) => {
            let copied = code.to_string();
            html! {
                <div class="code-block">
                    <button class="btn copy-btn" onclick={link.callback(move |_| Msg::Copy(copied.clone()))}>
                        {"Copy"}
                    </button>
                    <pre><code>{ code }</code></pre>
                </div>
            }
        }
        None => html! { <p class="muted">{ empty }</p> },
    }
}

fn checks_tab(dialog: &CodeDialog, link: &Scope<CodeDialog>) -> Html {
    let code = dialog.pipeline.generated_code();
    let verifying = dialog.verify.is_in_flight();

    html! {
        <div class="tab-content">
            { code_block(code, "No check code generated", link) }
            <div class="dialog-actions">
                <button
                    class="btn btn-primary"
                    disabled={code.is_none() || verifying || dialog.pipeline.is_running()}
                    onclick={link.callback(|_| Msg::VerifyCode)}
                >
                    { if verifying { "Verifying..." } else { "Preview Checks" } }
                </button>
            </div>
            {
                match dialog.verify.status() {
                    JobStatus::Completed(report) => verify_results(report),
                    JobStatus::Failed(message) => html! { <p class="error">{ message }</p> },
                    _ => html! {},
                }
            }
        </div>
    }
}

fn analysis_tab(dialog: &CodeDialog, ctx: &Context<CodeDialog>) -> Html {
    let link = ctx.link();
    let previewing = dialog.preview.is_in_flight();
    let no_analyses = ctx.props().analyses.is_empty();
    let results = dialog
        .pipeline
        .analysis_results()
        .map(|value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));

    html! {
        <div class="tab-content">
            { code_block(dialog.pipeline.analysis_code(), "No analysis code generated", link) }
            {
                match results {
                    Some(text) => html! {
                        <details class="analysis-results">
                            <summary>{"Batch results"}</summary>
                            <pre>{ text }</pre>
                        </details>
                    },
                    None => html! {},
                }
            }
            <div class="dialog-actions">
                <button
                    class="btn btn-primary"
                    disabled={no_analyses || previewing}
                    onclick={link.callback(|_| Msg::PreviewAnalysis)}
                >
                    { if previewing { "Running..." } else { "Preview Analysis" } }
                </button>
            </div>
            {
                match dialog.preview.status() {
                    JobStatus::Completed(preview) => analysis_preview(preview),
                    JobStatus::Failed(message) => html! { <p class="error">{ message }</p> },
                    _ => html! {},
                }
            }
        </div>
    }
}

fn mysql_tab(dialog: &CodeDialog, link: &Scope<CodeDialog>) -> Html {
    let generating = dialog.mysql.is_in_flight();

    html! {
        <div class="tab-content">
            <div class="field-row">
                <select onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetSanitize(select.value())
                })}>
                    { for [Sanitize::Sanitized, Sanitize::NonSanitized].iter().map(|option| html! {
                        <option value={option.label()} selected={dialog.sanitize == *option}>
                            { option.label() }
                        </option>
                    }) }
                </select>
                <button
                    class="btn btn-primary"
                    disabled={generating}
                    onclick={link.callback(|_| Msg::GenerateMysql)}
                >
                    { if generating { "Generating..." } else { "Generate MySQL Code" } }
                </button>
            </div>
            {
                match dialog.mysql.status() {
                    JobStatus::Failed(message) => html! { <p class="error">{ message }</p> },
                    _ => code_block(dialog.mysql.value().map(String::as_str), "No MySQL code generated", link),
                }
            }
        </div>
    }
}
