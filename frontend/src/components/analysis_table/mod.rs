//! List of saved analyses with run and delete actions. The result of the last
//! single run is shown under its row as formatted JSON.

use serde_json::Value;
use yew::prelude::*;

use common::model::analysis::{option_label, Analysis};
use common::model::check::RuleId;

#[derive(Properties, PartialEq, Clone)]
pub struct AnalysisTableProps {
    pub analyses: Vec<Analysis>,
    /// Analysis whose single run is in flight.
    #[prop_or_default]
    pub running: Option<RuleId>,
    /// Result of the last single run, keyed by analysis.
    #[prop_or_default]
    pub result: Option<(RuleId, Value)>,
    pub on_run: Callback<RuleId>,
    pub on_delete: Callback<RuleId>,
}

pub struct AnalysisTable;

fn columns_label(analysis: &Analysis) -> String {
    if analysis.columns.is_empty() {
        "All columns".to_string()
    } else {
        analysis.columns.join(", ")
    }
}

fn options_label(analysis: &Analysis) -> String {
    analysis
        .options
        .iter()
        .map(|id| option_label(id))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Component for AnalysisTable {
    type Message = ();
    type Properties = AnalysisTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AnalysisTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.analyses.is_empty() {
            return html! { <p class="muted">{"No analyses"}</p> };
        }

        html! {
            <table class="analysis-table">
                <thead>
                    <tr>
                        <th>{"Analyses"}</th>
                        <th>{"Columns"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.analyses.iter().map(|analysis| analysis_row(props, analysis)) }
                </tbody>
            </table>
        }
    }
}

fn analysis_row(props: &AnalysisTableProps, analysis: &Analysis) -> Html {
    let running = props.running.as_ref() == Some(&analysis.id);
    let on_run = {
        let id = analysis.id.clone();
        props.on_run.reform(move |_: MouseEvent| id.clone())
    };
    let on_delete = {
        let id = analysis.id.clone();
        props.on_delete.reform(move |_: MouseEvent| id.clone())
    };
    let result = props
        .result
        .as_ref()
        .filter(|(id, _)| *id == analysis.id)
        .map(|(_, value)| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));

    html! {
        <>
            <tr>
                <td>{ options_label(analysis) }</td>
                <td>{ columns_label(analysis) }</td>
                <td class="row-actions">
                    <button class="icon-btn" disabled={props.running.is_some()} onclick={on_run}>
                        { if running { "Running..." } else { "Run" } }
                    </button>
                    <button class="icon-btn" title="Delete" onclick={on_delete}>{"Delete"}</button>
                </td>
            </tr>
            {
                match result {
                    Some(text) => html! {
                        <tr class="analysis-result">
                            <td colspan="3"><pre>{ text }</pre></td>
                        </tr>
                    },
                    None => html! {},
                }
            }
        </>
    }
}
