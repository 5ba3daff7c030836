use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::analysis::{AnalysisGroup, AnalysisOption, TOP_K_RANGE};

use super::messages::Msg;
use super::AnalysisEditor;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn view(editor: &AnalysisEditor, ctx: &Context<AnalysisEditor>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let draft = &editor.draft;

    html! {
        <YwMaterialTopSheet open={props.open} title="Add Analysis" on_close={link.callback(|_| Msg::Close)} wide=true>
            <div class="analysis-editor">
                <div class="analysis-options">
                    { for AnalysisGroup::ALL.iter().map(|group| option_group(editor, link, *group)) }
                </div>
                <div class="analysis-columns">
                    { selected_columns(editor, link) }
                    { column_picker(editor, ctx) }
                </div>
                {
                    if draft.requires_columns() && !draft.has_selected_columns() {
                        html! { <p class="hint">{"Select at least one column for the chosen options"}</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="dialog-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::Close)}>{"Cancel"}</button>
                    <button
                        class="btn btn-primary"
                        disabled={!draft.can_save()}
                        onclick={link.callback(|_| Msg::Save)}
                    >
                        {"Save"}
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

fn option_group(editor: &AnalysisEditor, link: &Scope<AnalysisEditor>, group: AnalysisGroup) -> Html {
    html! {
        <fieldset class="option-group">
            <legend>{ group.label() }</legend>
            { for group.options().map(|option| option_row(editor, link, option)) }
        </fieldset>
    }
}

fn option_row(editor: &AnalysisEditor, link: &Scope<AnalysisEditor>, option: AnalysisOption) -> Html {
    let draft = &editor.draft;
    let enabled = draft.is_option_enabled(option);
    let selected = draft.is_selected(option);

    let top_k = if option == AnalysisOption::DistributionTopK && selected {
        html! {
            <input
                class="top-k"
                type="number"
                min={TOP_K_RANGE.start().to_string()}
                max={TOP_K_RANGE.end().to_string()}
                value={draft.top_k().to_string()}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetTopK(input.value())
                })}
            />
        }
    } else {
        html! {}
    };

    html! {
        <label class={classes!("option-row", (!enabled).then_some("disabled"))}>
            <input
                type="checkbox"
                checked={selected}
                disabled={!enabled}
                onchange={link.callback(move |_| Msg::ToggleOption(option))}
            />
            <span>{ option.label() }</span>
            { top_k }
        </label>
    }
}

fn selected_columns(editor: &AnalysisEditor, link: &Scope<AnalysisEditor>) -> Html {
    let columns = editor.draft.columns();
    if columns.is_empty() {
        return html! { <p class="muted">{"No columns selected"}</p> };
    }
    html! {
        <div class="chips">
            { for columns.iter().map(|column| {
                let value = column.clone();
                html! {
                    <span class="chip">
                        { column }
                        <button class="chip-remove" title="Remove" onclick={link.callback(move |_| Msg::RemoveColumn(value.clone()))}>
                            { "✕" }
                        </button>
                    </span>
                }
            }) }
        </div>
    }
}

fn column_picker(editor: &AnalysisEditor, ctx: &Context<AnalysisEditor>) -> Html {
    let link = ctx.link();
    let needle = editor.column_search.trim().to_lowercase();
    html! {
        <div class="field">
            <input
                type="search"
                placeholder="Search columns"
                value={editor.column_search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetColumnSearch(input.value())
                })}
            />
            <ul class="option-list">
                { for ctx.props().columns
                    .iter()
                    .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
                    .map(|column| {
                        let value = column.clone();
                        html! {
                            <li class="option">
                                <label>
                                    <input
                                        type="checkbox"
                                        checked={editor.draft.is_column_selected(column)}
                                        onchange={link.callback(move |_| Msg::ToggleColumn(value.clone()))}
                                    />
                                    { column }
                                </label>
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}
