use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::category::CheckCategory;

use super::messages::Msg;
use super::CheckEditor;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn view(editor: &CheckEditor, ctx: &Context<CheckEditor>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let title = if props.check.is_some() { "Edit Check" } else { "Add Check" };

    html! {
        <YwMaterialTopSheet open={props.open} title={title} on_close={link.callback(|_| Msg::Close)}>
            <div class="check-editor">
                { column_field(editor, ctx) }
                { category_field(editor, link) }
                <label class="field">
                    <span>{"Description"}</span>
                    <textarea
                        rows="3"
                        value={editor.draft.description.clone()}
                        placeholder={editor.draft.description_hint()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::SetDescription(input.value())
                        })}
                    />
                </label>
                <div class="dialog-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::Close)}>{"Cancel"}</button>
                    <button
                        class="btn btn-primary"
                        disabled={!editor.draft.can_save()}
                        onclick={link.callback(|_| Msg::Save)}
                    >
                        {"Save"}
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

fn column_field(editor: &CheckEditor, ctx: &Context<CheckEditor>) -> Html {
    let link = ctx.link();
    let columns = &ctx.props().columns;

    if columns.is_empty() {
        return html! {
            <label class="field">
                <span>{"Column"}</span>
                <input
                    type="text"
                    value={editor.draft.column.clone()}
                    placeholder="Column name"
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetColumn(input.value())
                    })}
                />
            </label>
        };
    }

    let needle = editor.column_search.trim().to_lowercase();
    html! {
        <div class="field">
            <span>{"Column"}</span>
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
                { for columns
                    .iter()
                    .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
                    .map(|column| {
                        let selected = editor.draft.column == *column;
                        let value = column.clone();
                        html! {
                            <li
                                class={classes!("option", selected.then_some("selected"))}
                                onclick={link.callback(move |_| Msg::SelectColumn(value.clone()))}
                            >
                                { column }
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}

fn category_field(editor: &CheckEditor, link: &Scope<CheckEditor>) -> Html {
    let current = editor.draft.category;
    html! {
        <label class="field">
            <span>{"Category"}</span>
            <select onchange={link.callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::SetCategory(select.value())
            })}>
                <option value="" selected={current.is_none()} disabled=true>{"Select a category"}</option>
                { for CheckCategory::ALL.iter().map(|category| html! {
                    <option value={category.label()} selected={current == Some(*category)}>
                        { category.label() }
                    </option>
                }) }
            </select>
        </label>
    }
}
