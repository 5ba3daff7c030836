use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::category::CheckCategory;
use common::model::check::Check;
use common::table::SortOrder;

use super::messages::Msg;
use super::ChecksTable;

fn sort_marker(order: Option<SortOrder>) -> &'static str {
    match order {
        None => "↕",
        Some(SortOrder::Asc) => "↑",
        Some(SortOrder::Desc) => "↓",
    }
}

pub fn view(table: &ChecksTable, ctx: &Context<ChecksTable>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let rows = table.table.apply(&props.checks);

    html! {
        <div class="checks-table">
            { filter_bar(table, ctx) }
            <table>
                <thead>
                    <tr>
                        <th>{"Include"}</th>
                        <th class="sortable" onclick={link.callback(|_| Msg::ToggleColumnSort)}>
                            {"Column "}{ sort_marker(table.table.column_sort) }
                        </th>
                        <th class="sortable" onclick={link.callback(|_| Msg::ToggleCategorySort)}>
                            {"Category "}{ sort_marker(table.table.category_sort) }
                        </th>
                        <th>{"Description"}</th>
                        <th>{"Current Value"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if rows.is_empty() {
                            html! { <tr><td colspan="6" class="muted">{"No checks found"}</td></tr> }
                        } else {
                            html! { for rows.into_iter().map(|check| check_row(ctx, check)) }
                        }
                    }
                </tbody>
            </table>
        </div>
    }
}

fn filter_bar(table: &ChecksTable, ctx: &Context<ChecksTable>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let view = &table.table;
    let candidates = view.filter_candidates(&props.schema_columns, &props.checks);

    html! {
        <div class="filter-bar">
            <input
                type="search"
                placeholder="Search columns"
                value={view.column_search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetColumnSearch(input.value())
                })}
            />
            <select onchange={link.callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::FilterColumn(select.value())
            })}>
                <option value="" selected={view.column_filter.is_none()}>{"All columns"}</option>
                { for candidates.iter().map(|column| html! {
                    <option value={column.clone()} selected={view.column_filter.as_ref() == Some(column)}>
                        { column }
                    </option>
                }) }
            </select>
            { category_filter(table, link) }
            <button class="btn" disabled={!view.has_filters()} onclick={link.callback(|_| Msg::ClearFilters)}>
                {"Clear filters"}
            </button>
        </div>
    }
}

fn category_filter(table: &ChecksTable, link: &Scope<ChecksTable>) -> Html {
    let current = table.table.category_filter;
    html! {
        <select onchange={link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::FilterCategory(select.value())
        })}>
            <option value="" selected={current.is_none()}>{"All categories"}</option>
            { for CheckCategory::ALL.iter().map(|category| html! {
                <option value={category.label()} selected={current == Some(*category)}>
                    { category.label() }
                </option>
            }) }
        </select>
    }
}

fn check_row(ctx: &Context<ChecksTable>, check: &Check) -> Html {
    let props = ctx.props();
    let on_edit = {
        let id = check.id.clone();
        props.on_edit.reform(move |_: MouseEvent| id.clone())
    };
    let on_delete = {
        let id = check.id.clone();
        props.on_delete.reform(move |_: MouseEvent| id.clone())
    };
    let on_include = {
        let id = check.id.clone();
        props.on_include.reform(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (id.clone(), input.checked())
        })
    };

    html! {
        <tr key={check.id.to_string()} class={classes!((!check.include).then_some("excluded"))}>
            <td><input type="checkbox" checked={check.include} onchange={on_include} /></td>
            <td>{ &check.column }</td>
            <td><span class={classes!("badge", check.category.badge_class())}>{ check.category.label() }</span></td>
            <td title={check.code.clone()}>{ &check.description }</td>
            <td>{ check.current_value_display() }</td>
            <td class="row-actions">
                <button class="icon-btn" title="Edit" onclick={on_edit}>{"Edit"}</button>
                <button class="icon-btn" title="Delete" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
