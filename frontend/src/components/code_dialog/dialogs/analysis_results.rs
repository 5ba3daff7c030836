use yew::prelude::*;

use common::model::results::{AnalysisPreview, Chart, DataTable};

pub fn analysis_preview(preview: &AnalysisPreview) -> Html {
    html! {
        <div class="analysis-preview">
            {
                if preview.status.is_empty() {
                    html! {}
                } else {
                    html! { <p class="muted">{ format!("Status: {}", preview.status) }</p> }
                }
            }
            { data_table(&preview.metrics) }
            { for preview.charts.iter().map(chart) }
        </div>
    }
}

fn data_table(table: &DataTable) -> Html {
    if table.is_empty() {
        return html! {};
    }
    html! {
        <table class="metrics">
            <thead>
                <tr>{ for table.columns.iter().map(|c| html! { <th>{ c }</th> }) }</tr>
            </thead>
            <tbody>
                { for table.rows.iter().map(|row| html! {
                    <tr>{ for row.iter().map(|cell| html! { <td>{ DataTable::cell_text(cell) }</td> }) }</tr>
                }) }
            </tbody>
        </table>
    }
}

/// Horizontal bars, one per label, sized by the label's share of the total.
fn chart(chart: &Chart) -> Html {
    html! {
        <figure class="chart" key={chart.id.clone()}>
            <figcaption>{ &chart.title }</figcaption>
            { for chart.slices().into_iter().map(|slice| html! {
                <div class="chart-row">
                    <span class="chart-label">{ &slice.label }</span>
                    <span class="chart-bar" style={format!("width: {}%;", slice.percent)} />
                    <span class="chart-value">{ format!("{} ({}%)", slice.value, slice.percent) }</span>
                </div>
            }) }
            { data_table(&chart.table) }
        </figure>
    }
}
