use yew::prelude::*;

use common::model::results::VerificationReport;

/// Summary and per-constraint table of a verification run.
pub fn verify_results(report: &VerificationReport) -> Html {
    html! {
        <div class="verify-results">
            <div class="summary">
                <span class="metric">{ format!("Success rate: {}%", report.success_rate()) }</span>
                <span class="metric">{ format!("Total: {}", report.total) }</span>
                <span class="metric ok">{ format!("Passed: {}", report.success) }</span>
                <span class="metric failed">{ format!("Failed: {}", report.failure) }</span>
            </div>
            <table>
                <thead>
                    <tr>
                        <th>{"Constraint"}</th>
                        <th>{"Status"}</th>
                        <th>{"Current Value"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for report.per_constraint.iter().map(|row| html! {
                        <tr>
                            <td>{ &row.constraint }</td>
                            <td>
                                <span class={classes!("badge", if row.passed() { "badge-ok" } else { "badge-failed" })}>
                                    { &row.constraint_status }
                                </span>
                            </td>
                            <td>{ row.current_value.as_deref().unwrap_or("-") }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
