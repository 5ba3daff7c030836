use common::error::ApiError;
use common::jobs::pipeline::{CodePipeline, PipelineCommand, PipelineNotice, Stage};
use common::model::analysis::Analysis;
use common::model::category::CheckCategory;
use common::model::check::{Check, RuleId};
use common::requests::{BatchAnalysisResponse, GenerateResponse, RowError, TranspileResponse};
use pretty_assertions::assert_eq;
use serde_json::json;

const PATH: &str = "/data/x.parquet";

fn check(id: i64, column: &str, code: &str) -> Check {
    Check {
        id: RuleId::from(id),
        column: column.to_string(),
        category: CheckCategory::Other,
        description: format!("{column} is not null"),
        rule: None,
        code: code.to_string(),
        current_value: None,
        include: true,
    }
}

fn analysis(options: &[&str], columns: &[&str]) -> Analysis {
    Analysis {
        id: RuleId::generate(),
        options: options.iter().map(|o| o.to_string()).collect(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
    }
}

fn generated(code: &str) -> Result<GenerateResponse, ApiError> {
    Ok(GenerateResponse {
        code: code.to_string(),
    })
}

#[test]
fn check_without_code_is_transpiled_then_generated_then_analyzed() {
    let mut pipeline = CodePipeline::default();
    let checks = vec![check(1, "A", ""), check(2, "B", ".isUnique(\"B\")")];
    let analyses = vec![analysis(&["stats_row_count"], &[])];

    let (ticket, step) = pipeline.start(PATH, checks, analyses);
    assert_eq!(pipeline.stage(), Stage::Transpiling);
    let Some(PipelineCommand::Transpile(request)) = step.command else {
        panic!("expected a transpile request");
    };
    assert_eq!(request.rows.len(), 1);
    assert_eq!(request.rows[0].id, RuleId::from(1));
    assert!(!request.force_all);

    let step = pipeline.on_transpiled(
        ticket,
        Ok(TranspileResponse {
            rows: vec![check(1, "A", ".isComplete(\"A\")")],
            errors: vec![],
        }),
    );
    assert_eq!(step.notices, vec![PipelineNotice::ChecksUpdated]);
    assert_eq!(pipeline.stage(), Stage::Generating);
    let Some(PipelineCommand::Generate(request)) = step.command else {
        panic!("expected a generate request");
    };
    assert_eq!(request.level, "Error");
    assert_eq!(request.check_name, "Data Quality Checks");
    assert_eq!(request.rows.len(), 2);
    assert_eq!(request.rows[0].code, ".isComplete(\"A\")");
    assert_eq!(pipeline.checks()[0].category, CheckCategory::Completeness);

    let step = pipeline.on_generated(ticket, generated("val suite = ..."));
    assert_eq!(pipeline.stage(), Stage::BatchAnalyzing);
    let Some(PipelineCommand::BatchAnalyze(request)) = step.command else {
        panic!("expected a batch analysis request");
    };
    assert_eq!(request.path, PATH);
    assert_eq!(request.analyses[0].options, vec!["stats_row_count".to_string()]);

    let step = pipeline.on_batch_analyzed(
        ticket,
        Ok(BatchAnalysisResponse {
            results: json!({ "row_count": 10 }),
            code: "val analysis = ...".to_string(),
        }),
    );
    assert_eq!(step.command, None);
    assert_eq!(pipeline.stage(), Stage::Ready);
    assert_eq!(pipeline.generated_code(), Some("val suite = ..."));
    assert_eq!(pipeline.analysis_code(), Some("val analysis = ..."));
    assert_eq!(pipeline.analysis_results(), Some(&json!({ "row_count": 10 })));
}

#[test]
fn complete_checks_skip_transpile_and_empty_analyses_skip_batch() {
    let mut pipeline = CodePipeline::default();
    let (ticket, step) = pipeline.start(PATH, vec![check(1, "A", ".hasSize(_ > 0)")], vec![]);
    assert!(matches!(step.command, Some(PipelineCommand::Generate(_))));

    let step = pipeline.on_generated(ticket, generated("code"));
    assert_eq!(step, Default::default());
    assert_eq!(pipeline.stage(), Stage::Ready);
    assert_eq!(pipeline.analysis_results(), None);
    assert_eq!(pipeline.analysis_code(), None);
}

#[test]
fn failed_batch_analysis_keeps_generated_code() {
    let mut pipeline = CodePipeline::default();
    let analyses = vec![analysis(&["stats_mean"], &["AMT"])];

    let (first, _) = pipeline.start(PATH, vec![check(1, "A", ".isComplete(\"A\")")], analyses.clone());
    pipeline.on_generated(first, generated("old"));
    pipeline.on_batch_analyzed(
        first,
        Ok(BatchAnalysisResponse {
            results: json!([1]),
            code: "old analysis".to_string(),
        }),
    );

    let (ticket, _) = pipeline.start(PATH, vec![check(1, "A", ".isComplete(\"A\")")], analyses);
    pipeline.on_generated(ticket, generated("suite code"));
    let step = pipeline.on_batch_analyzed(ticket, Err(ApiError::Network("reset".to_string())));

    assert_eq!(
        step.notices,
        vec![PipelineNotice::Failed {
            stage: Stage::BatchAnalyzing,
            error: ApiError::Network("reset".to_string()),
        }]
    );
    assert_eq!(pipeline.stage(), Stage::Ready);
    assert_eq!(pipeline.generated_code(), Some("suite code"));
    assert_eq!(pipeline.analysis_results(), None);
    assert_eq!(pipeline.analysis_code(), None);
}

#[test]
fn row_errors_are_warnings_and_generation_continues() {
    let mut pipeline = CodePipeline::default();
    let (ticket, _) = pipeline.start(PATH, vec![check(1, "A", ""), check(2, "B", "-")], vec![]);

    let errors = vec![RowError {
        id: RuleId::from(2),
        error: "could not parse description".to_string(),
    }];
    let step = pipeline.on_transpiled(
        ticket,
        Ok(TranspileResponse {
            rows: vec![check(1, "A", ".isComplete(\"A\")")],
            errors: errors.clone(),
        }),
    );
    assert_eq!(
        step.notices,
        vec![
            PipelineNotice::ChecksUpdated,
            PipelineNotice::TranspileWarnings(errors)
        ]
    );
    assert!(matches!(step.command, Some(PipelineCommand::Generate(_))));
    assert!(pipeline.checks()[1].needs_code());
}

#[test]
fn failed_transpile_stops_the_run() {
    let mut pipeline = CodePipeline::default();
    let (ticket, _) = pipeline.start(PATH, vec![check(1, "A", "")], vec![analysis(&["trend_sum"], &["A"])]);
    let step = pipeline.on_transpiled(ticket, Err(ApiError::from_http(500, "Internal Server Error", "")));

    assert_eq!(step.command, None);
    assert_eq!(pipeline.stage(), Stage::Ready);
    assert!(!pipeline.is_running());
    assert_eq!(pipeline.generated_code(), None);
}

#[test]
fn new_run_does_not_keep_output_of_the_previous_run() {
    let mut pipeline = CodePipeline::default();
    let analyses = vec![analysis(&["stats_max"], &["A"])];
    let (first, _) = pipeline.start(PATH, vec![check(1, "A", ".isComplete(\"A\")")], analyses.clone());
    pipeline.on_generated(first, generated("code for check 1"));
    pipeline.on_batch_analyzed(
        first,
        Ok(BatchAnalysisResponse {
            results: json!({ "max": 3 }),
            code: "old analysis".to_string(),
        }),
    );
    pipeline.cancel();

    let checks = vec![check(1, "A", ".isComplete(\"A\")"), check(2, "B", "")];
    let (second, _) = pipeline.start(PATH, checks, analyses);
    assert_eq!(pipeline.generated_code(), None);

    pipeline.on_transpiled(second, Err(ApiError::Network("offline".to_string())));
    assert_eq!(pipeline.stage(), Stage::Ready);
    assert_eq!(pipeline.generated_code(), None);
    assert_eq!(pipeline.analysis_results(), None);
    assert_eq!(pipeline.analysis_code(), None);
}

#[test]
fn failed_generate_clears_code_and_skips_analysis() {
    let mut pipeline = CodePipeline::default();
    let (ticket, _) = pipeline.start(PATH, vec![check(1, "A", ".isUnique(\"A\")")], vec![analysis(&["stats_min"], &["A"])]);
    let step = pipeline.on_generated(ticket, Err(ApiError::Network("offline".to_string())));

    assert_eq!(step.command, None);
    assert_eq!(pipeline.generated_code(), None);
    assert_eq!(pipeline.stage(), Stage::Ready);
}

#[test]
fn responses_from_a_superseded_run_are_dropped() {
    let mut pipeline = CodePipeline::default();
    let (old, _) = pipeline.start(PATH, vec![check(1, "A", ".isComplete(\"A\")")], vec![]);
    let (new, _) = pipeline.start(PATH, vec![check(1, "A", ".isUnique(\"A\")")], vec![]);

    let step = pipeline.on_generated(old, generated("stale"));
    assert_eq!(step.notices, vec![PipelineNotice::Stale { stage: Stage::Generating }]);
    assert_eq!(pipeline.generated_code(), None);

    pipeline.on_generated(new, generated("fresh"));
    assert_eq!(pipeline.generated_code(), Some("fresh"));
}

#[test]
fn cancel_invalidates_outstanding_responses() {
    let mut pipeline = CodePipeline::default();
    let (ticket, _) = pipeline.start(PATH, vec![check(1, "A", "")], vec![]);
    pipeline.cancel();
    assert_eq!(pipeline.stage(), Stage::Idle);

    let step = pipeline.on_transpiled(
        ticket,
        Ok(TranspileResponse {
            rows: vec![check(1, "A", ".isComplete(\"A\")")],
            errors: vec![],
        }),
    );
    assert_eq!(step.command, None);
    assert!(pipeline.checks()[0].needs_code());
}

#[test]
fn merged_checks_do_not_count_as_outdated() {
    let mut pipeline = CodePipeline::default();
    let (ticket, _) = pipeline.start(PATH, vec![check(1, "A", "")], vec![]);
    pipeline.on_transpiled(
        ticket,
        Ok(TranspileResponse {
            rows: vec![check(1, "A", ".isComplete(\"A\")")],
            errors: vec![],
        }),
    );
    let merged = pipeline.checks().to_vec();
    assert!(!pipeline.is_outdated(PATH, &merged, &[]));
    assert!(pipeline.is_outdated(PATH, &[check(1, "A", "")], &[]));
    assert!(pipeline.is_outdated("/data/y.parquet", &merged, &[]));
}

#[test]
fn empty_check_list_only_runs_analyses() {
    let mut pipeline = CodePipeline::default();
    let (_, step) = pipeline.start(PATH, vec![], vec![analysis(&["stats_column_count"], &[])]);
    assert!(matches!(step.command, Some(PipelineCommand::BatchAnalyze(_))));
    assert_eq!(pipeline.generated_code(), None);
}
