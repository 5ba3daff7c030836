use common::model::analysis::{AnalysisDraft, AnalysisOption};
use common::model::category::CheckCategory;
use common::model::check::CheckList;
use common::model::schema::Schema;
use common::requests::{
    analysis_specs, ApiRequest, BatchAnalysisRequest, ClientConfig, Endpoint, GenerateRequest,
    MysqlCodeRequest, Sanitize, SchemaRequest, SuggestRequest, SuggestResponse, TranspileResponse,
    VerifyCodeRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn suggested_rows_get_categories_from_their_code() {
    let response: SuggestResponse = serde_json::from_value(json!({
        "rows": [
            { "id": 1, "column": "FILE_CODE", "description": "FILE_CODE is complete", "code": ".isComplete(\"FILE_CODE\")" },
            { "id": 2, "column": "CLAIM_ID", "description": "CLAIM_ID is unique", "code": ".isUnique(\"CLAIM_ID\")", "include": false },
            { "id": 3, "column": "", "description": "Row count > 0", "code": ".hasSize(_ > 0)", "current_value": 1520 }
        ],
        "row_count": 1520,
        "schema": ["FILE_CODE", "CLAIM_ID"]
    }))
    .unwrap();

    let mut list = CheckList::default();
    list.replace_all(response.rows);
    let categories: Vec<CheckCategory> = list.checks().iter().map(|c| c.category).collect();
    assert_eq!(
        categories,
        vec![
            CheckCategory::Completeness,
            CheckCategory::Uniqueness,
            CheckCategory::RowCount
        ]
    );
    assert!(!list.checks()[1].include);
    assert_eq!(list.checks()[2].current_value_display(), "1520");
    assert_eq!(response.row_count, 1520);
    assert_eq!(
        Schema::new(response.schema.unwrap_or_default()).names(),
        vec!["FILE_CODE", "CLAIM_ID"]
    );
}

#[test]
fn request_bodies_match_the_service_contract() {
    assert_eq!(
        serde_json::to_value(SchemaRequest::new("/data/x.parquet")).unwrap(),
        json!({ "path": "/data/x.parquet", "fmt": "parquet" })
    );
    assert_eq!(
        serde_json::to_value(SuggestRequest {
            path: "/data/x.parquet".to_string(),
            key_cols: vec!["ID".to_string()],
        })
        .unwrap(),
        json!({ "path": "/data/x.parquet", "key_cols": ["ID"] })
    );
    assert_eq!(
        serde_json::to_value(VerifyCodeRequest {
            path: "/p".to_string(),
            code: "c".to_string(),
        })
        .unwrap(),
        json!({ "path": "/p", "code": "c" })
    );
    assert_eq!(
        serde_json::to_value(MysqlCodeRequest {
            data_set: "/p".to_string(),
            sanitize: Sanitize::NonSanitized,
        })
        .unwrap(),
        json!({ "data_set": "/p", "sanitize": "Non-Sanitized" })
    );
}

#[test]
fn generate_rows_carry_category_labels_and_include() {
    let mut list = CheckList::default();
    list.replace_all(
        serde_json::from_value(json!([
            { "id": "a", "column": "N", "description": "N >= 0", "code": ".hasMin(\"N\", _ >= 0)" }
        ]))
        .unwrap(),
    );
    let body = serde_json::to_value(GenerateRequest::for_checks(list.checks().to_vec())).unwrap();
    assert_eq!(
        body,
        json!({
            "rows": [{
                "id": "a",
                "column": "N",
                "category": "Numeric Ranges",
                "description": "N >= 0",
                "code": ".hasMin(\"N\", _ >= 0)",
                "include": true
            }],
            "level": "Error",
            "check_name": "Data Quality Checks"
        })
    );
}

#[test]
fn batch_analysis_carries_every_analysis() {
    let mut draft = AnalysisDraft::default();
    draft.toggle_option(AnalysisOption::StatsRowCount);
    let row_count = draft.finish().unwrap();

    let mut draft = AnalysisDraft::default();
    draft.toggle_column("STATE");
    draft.toggle_option(AnalysisOption::DistributionTopK);
    draft.set_top_k(3);
    let top = draft.finish().unwrap();

    let body = serde_json::to_value(BatchAnalysisRequest {
        path: "/p".to_string(),
        analyses: analysis_specs(&[row_count, top]),
    })
    .unwrap();
    assert_eq!(
        body,
        json!({
            "path": "/p",
            "analyses": [
                { "options": ["stats_row_count"], "columns": [] },
                { "options": ["distribution_top_3"], "columns": ["STATE"] }
            ]
        })
    );
}

#[test]
fn transpile_response_tolerates_missing_errors() {
    let response: TranspileResponse = serde_json::from_value(json!({
        "rows": [{ "id": 4, "column": "A", "description": "A is complete", "code": ".isComplete(\"A\")", "rule": "CompletenessConstraint(A)" }]
    }))
    .unwrap();
    assert!(response.errors.is_empty());
    assert_eq!(response.rows[0].rule.as_deref(), Some("CompletenessConstraint(A)"));
}

#[test]
fn endpoints_resolve_against_the_configured_base_url() {
    let config = ClientConfig {
        api_base_url: "http://dq.internal:9000/".to_string(),
        ..ClientConfig::default()
    };
    assert_eq!(
        config.endpoint_url(<VerifyCodeRequest as ApiRequest>::ENDPOINT),
        "http://dq.internal:9000/verify_code"
    );
    assert_eq!(config.endpoint_url(Endpoint::BatchAnalysis), "http://dq.internal:9000/batch_analysis");
    assert_eq!(ClientConfig::default().endpoint_url(Endpoint::Schema), "http://localhost:8000/schema");
}
