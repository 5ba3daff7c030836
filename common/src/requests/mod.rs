//! Request and response bodies of the data-quality service, plus the client
//! configuration served by the host backend.
//!
//! Each request type implements [`ApiRequest`], which ties it to its endpoint
//! and response type so a client can issue any call through one generic method.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::analysis::Analysis;
use crate::model::check::{Check, RuleId};
use crate::model::results::{AnalysisPreview, VerificationReport};
use crate::model::schema::{Schema, SchemaColumn};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_FORMAT: &str = "parquet";

/// Check level used for every generated suite.
pub const DEFAULT_LEVEL: &str = "Error";
/// Name of the generated check suite.
pub const DEFAULT_CHECK_NAME: &str = "Data Quality Checks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Schema,
    Suggest,
    Generate,
    Transpile,
    VerifyCode,
    Analysis,
    BatchAnalysis,
    PreviewAnalysis,
    MysqlCode,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Schema => "/schema",
            Endpoint::Suggest => "/suggest",
            Endpoint::Generate => "/generate",
            Endpoint::Transpile => "/transpile",
            Endpoint::VerifyCode => "/verify_code",
            Endpoint::Analysis => "/analysis",
            Endpoint::BatchAnalysis => "/batch_analysis",
            Endpoint::PreviewAnalysis => "/preview_analysis",
            Endpoint::MysqlCode => "/mysql_code",
        }
    }
}

/// A JSON body POSTed to one endpoint of the data-quality service.
pub trait ApiRequest: Serialize {
    type Response: DeserializeOwned;
    const ENDPOINT: Endpoint;
}

/// Runtime configuration handed to the browser by `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub default_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), endpoint.path())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaRequest {
    pub path: String,
    pub fmt: String,
}

impl SchemaRequest {
    pub fn new(path: impl Into<String>) -> Self {
        SchemaRequest {
            path: path.into(),
            fmt: DEFAULT_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaResponse {
    #[serde(default)]
    pub columns: Vec<SchemaColumn>,
}

impl From<SchemaResponse> for Schema {
    fn from(response: SchemaResponse) -> Self {
        Schema::new(response.columns)
    }
}

impl ApiRequest for SchemaRequest {
    type Response = SchemaResponse;
    const ENDPOINT: Endpoint = Endpoint::Schema;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestRequest {
    pub path: String,
    pub key_cols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub rows: Vec<Check>,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub schema: Option<Vec<SchemaColumn>>,
}

impl ApiRequest for SuggestRequest {
    type Response = SuggestResponse;
    const ENDPOINT: Endpoint = Endpoint::Suggest;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub rows: Vec<Check>,
    pub level: String,
    pub check_name: String,
}

impl GenerateRequest {
    pub fn for_checks(rows: Vec<Check>) -> Self {
        GenerateRequest {
            rows,
            level: DEFAULT_LEVEL.to_string(),
            check_name: DEFAULT_CHECK_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub code: String,
}

impl ApiRequest for GenerateRequest {
    type Response = GenerateResponse;
    const ENDPOINT: Endpoint = Endpoint::Generate;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranspileRequest {
    pub rows: Vec<Check>,
    pub force_all: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    pub id: RuleId,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranspileResponse {
    #[serde(default)]
    pub rows: Vec<Check>,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

impl ApiRequest for TranspileRequest {
    type Response = TranspileResponse;
    const ENDPOINT: Endpoint = Endpoint::Transpile;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyCodeRequest {
    pub path: String,
    pub code: String,
}

impl ApiRequest for VerifyCodeRequest {
    type Response = VerificationReport;
    const ENDPOINT: Endpoint = Endpoint::VerifyCode;
}

/// Options and columns of one analysis, as sent to the batch endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSpec {
    pub options: Vec<String>,
    pub columns: Vec<String>,
}

impl From<&Analysis> for AnalysisSpec {
    fn from(analysis: &Analysis) -> Self {
        AnalysisSpec {
            options: analysis.options.clone(),
            columns: analysis.columns.clone(),
        }
    }
}

pub fn analysis_specs(analyses: &[Analysis]) -> Vec<AnalysisSpec> {
    analyses.iter().map(AnalysisSpec::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub path: String,
    pub options: Vec<String>,
    pub columns: Vec<String>,
}

impl AnalysisRequest {
    pub fn for_analysis(path: impl Into<String>, analysis: &Analysis) -> Self {
        AnalysisRequest {
            path: path.into(),
            options: analysis.options.clone(),
            columns: analysis.columns.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub results: Value,
}

impl ApiRequest for AnalysisRequest {
    type Response = AnalysisResponse;
    const ENDPOINT: Endpoint = Endpoint::Analysis;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchAnalysisRequest {
    pub path: String,
    pub analyses: Vec<AnalysisSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchAnalysisResponse {
    #[serde(default)]
    pub results: Value,
    #[serde(default)]
    pub code: String,
}

impl ApiRequest for BatchAnalysisRequest {
    type Response = BatchAnalysisResponse;
    const ENDPOINT: Endpoint = Endpoint::BatchAnalysis;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewAnalysisRequest {
    pub path: String,
    pub analyses: Vec<AnalysisSpec>,
}

impl ApiRequest for PreviewAnalysisRequest {
    type Response = AnalysisPreview;
    const ENDPOINT: Endpoint = Endpoint::PreviewAnalysis;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sanitize {
    #[default]
    Sanitized,
    #[serde(rename = "Non-Sanitized")]
    NonSanitized,
}

impl Sanitize {
    pub fn label(self) -> &'static str {
        match self {
            Sanitize::Sanitized => "Sanitized",
            Sanitize::NonSanitized => "Non-Sanitized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MysqlCodeRequest {
    pub data_set: String,
    pub sanitize: Sanitize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MysqlCodeResponse {
    #[serde(default)]
    pub code: String,
}

impl ApiRequest for MysqlCodeRequest {
    type Response = MysqlCodeResponse;
    const ENDPOINT: Endpoint = Endpoint::MysqlCode;
}
