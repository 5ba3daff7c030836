//! HTTP client for the data-quality service.
//!
//! Every call is a single JSON `POST` raced against the configured timeout. There
//! is no retry and no caching: a failure is returned to the caller as an
//! [`ApiError`] and surfaced by the triggering component.

use std::rc::Rc;

use common::error::ApiError;
use common::model::analysis::Analysis;
use common::model::check::Check;
use common::model::results::{AnalysisPreview, VerificationReport};
use common::requests::{
    AnalysisRequest, AnalysisResponse, AnalysisSpec, ApiRequest, BatchAnalysisRequest,
    BatchAnalysisResponse, ClientConfig, GenerateRequest, GenerateResponse, MysqlCodeRequest,
    MysqlCodeResponse, PreviewAnalysisRequest, Sanitize, SchemaRequest, SchemaResponse,
    SuggestRequest, SuggestResponse, TranspileRequest, TranspileResponse, VerifyCodeRequest,
    DEFAULT_API_URL,
};
use futures_util::future::{select, Either};
use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

const CONFIG_PATH: &str = "/api/config";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        ApiClient {
            config: Rc::new(config),
        }
    }

    /// Sends `request` to its endpoint and decodes the typed response.
    pub async fn call<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let endpoint = R::ENDPOINT.path();
        let url = self.config.endpoint_url(R::ENDPOINT);
        let after_ms = self.config.request_timeout_ms;
        log!(format!("POST {url}"));

        let send = Box::pin(send_json(&url, request));
        let timeout = Box::pin(TimeoutFuture::new(u32::try_from(after_ms).unwrap_or(u32::MAX)));
        let result = match select(send, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::TimedOut {
                endpoint: endpoint.to_string(),
                after_ms,
            }),
        };
        if let Err(err) = &result {
            error!(format!("{endpoint} failed: {err}"));
        }
        result
    }

    pub async fn fetch_schema(&self, path: &str) -> Result<SchemaResponse, ApiError> {
        let request = SchemaRequest {
            path: path.to_string(),
            fmt: self.config.default_format.clone(),
        };
        self.call(&request).await
    }

    pub async fn suggest_checks(
        &self,
        path: &str,
        key_cols: Vec<String>,
    ) -> Result<SuggestResponse, ApiError> {
        let request = SuggestRequest {
            path: path.to_string(),
            key_cols,
        };
        self.call(&request).await
    }

    pub async fn generate_code(&self, request: GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.call(&request).await
    }

    pub async fn transpile(&self, request: TranspileRequest) -> Result<TranspileResponse, ApiError> {
        self.call(&request).await
    }

    /// Transpiles the given checks only, leaving complete ones alone.
    pub async fn transpile_checks(&self, rows: Vec<Check>) -> Result<TranspileResponse, ApiError> {
        self.transpile(TranspileRequest {
            rows,
            force_all: false,
        })
        .await
    }

    pub async fn verify_code(&self, path: &str, code: &str) -> Result<VerificationReport, ApiError> {
        let request = VerifyCodeRequest {
            path: path.to_string(),
            code: code.to_string(),
        };
        self.call(&request).await
    }

    pub async fn run_analysis(
        &self,
        path: &str,
        analysis: &Analysis,
    ) -> Result<AnalysisResponse, ApiError> {
        self.call(&AnalysisRequest::for_analysis(path, analysis)).await
    }

    pub async fn batch_analysis(
        &self,
        request: BatchAnalysisRequest,
    ) -> Result<BatchAnalysisResponse, ApiError> {
        self.call(&request).await
    }

    pub async fn preview_analysis(
        &self,
        path: &str,
        analyses: Vec<AnalysisSpec>,
    ) -> Result<AnalysisPreview, ApiError> {
        let request = PreviewAnalysisRequest {
            path: path.to_string(),
            analyses,
        };
        self.call(&request).await
    }

    pub async fn mysql_code(
        &self,
        data_set: &str,
        sanitize: Sanitize,
    ) -> Result<MysqlCodeResponse, ApiError> {
        let request = MysqlCodeRequest {
            data_set: data_set.to_string(),
            sanitize,
        };
        self.call(&request).await
    }
}

async fn send_json<R: ApiRequest>(url: &str, request: &R) -> Result<R::Response, ApiError> {
    let response = Request::post(url)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_http(
            response.status(),
            &response.status_text(),
            &body,
        ));
    }

    response
        .json::<R::Response>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Client configuration compiled into the bundle, used when the host does not
/// serve `/api/config` (e.g. during `trunk serve`).
pub fn fallback_config() -> ClientConfig {
    ClientConfig {
        api_base_url: option_env!("DQ_API_URL")
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string(),
        ..ClientConfig::default()
    }
}

/// Loads the runtime configuration from the host backend.
pub async fn load_config() -> ClientConfig {
    match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => match resp.json::<ClientConfig>().await {
            Ok(config) => config,
            Err(err) => {
                error!(format!("Invalid client configuration: {err}"));
                fallback_config()
            }
        },
        _ => {
            log!("No host configuration available, using built-in defaults");
            fallback_config()
        }
    }
}
