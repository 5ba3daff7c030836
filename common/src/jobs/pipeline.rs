//! Transpile -> generate -> batch-analyze sequence behind the code dialog.
//!
//! The pipeline performs no I/O. Each transition returns the next request to
//! issue as a [`PipelineCommand`]; the caller sends it and feeds the response
//! back with the ticket it was issued under.
//!
//! ```text
//! Idle -> Transpiling -> Generating -> BatchAnalyzing -> Ready
//!              \______________\_____________\__ on error -> Ready
//! ```
//!
//! Stages with nothing to do are skipped: no check lacking code skips
//! `Transpiling`, an empty check list skips `Generating`, an empty analysis
//! list skips `BatchAnalyzing`.

use serde_json::Value;

use super::{Ticket, Tickets};
use crate::error::ApiError;
use crate::model::analysis::Analysis;
use crate::model::check::{merge_transpiled, Check};
use crate::requests::{
    analysis_specs, BatchAnalysisRequest, BatchAnalysisResponse, GenerateRequest,
    GenerateResponse, RowError, TranspileRequest, TranspileResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Transpiling,
    Generating,
    BatchAnalyzing,
    Ready,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Transpiling => "transpiling checks",
            Stage::Generating => "generating code",
            Stage::BatchAnalyzing => "running analyses",
            Stage::Ready => "ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineCommand {
    Transpile(TranspileRequest),
    Generate(GenerateRequest),
    BatchAnalyze(BatchAnalysisRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineNotice {
    /// Transpiled code was merged into the checks; the owner should take
    /// [`CodePipeline::checks`].
    ChecksUpdated,
    /// Rows the backend could not transpile. The run continues.
    TranspileWarnings(Vec<RowError>),
    /// The request of `stage` failed and the run stopped there.
    Failed { stage: Stage, error: ApiError },
    /// A response for a superseded run (or an unexpected stage) was dropped.
    Stale { stage: Stage },
}

/// Outcome of one transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub command: Option<PipelineCommand>,
    pub notices: Vec<PipelineNotice>,
}

impl Step {
    fn stale(stage: Stage) -> Self {
        Step {
            command: None,
            notices: vec![PipelineNotice::Stale { stage }],
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodePipeline {
    stage: Stage,
    tickets: Tickets,
    current: Option<Ticket>,
    data_path: String,
    checks: Vec<Check>,
    analyses: Vec<Analysis>,
    generated_code: Option<String>,
    analysis_results: Option<Value>,
    analysis_code: Option<String>,
}

impl Default for CodePipeline {
    fn default() -> Self {
        CodePipeline {
            stage: Stage::Idle,
            tickets: Tickets::default(),
            current: None,
            data_path: String::new(),
            checks: Vec::new(),
            analyses: Vec::new(),
            generated_code: None,
            analysis_results: None,
            analysis_code: None,
        }
    }
}

impl CodePipeline {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.stage,
            Stage::Transpiling | Stage::Generating | Stage::BatchAnalyzing
        )
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn generated_code(&self) -> Option<&str> {
        self.generated_code.as_deref()
    }

    pub fn analysis_results(&self) -> Option<&Value> {
        self.analysis_results.as_ref()
    }

    pub fn analysis_code(&self) -> Option<&str> {
        self.analysis_code.as_deref()
    }

    /// Whether the given inputs differ from what the last run was started with
    /// (after its own transpile merge).
    pub fn is_outdated(&self, data_path: &str, checks: &[Check], analyses: &[Analysis]) -> bool {
        self.data_path != data_path || self.checks != checks || self.analyses != analyses
    }

    /// Starts a new run, superseding any run still in progress.
    pub fn start(
        &mut self,
        data_path: impl Into<String>,
        checks: Vec<Check>,
        analyses: Vec<Analysis>,
    ) -> (Ticket, Step) {
        let ticket = self.tickets.issue();
        self.current = Some(ticket);
        self.data_path = data_path.into();
        self.checks = checks;
        self.analyses = analyses;
        self.generated_code = None;
        self.clear_analysis();
        (ticket, self.enter_transpiling())
    }

    /// Drops the current run; late responses become stale.
    pub fn cancel(&mut self) {
        self.current = None;
        self.stage = Stage::Idle;
    }

    pub fn on_transpiled(
        &mut self,
        ticket: Ticket,
        result: Result<TranspileResponse, ApiError>,
    ) -> Step {
        if !self.accepts(ticket, Stage::Transpiling) {
            return Step::stale(Stage::Transpiling);
        }
        match result {
            Ok(response) => {
                let mut notices = Vec::new();
                if merge_transpiled(&mut self.checks, &response.rows) > 0 {
                    notices.push(PipelineNotice::ChecksUpdated);
                }
                if !response.errors.is_empty() {
                    notices.push(PipelineNotice::TranspileWarnings(response.errors));
                }
                let mut step = self.enter_generating();
                notices.append(&mut step.notices);
                step.notices = notices;
                step
            }
            Err(error) => self.fail(Stage::Transpiling, error),
        }
    }

    pub fn on_generated(
        &mut self,
        ticket: Ticket,
        result: Result<GenerateResponse, ApiError>,
    ) -> Step {
        if !self.accepts(ticket, Stage::Generating) {
            return Step::stale(Stage::Generating);
        }
        match result {
            Ok(response) => {
                self.generated_code = Some(response.code);
                self.enter_batch_analyzing()
            }
            Err(error) => {
                self.generated_code = None;
                self.fail(Stage::Generating, error)
            }
        }
    }

    pub fn on_batch_analyzed(
        &mut self,
        ticket: Ticket,
        result: Result<BatchAnalysisResponse, ApiError>,
    ) -> Step {
        if !self.accepts(ticket, Stage::BatchAnalyzing) {
            return Step::stale(Stage::BatchAnalyzing);
        }
        match result {
            Ok(response) => {
                self.analysis_results = Some(response.results);
                self.analysis_code = Some(response.code).filter(|code| !code.is_empty());
                self.stage = Stage::Ready;
                Step::default()
            }
            Err(error) => {
                self.clear_analysis();
                self.fail(Stage::BatchAnalyzing, error)
            }
        }
    }

    fn accepts(&self, ticket: Ticket, stage: Stage) -> bool {
        self.current == Some(ticket) && self.stage == stage
    }

    fn enter_transpiling(&mut self) -> Step {
        let pending: Vec<Check> = self.checks.iter().filter(|c| c.needs_code()).cloned().collect();
        if pending.is_empty() {
            return self.enter_generating();
        }
        self.stage = Stage::Transpiling;
        Step {
            command: Some(PipelineCommand::Transpile(TranspileRequest {
                rows: pending,
                force_all: false,
            })),
            notices: Vec::new(),
        }
    }

    fn enter_generating(&mut self) -> Step {
        if self.checks.is_empty() {
            self.generated_code = None;
            return self.enter_batch_analyzing();
        }
        self.stage = Stage::Generating;
        Step {
            command: Some(PipelineCommand::Generate(GenerateRequest::for_checks(
                self.checks.clone(),
            ))),
            notices: Vec::new(),
        }
    }

    fn enter_batch_analyzing(&mut self) -> Step {
        if self.analyses.is_empty() {
            self.clear_analysis();
            self.stage = Stage::Ready;
            return Step::default();
        }
        self.stage = Stage::BatchAnalyzing;
        Step {
            command: Some(PipelineCommand::BatchAnalyze(BatchAnalysisRequest {
                path: self.data_path.clone(),
                analyses: analysis_specs(&self.analyses),
            })),
            notices: Vec::new(),
        }
    }

    fn clear_analysis(&mut self) {
        self.analysis_results = None;
        self.analysis_code = None;
    }

    fn fail(&mut self, stage: Stage, error: ApiError) -> Step {
        self.stage = Stage::Ready;
        Step {
            command: None,
            notices: vec![PipelineNotice::Failed { stage, error }],
        }
    }
}
