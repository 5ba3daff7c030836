use common::error::ApiError;
use common::jobs::Ticket;
use common::model::analysis::Analysis;
use common::model::check::{Check, CheckPayload, RuleId};
use common::requests::{AnalysisResponse, SchemaResponse, SuggestResponse, TranspileResponse};

pub enum Msg {
    SetDataPath(String),
    LoadSchema,
    SchemaLoaded(Ticket, Result<SchemaResponse, ApiError>),
    ToggleKeyCol(String),
    GetSuggestions,
    SuggestionsLoaded(Ticket, Result<SuggestResponse, ApiError>),

    OpenCheckEditor(Option<RuleId>),
    CloseCheckEditor,
    SaveCheck(CheckPayload),
    /// Response to the transpile issued after a save, with the rows it was sent.
    CheckTranspiled {
        sent: Vec<Check>,
        result: Result<TranspileResponse, ApiError>,
    },
    /// Checks merged by the code dialog's pipeline run.
    PipelineTranspiled {
        sent: Vec<Check>,
        merged: Vec<Check>,
    },
    DeleteCheck(RuleId),
    SetInclude(RuleId, bool),

    OpenAnalysisEditor,
    CloseAnalysisEditor,
    SaveAnalysis(Analysis),
    DeleteAnalysis(RuleId),
    RunAnalysis(RuleId),
    AnalysisRan(Ticket, Result<AnalysisResponse, ApiError>),

    OpenCodeDialog,
    CloseCodeDialog,
}
