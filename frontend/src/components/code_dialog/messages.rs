use common::error::ApiError;
use common::jobs::Ticket;
use common::model::results::{AnalysisPreview, VerificationReport};
use common::requests::{
    BatchAnalysisResponse, GenerateResponse, MysqlCodeResponse, TranspileResponse,
};

use super::state::Tab;

pub enum Msg {
    Transpiled(Ticket, Result<TranspileResponse, ApiError>),
    Generated(Ticket, Result<GenerateResponse, ApiError>),
    BatchAnalyzed(Ticket, Result<BatchAnalysisResponse, ApiError>),

    VerifyCode,
    Verified(Ticket, Result<VerificationReport, ApiError>),
    PreviewAnalysis,
    Previewed(Ticket, Result<AnalysisPreview, ApiError>),
    SetSanitize(String),
    GenerateMysql,
    MysqlGenerated(Ticket, Result<MysqlCodeResponse, ApiError>),

    SetTab(Tab),
    Copy(String),
    Close,
}
