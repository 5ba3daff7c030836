use common::jobs::pipeline::CodePipeline;
use common::jobs::RequestSlot;
use common::model::check::Check;
use common::model::results::{AnalysisPreview, VerificationReport};
use common::requests::Sanitize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Checks,
    Analysis,
    Mysql,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Checks, Tab::Analysis, Tab::Mysql];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Checks => "Checks Code",
            Tab::Analysis => "Analysis Code",
            Tab::Mysql => "MySQL",
        }
    }
}

pub struct CodeDialog {
    pub pipeline: CodePipeline,
    /// Checks the current run was started with, before its transpile merge.
    pub started_with: Vec<Check>,
    pub verify: RequestSlot<VerificationReport>,
    pub preview: RequestSlot<AnalysisPreview>,
    pub mysql: RequestSlot<String>,
    pub sanitize: Sanitize,
    pub tab: Tab,
}

impl CodeDialog {
    pub fn new() -> Self {
        Self {
            pipeline: CodePipeline::default(),
            started_with: Vec::new(),
            verify: RequestSlot::default(),
            preview: RequestSlot::default(),
            mysql: RequestSlot::default(),
            sanitize: Sanitize::default(),
            tab: Tab::Checks,
        }
    }

    /// Drops the run and every manual result; late responses become stale.
    pub fn reset(&mut self) {
        self.pipeline.cancel();
        self.verify.reset();
        self.preview.reset();
        self.mysql.reset();
        self.tab = Tab::Checks;
    }
}
