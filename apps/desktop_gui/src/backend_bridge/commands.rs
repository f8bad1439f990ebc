//! Backend commands queued from UI to backend worker.

use shared::protocol::GenerateUiRequest;

#[derive(Debug)]
pub enum BackendCommand {
    Generate { request: GenerateUiRequest },
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Generate { .. } => "generate",
            BackendCommand::CheckHealth => "check_health",
        }
    }
}
