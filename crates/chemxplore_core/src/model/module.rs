use serde::{Deserialize, Serialize};

use super::ModuleId;

/// Where a learner stands on a module.
///
/// Status only moves forward: `Locked`/`InProgress` can become `Completed`,
/// never the other way round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleStatus {
    Locked,
    #[default]
    InProgress,
    Completed,
}

impl ModuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::Locked => "LOCKED",
            ModuleStatus::InProgress => "IN PROGRESS",
            ModuleStatus::Completed => "COMPLETED",
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, ModuleStatus::Locked)
    }
}

/// Runtime progress record for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    pub status: ModuleStatus,
    /// Percent complete, 0-100. Only a completed module reaches 100.
    pub progress: u8,
}

impl Module {
    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }

    pub fn is_completed(&self) -> bool {
        self.status == ModuleStatus::Completed
    }

    /// Mark the module finished. Idempotent.
    pub(crate) fn complete(&mut self) {
        self.status = ModuleStatus::Completed;
        self.progress = 100;
    }
}
