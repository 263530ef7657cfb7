use serde::{Deserialize, Serialize};

use super::{Module, ModuleId};
use crate::error::FlowError;

/// Experience awarded per correct quiz answer when a module is completed
pub const QUIZ_POINTS_PER_CORRECT: u32 = 10;

/// Cumulative experience points. Only ever increases.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Experience(u32);

impl Experience {
    pub const fn new(points: u32) -> Self {
        Self(points)
    }

    pub const fn points(self) -> u32 {
        self.0
    }

    fn add(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }
}

/// Result of completing a module's quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionRecord {
    pub quiz_score: usize,
    pub xp_gained: u32,
    pub total_xp: Experience,
}

/// In-memory progress for the running application: every module's status
/// plus the learner's experience total.
#[derive(Debug, Clone)]
pub struct ProgressModel {
    modules: Vec<Module>,
    experience: Experience,
}

impl ProgressModel {
    pub fn new(modules: Vec<Module>, experience: Experience) -> Self {
        Self {
            modules,
            experience,
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| &m.id == id)
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    pub fn completed_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_completed()).count()
    }

    /// Credit a lab reward.
    pub(crate) fn award(&mut self, points: u32) -> Experience {
        self.experience.add(points);
        self.experience
    }

    /// Mark a module completed and credit `10 × quiz_score` experience.
    pub(crate) fn complete_module(
        &mut self,
        id: &ModuleId,
        quiz_score: usize,
    ) -> Result<CompletionRecord, FlowError> {
        let module = self
            .modules
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| FlowError::ModuleNotFound(id.clone()))?;
        module.complete();

        let xp_gained = u32::try_from(quiz_score)
            .unwrap_or(u32::MAX)
            .saturating_mul(QUIZ_POINTS_PER_CORRECT);
        self.experience.add(xp_gained);

        Ok(CompletionRecord {
            quiz_score,
            xp_gained,
            total_xp: self.experience,
        })
    }
}
