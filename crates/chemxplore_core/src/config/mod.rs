//! Course definitions
//!
//! A [`Course`] is the static data the lesson flow runs on: module
//! definitions with their lab parameters, plus the per-module question bank.
//! It is supplied whole at startup and read-only afterwards.

mod builder;
mod builtin;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::CourseError;
use crate::model::{Experience, Module, ModuleId, ModuleStatus, ProgressModel, Question};
use crate::simulation::{ConductivityConfig, ReactionConfig, TitrationConfig};

pub use builder::{CourseBuilder, ModuleBuilder};

/// Which lab a module runs, with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabKind {
    Titration(TitrationConfig),
    Reaction(ReactionConfig),
    Conductivity(ConductivityConfig),
}

impl LabKind {
    pub fn title(&self) -> &'static str {
        match self {
            LabKind::Titration(_) => "Lab: pH Balance",
            LabKind::Reaction(_) => "Lab: Atomic Reactions",
            LabKind::Conductivity(_) => "Lab: Conductivity Test",
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        match self {
            LabKind::Titration(c) => {
                if !(0.0..=14.0).contains(&c.target_ph) {
                    return Err("target pH must be between 0 and 14");
                }
                if !(0.0..=14.0).contains(&c.start_ph) {
                    return Err("starting pH must be between 0 and 14");
                }
                if !c.tolerance.is_finite() || c.tolerance < 0.0 {
                    return Err("tolerance must be a non-negative number");
                }
                Ok(())
            }
            LabKind::Reaction(_) | LabKind::Conductivity(_) => Ok(()),
        }
    }
}

/// Definition of one lesson module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ModuleStatus,
    #[serde(default)]
    pub progress: u8,
    /// Concept lines shown before the lab
    #[serde(default)]
    pub intro: Vec<String>,
    pub lab: LabKind,
}

impl ModuleConfig {
    fn to_module(&self) -> Module {
        Module {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            progress: self.progress,
        }
    }
}

fn default_starting_experience() -> u32 {
    builtin::STARTING_EXPERIENCE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default = "default_starting_experience")]
    pub starting_experience: u32,
    pub modules: Vec<ModuleConfig>,
    /// Question bank keyed by module
    pub quizzes: FxHashMap<ModuleId, Vec<Question>>,
}

impl Default for Course {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Course {
    /// The three-module chemistry track the application ships with
    pub fn builtin() -> Self {
        builtin::course()
    }

    pub fn module(&self, id: &ModuleId) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| &m.id == id)
    }

    pub fn questions(&self, id: &ModuleId) -> Option<&[Question]> {
        self.quizzes.get(id).map(Vec::as_slice)
    }

    /// Fresh progress record: every module at its configured status
    pub fn initial_progress(&self) -> ProgressModel {
        ProgressModel::new(
            self.modules.iter().map(ModuleConfig::to_module).collect(),
            Experience::new(self.starting_experience),
        )
    }

    pub fn validate(&self) -> Result<(), CourseError> {
        if self.modules.is_empty() {
            return Err(CourseError::EmptyCourse);
        }

        let mut seen = FxHashSet::default();
        for module in &self.modules {
            let id = &module.id;
            if !seen.insert(id) {
                return Err(CourseError::DuplicateModule(id.clone()));
            }
            if module.title.trim().is_empty() {
                return Err(CourseError::BlankTitle(id.clone()));
            }
            let progress_ok = module.progress < 100
                || (module.progress == 100 && module.status == ModuleStatus::Completed);
            if !progress_ok {
                return Err(CourseError::InvalidProgress {
                    module: id.clone(),
                    progress: module.progress,
                });
            }
            module
                .lab
                .validate()
                .map_err(|reason| CourseError::InvalidLab {
                    module: id.clone(),
                    reason,
                })?;

            let questions = self
                .quizzes
                .get(id)
                .ok_or_else(|| CourseError::MissingQuiz(id.clone()))?;
            if questions.is_empty() {
                return Err(CourseError::EmptyQuiz(id.clone()));
            }
            for question in questions {
                if question.correct_index >= question.options.len() {
                    return Err(CourseError::CorrectIndexOutOfRange {
                        module: id.clone(),
                        question: question.id,
                        index: question.correct_index,
                    });
                }
            }
        }

        // Sort so the reported module is deterministic
        let mut orphans: Vec<&ModuleId> = self
            .quizzes
            .keys()
            .filter(|id| !seen.contains(id))
            .collect();
        orphans.sort();
        if let Some(id) = orphans.first() {
            return Err(CourseError::UnknownQuizModule((*id).clone()));
        }

        Ok(())
    }
}
