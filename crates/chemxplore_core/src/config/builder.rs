//! Course Builder
//!
//! Fluent API for assembling a [`Course`] in code. Question ids are assigned
//! per module in the order questions are added, starting at 1.
//!
//! # Example
//!
//! ```ignore
//! use chemxplore_core::config::{CourseBuilder, ModuleBuilder};
//! use chemxplore_core::simulation::ConductivityConfig;
//!
//! let course = CourseBuilder::new()
//!     .starting_experience(0)
//!     .module(
//!         ModuleBuilder::conductivity("solutions", "Solutions", ConductivityConfig::default())
//!             .intro("Salt splits into ions.")
//!             .question("Which conducts?", ["Salt water", "Sugar water", "Oil", "Air"], 0, "Ions."),
//!     )
//!     .build()?;
//! ```

use rustc_hash::FxHashMap;

use super::{Course, LabKind, ModuleConfig};
use crate::error::CourseError;
use crate::model::{ModuleId, ModuleStatus, OPTION_COUNT, Question};
use crate::simulation::{ConductivityConfig, ReactionConfig, TitrationConfig};

/// Builder for a single module and its quiz
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    config: ModuleConfig,
    questions: Vec<Question>,
}

impl ModuleBuilder {
    fn with_lab(id: &str, title: &str, lab: LabKind) -> Self {
        Self {
            config: ModuleConfig {
                id: ModuleId::new(id),
                title: title.to_string(),
                description: String::new(),
                status: ModuleStatus::default(),
                progress: 0,
                intro: Vec::new(),
                lab,
            },
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn titration(id: &str, title: &str, config: TitrationConfig) -> Self {
        Self::with_lab(id, title, LabKind::Titration(config))
    }

    #[must_use]
    pub fn reaction(id: &str, title: &str, config: ReactionConfig) -> Self {
        Self::with_lab(id, title, LabKind::Reaction(config))
    }

    #[must_use]
    pub fn conductivity(id: &str, title: &str, config: ConductivityConfig) -> Self {
        Self::with_lab(id, title, LabKind::Conductivity(config))
    }

    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.config.description = description.to_string();
        self
    }

    #[must_use]
    pub fn status(mut self, status: ModuleStatus) -> Self {
        self.config.status = status;
        self
    }

    #[must_use]
    pub fn locked(self) -> Self {
        self.status(ModuleStatus::Locked)
    }

    /// Starting percent complete
    #[must_use]
    pub fn progress(mut self, progress: u8) -> Self {
        self.config.progress = progress;
        self
    }

    /// Append one concept line to the intro view
    #[must_use]
    pub fn intro(mut self, line: &str) -> Self {
        self.config.intro.push(line.to_string());
        self
    }

    #[must_use]
    pub fn question(
        mut self,
        text: &str,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
        explanation: &str,
    ) -> Self {
        let id = u16::try_from(self.questions.len() + 1).unwrap_or(u16::MAX);
        self.questions
            .push(Question::new(id, text, options, correct_index, explanation));
        self
    }
}

/// Builder for a whole course
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    starting_experience: u32,
    modules: Vec<ModuleBuilder>,
}

impl Default for CourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting_experience: 0,
            modules: Vec::new(),
        }
    }

    #[must_use]
    pub fn starting_experience(mut self, points: u32) -> Self {
        self.starting_experience = points;
        self
    }

    #[must_use]
    pub fn module(mut self, module: ModuleBuilder) -> Self {
        self.modules.push(module);
        self
    }

    /// Assemble the course without validating it
    pub fn build_unchecked(self) -> Course {
        let mut modules = Vec::with_capacity(self.modules.len());
        let mut quizzes = FxHashMap::default();
        for builder in self.modules {
            quizzes.insert(builder.config.id.clone(), builder.questions);
            modules.push(builder.config);
        }
        Course {
            starting_experience: self.starting_experience,
            modules,
            quizzes,
        }
    }

    /// Assemble and validate the course
    pub fn build(self) -> Result<Course, CourseError> {
        let course = self.build_unchecked();
        course.validate()?;
        Ok(course)
    }
}
