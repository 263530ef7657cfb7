//! Lesson flow controller
//!
//! Sequences one module at a time through
//! `Home → ModuleIntro → ModuleSimulation → ModuleQuiz → ModuleDone → Home`
//! and owns the [`ProgressModel`]. Entering `ModuleDone` is the only point
//! where a module's status changes.
//!
//! Every lab session gets its own [`CancellationToken`]. Leaving the lab
//! (back to Home, or on to the quiz) cancels it, so a delayed effect from an
//! abandoned session can never touch a later one.

use std::time::Duration;

use serde::Serialize;

use crate::config::{Course, ModuleConfig};
use crate::error::{CourseError, FlowError};
use crate::model::{Experience, Module, ModuleId, ProgressModel};
use crate::quiz::{AnswerFeedback, QuizSession, QuizStep, QuizSummary, QuizView};
use crate::scheduler::{CancellationToken, Scheduler};
use crate::simulation::{Experiment, LabAction, LabEffect, LabView, Simulation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    Home,
    ModuleIntro,
    ModuleSimulation,
    ModuleQuiz,
    ModuleDone,
}

impl FlowStage {
    pub fn name(&self) -> &'static str {
        match self {
            FlowStage::Home => "home",
            FlowStage::ModuleIntro => "intro",
            FlowStage::ModuleSimulation => "lab",
            FlowStage::ModuleQuiz => "quiz",
            FlowStage::ModuleDone => "completion",
        }
    }
}

/// Summary shown on the completion view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    pub module: ModuleId,
    pub summary: QuizSummary,
    pub xp_gained: u32,
    pub total_xp: Experience,
}

/// Outcome of an accepted lab action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabReport {
    /// Experience credited by this action
    pub reward: Option<u32>,
    /// Delay before a follow-up effect lands, if one was scheduled
    pub scheduled: Option<Duration>,
    pub complete: bool,
    pub total_xp: Experience,
}

/// What a clock tick changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub applied: usize,
    pub xp_gained: u32,
    /// The lab finished itself and the flow moved to the quiz
    pub entered_quiz: bool,
}

impl TickReport {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Serializable view state for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowSnapshot {
    pub stage: FlowStage,
    pub experience: Experience,
    pub modules: Vec<Module>,
    pub active_module: Option<ModuleId>,
    pub lab: Option<LabView>,
    pub quiz: Option<QuizView>,
    pub completion: Option<CompletionReport>,
}

#[derive(Debug)]
enum View {
    Home,
    Intro {
        module: ModuleId,
    },
    Simulation {
        module: ModuleId,
        lab: Simulation,
        session: CancellationToken,
    },
    Quiz {
        module: ModuleId,
        quiz: QuizSession,
    },
    Done {
        report: CompletionReport,
    },
}

impl View {
    fn stage(&self) -> FlowStage {
        match self {
            View::Home => FlowStage::Home,
            View::Intro { .. } => FlowStage::ModuleIntro,
            View::Simulation { .. } => FlowStage::ModuleSimulation,
            View::Quiz { .. } => FlowStage::ModuleQuiz,
            View::Done { .. } => FlowStage::ModuleDone,
        }
    }

    fn module(&self) -> Option<&ModuleId> {
        match self {
            View::Home => None,
            View::Intro { module }
            | View::Simulation { module, .. }
            | View::Quiz { module, .. } => Some(module),
            View::Done { report } => Some(&report.module),
        }
    }
}

#[derive(Debug)]
pub struct LessonFlow {
    course: Course,
    progress: ProgressModel,
    view: View,
    scheduler: Scheduler<LabEffect>,
}

impl LessonFlow {
    /// Validate `course` and start at Home
    pub fn new(course: Course) -> Result<Self, CourseError> {
        course.validate()?;
        let progress = course.initial_progress();
        Ok(Self {
            course,
            progress,
            view: View::Home,
            scheduler: Scheduler::new(),
        })
    }

    pub fn stage(&self) -> FlowStage {
        self.view.stage()
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn progress(&self) -> &ProgressModel {
        &self.progress
    }

    pub fn experience(&self) -> Experience {
        self.progress.experience()
    }

    pub fn active_module(&self) -> Option<&ModuleId> {
        self.view.module()
    }

    pub fn active_module_config(&self) -> Option<&ModuleConfig> {
        self.active_module().and_then(|id| self.course.module(id))
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        match &self.view {
            View::Simulation { lab, .. } => Some(lab),
            _ => None,
        }
    }

    pub fn lab_view(&self) -> Option<LabView> {
        self.simulation().map(Experiment::view)
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        match &self.view {
            View::Quiz { quiz, .. } => Some(quiz),
            _ => None,
        }
    }

    pub fn quiz_view(&self) -> Option<QuizView> {
        self.quiz().and_then(QuizSession::view)
    }

    pub fn completion(&self) -> Option<&CompletionReport> {
        match &self.view {
            View::Done { report } => Some(report),
            _ => None,
        }
    }

    /// Deferred effects still waiting on the clock
    pub fn pending_effects(&self) -> usize {
        self.scheduler.len()
    }

    fn expect_stage(&self, expected: FlowStage) -> Result<(), FlowError> {
        let actual = self.stage();
        if actual == expected {
            Ok(())
        } else {
            Err(FlowError::WrongStage { expected, actual })
        }
    }

    /// Open a module's intro from Home. Locked modules are refused.
    pub fn start_module(&mut self, id: &ModuleId) -> Result<(), FlowError> {
        self.expect_stage(FlowStage::Home)?;
        let module = self
            .progress
            .module(id)
            .ok_or_else(|| FlowError::ModuleNotFound(id.clone()))?;
        if module.is_locked() {
            return Err(FlowError::ModuleLocked(id.clone()));
        }
        self.view = View::Intro { module: id.clone() };
        Ok(())
    }

    /// Leave the intro and start a fresh lab session
    pub fn begin_lab(&mut self) -> Result<(), FlowError> {
        self.expect_stage(FlowStage::ModuleIntro)?;
        let Some(module) = self.view.module().cloned() else {
            return Err(FlowError::WrongStage {
                expected: FlowStage::ModuleIntro,
                actual: FlowStage::Home,
            });
        };
        let config = self
            .course
            .module(&module)
            .ok_or_else(|| FlowError::ModuleNotFound(module.clone()))?;

        self.view = View::Simulation {
            module,
            lab: Simulation::new(&config.lab),
            session: CancellationToken::new(),
        };
        Ok(())
    }

    /// Forward a learner action to the running lab
    pub fn apply(&mut self, action: LabAction) -> Result<LabReport, FlowError> {
        let actual = self.stage();
        let View::Simulation { lab, session, .. } = &mut self.view else {
            return Err(FlowError::WrongStage {
                expected: FlowStage::ModuleSimulation,
                actual,
            });
        };

        let step = lab.apply(action)?;
        let complete = lab.is_complete();
        if let Some(deferred) = step.deferred {
            self.scheduler
                .schedule(deferred.delay, session, deferred.effect);
        }
        if let Some(points) = step.reward {
            self.progress.award(points);
        }

        Ok(LabReport {
            reward: step.reward,
            scheduled: step.deferred.map(|d| d.delay),
            complete,
            total_xp: self.progress.experience(),
        })
    }

    /// Move from a completed lab to the quiz
    pub fn take_quiz(&mut self) -> Result<(), FlowError> {
        self.expect_stage(FlowStage::ModuleSimulation)?;
        if !self.simulation().is_some_and(Experiment::is_complete) {
            return Err(FlowError::LabIncomplete);
        }
        self.enter_quiz()
    }

    fn enter_quiz(&mut self) -> Result<(), FlowError> {
        let actual = self.stage();
        let View::Simulation {
            module, session, ..
        } = &self.view
        else {
            return Err(FlowError::WrongStage {
                expected: FlowStage::ModuleSimulation,
                actual,
            });
        };
        let module = module.clone();
        let questions = self
            .course
            .questions(&module)
            .ok_or_else(|| FlowError::ModuleNotFound(module.clone()))?
            .to_vec();

        session.cancel();
        self.scheduler.purge_cancelled();
        self.view = View::Quiz {
            module,
            quiz: QuizSession::new(questions),
        };
        Ok(())
    }

    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback, FlowError> {
        match &mut self.view {
            View::Quiz { quiz, .. } => Ok(quiz.answer(option)?),
            other => Err(FlowError::WrongStage {
                expected: FlowStage::ModuleQuiz,
                actual: other.stage(),
            }),
        }
    }

    /// Move past a revealed question. Finishing the last one completes the
    /// module. Once on the completion view this reports the same result
    /// again and credits nothing.
    pub fn advance_quiz(&mut self) -> Result<QuizStep, FlowError> {
        let (module, step) = match &mut self.view {
            View::Quiz { module, quiz } => (module.clone(), quiz.advance()?),
            View::Done { report } => return Ok(QuizStep::Finished(report.summary)),
            other => {
                return Err(FlowError::WrongStage {
                    expected: FlowStage::ModuleQuiz,
                    actual: other.stage(),
                });
            }
        };

        if let QuizStep::Finished(summary) = step {
            let record = self.progress.complete_module(&module, summary.score)?;
            self.view = View::Done {
                report: CompletionReport {
                    module,
                    summary,
                    xp_gained: record.xp_gained,
                    total_xp: record.total_xp,
                },
            };
        }
        Ok(step)
    }

    /// Return to Home from any other view. Nothing is recorded and any
    /// pending lab effect is dropped.
    pub fn back(&mut self) -> Result<(), FlowError> {
        if let View::Home = self.view {
            return Err(FlowError::WrongStage {
                expected: FlowStage::ModuleIntro,
                actual: FlowStage::Home,
            });
        }
        if let View::Simulation { session, .. } = &self.view {
            session.cancel();
            self.scheduler.purge_cancelled();
        }
        self.view = View::Home;
        Ok(())
    }

    /// Advance the lab clock and apply whatever came due
    pub fn tick(&mut self, elapsed: Duration) -> TickReport {
        let due = self.scheduler.advance(elapsed);
        let mut report = TickReport::default();

        let mut auto_advance = false;
        for effect in due {
            let View::Simulation { lab, .. } = &mut self.view else {
                break;
            };
            let resolution = lab.resolve(effect);
            report.applied += 1;
            if let Some(points) = resolution.reward {
                self.progress.award(points);
                report.xp_gained += points;
            }
            auto_advance |= resolution.auto_advance;
        }

        if auto_advance && self.enter_quiz().is_ok() {
            report.entered_quiz = true;
        }
        report
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            stage: self.stage(),
            experience: self.experience(),
            modules: self.progress.modules().to_vec(),
            active_module: self.active_module().cloned(),
            lab: self.lab_view(),
            quiz: self.quiz_view(),
            completion: self.completion().cloned(),
        }
    }
}
