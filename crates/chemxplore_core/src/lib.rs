//! Chemistry lesson engine
//!
//! This crate provides the state machines behind the ChemXplore lessons.
//! It supports:
//! - Three lab simulations (pH titration, atom-matching reactions, conductivity)
//! - Multiple-choice quizzes with per-answer reveal and scoring
//! - A linear lesson flow (intro, lab, quiz, completion) per module
//! - Module progress and experience point bookkeeping
//! - Deferred lab effects with cancellation tied to the owning session
//!
//! # Builder DSL
//!
//! ```ignore
//! use chemxplore_core::config::{CourseBuilder, ModuleBuilder};
//! use chemxplore_core::simulation::TitrationConfig;
//!
//! let course = CourseBuilder::new()
//!     .starting_experience(0)
//!     .module(
//!         ModuleBuilder::titration("acids-bases", "Acids & Bases", TitrationConfig::default())
//!             .description("Master the pH scale.")
//!             .question("What is the pH of pure water?", ["0", "7", "14", "1"], 1, "Neutral."),
//!     )
//!     .build()?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod flow;
pub mod quiz;
pub mod scheduler;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{Course, CourseBuilder, LabKind, ModuleBuilder, ModuleConfig};
pub use error::{CourseError, FlowError, LabError, QuizError};
pub use flow::{CompletionReport, FlowSnapshot, FlowStage, LabReport, LessonFlow, TickReport};
pub use model::{Experience, Module, ModuleId, ModuleStatus, ProgressModel, Question, QuestionId};
pub use quiz::{AnswerFeedback, QuizPhase, QuizSession, QuizStep, QuizSummary, QuizView};
pub use scheduler::{CancellationToken, Scheduler};
pub use simulation::{Experiment, LabAction, LabEffect, LabView, Simulation};
