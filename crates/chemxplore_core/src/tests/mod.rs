//! Tests for the chemxplore lesson engine
//!
//! Tests are organized by topic:
//! - `titration` - pH lab range, reading and reward rules
//! - `reaction` - Atom puzzle levels, selection and activity series
//! - `conductivity` - Solute lookup, mixing and reset rules
//! - `quiz` - Answer/reveal/advance sequencing and scoring
//! - `flow` - Lesson flow transitions and progress bookkeeping
//! - `timers` - Deferred effects and session cancellation
//! - `course` - Built-in course, builder DSL and validation

mod course;
mod reaction;
mod timers;
