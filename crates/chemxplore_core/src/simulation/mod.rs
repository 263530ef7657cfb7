//! Lab simulations
//!
//! Each module owns one experiment. The three experiments share a single
//! capability, [`Experiment`], and are carried around as the closed
//! [`Simulation`] enum so callers match on the variant instead of on a
//! module identifier.
//!
//! Some outcomes are delayed. An experiment reports those as a [`Deferred`]
//! effect; whoever owns the session schedules it and later hands it back
//! through [`Experiment::resolve`].

mod conductivity;
mod reaction;
mod titration;

use std::time::Duration;

use serde::Serialize;

use crate::config::LabKind;
use crate::error::LabError;

pub use conductivity::{ConductivityConfig, ConductivityTest, ConductivityView, Solute};
pub use reaction::{Element, PuzzleLevel, ReactionConfig, ReactionPuzzle, ReactionView, Slot};
pub use titration::{
    PH_MAX, PH_MIN, PhReading, PhShift, PlantMood, Tint, Titration, TitrationConfig,
    TitrationView,
};

/// A learner action inside a lab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabAction {
    /// Titration: lower or raise the pH by one step
    Adjust(PhShift),
    /// Titration: measure the soil
    CheckGrowth,
    /// Reaction puzzle: pick an atom from the current inventory
    SelectAtom(usize),
    /// Reaction puzzle: drop the selected atom into a slot
    Place(Slot),
    /// Conductivity: choose what to dissolve
    SelectSolute(Solute),
    /// Conductivity: stir and test the circuit
    Mix,
    /// Conductivity: empty the beaker
    Reset,
}

/// State change that a lab applies after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabEffect {
    /// Reaction puzzle: synthesis solved, move on to single replacement
    AdvanceLevel,
    /// Reaction puzzle: replacement succeeded, finish the experiment
    FinishReplacement,
    /// Conductivity: the bulb result is ready
    RevealConductivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub effect: LabEffect,
}

/// Immediate outcome of an accepted lab action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabStep {
    /// Experience granted right now
    pub reward: Option<u32>,
    /// Effect to apply later
    pub deferred: Option<Deferred>,
}

impl LabStep {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn reward(points: u32) -> Self {
        Self {
            reward: Some(points),
            deferred: None,
        }
    }

    pub fn deferred(delay: Duration, effect: LabEffect) -> Self {
        Self {
            reward: None,
            deferred: Some(Deferred { delay, effect }),
        }
    }
}

/// Outcome of applying a deferred effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub reward: Option<u32>,
    /// The experiment finished on its own and the lesson should move on
    pub auto_advance: bool,
}

/// The capability every lab shares
pub trait Experiment {
    /// Snapshot of everything a renderer needs
    fn view(&self) -> LabView;

    /// Apply a learner action. Rejected actions leave the lab unchanged.
    fn apply(&mut self, action: LabAction) -> Result<LabStep, LabError>;

    /// Apply a deferred effect previously returned from [`Experiment::apply`].
    /// Effects that no longer match the lab state are ignored.
    fn resolve(&mut self, effect: LabEffect) -> Resolution;

    fn is_complete(&self) -> bool;
}

/// Read-only view of a running lab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabView {
    Titration(TitrationView),
    Reaction(ReactionView),
    Conductivity(ConductivityView),
}

/// One of the three lab experiments
#[derive(Debug, Clone)]
pub enum Simulation {
    Titration(Titration),
    Reaction(ReactionPuzzle),
    Conductivity(ConductivityTest),
}

impl Simulation {
    /// Fresh experiment for a module's lab definition
    pub fn new(kind: &LabKind) -> Self {
        match kind {
            LabKind::Titration(config) => Simulation::Titration(Titration::new(config)),
            LabKind::Reaction(config) => Simulation::Reaction(ReactionPuzzle::new(config)),
            LabKind::Conductivity(config) => {
                Simulation::Conductivity(ConductivityTest::new(config))
            }
        }
    }

    fn experiment(&self) -> &dyn Experiment {
        match self {
            Simulation::Titration(lab) => lab,
            Simulation::Reaction(lab) => lab,
            Simulation::Conductivity(lab) => lab,
        }
    }

    fn experiment_mut(&mut self) -> &mut dyn Experiment {
        match self {
            Simulation::Titration(lab) => lab,
            Simulation::Reaction(lab) => lab,
            Simulation::Conductivity(lab) => lab,
        }
    }
}

impl Experiment for Simulation {
    fn view(&self) -> LabView {
        self.experiment().view()
    }

    fn apply(&mut self, action: LabAction) -> Result<LabStep, LabError> {
        self.experiment_mut().apply(action)
    }

    fn resolve(&mut self, effect: LabEffect) -> Resolution {
        self.experiment_mut().resolve(effect)
    }

    fn is_complete(&self) -> bool {
        self.experiment().is_complete()
    }
}

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
