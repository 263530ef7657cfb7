//! Solution properties lab: dissolve a solute and see if the bulb lights.
//!
//! Conduction is a static lookup: salt is the only electrolyte.

use serde::{Deserialize, Serialize};

use super::{Experiment, LabAction, LabEffect, LabStep, LabView, Resolution, millis};
use crate::error::LabError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductivityConfig {
    /// Pause between mixing and showing the bulb
    pub reveal_delay_ms: u64,
    pub reward: u32,
}

impl Default for ConductivityConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1500,
            reward: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Solute {
    Salt,
    Sugar,
    Oil,
}

impl Solute {
    pub const ALL: [Solute; 3] = [Solute::Salt, Solute::Sugar, Solute::Oil];

    pub fn label(self) -> &'static str {
        match self {
            Solute::Salt => "salt",
            Solute::Sugar => "sugar",
            Solute::Oil => "oil",
        }
    }

    pub fn conducts(self) -> bool {
        matches!(self, Solute::Salt)
    }

    /// What happens in the beaker once stirred
    pub fn behaviour(self) -> &'static str {
        match self {
            Solute::Salt => "Dissolves and splits into ions.",
            Solute::Sugar => "Dissolves but stays as whole molecules.",
            Solute::Oil => "Does not mix; floats on top.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConductivityView {
    pub solute: Option<Solute>,
    pub mixed: bool,
    /// `Some` once the result is shown
    pub conducts: Option<bool>,
    pub result_label: Option<&'static str>,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct ConductivityTest {
    config: ConductivityConfig,
    solute: Option<Solute>,
    mixed: bool,
    result: Option<bool>,
    found_electrolyte: bool,
}

impl ConductivityTest {
    pub fn new(config: &ConductivityConfig) -> Self {
        Self {
            config: config.clone(),
            solute: None,
            mixed: false,
            result: None,
            found_electrolyte: false,
        }
    }

    pub fn solute(&self) -> Option<Solute> {
        self.solute
    }

    pub fn is_mixed(&self) -> bool {
        self.mixed
    }

    /// Whether the bulb lit; `None` until the result is revealed
    pub fn conducts(&self) -> Option<bool> {
        self.result
    }

    pub fn select_solute(&mut self, solute: Solute) -> Result<(), LabError> {
        if self.mixed {
            return Err(LabError::AlreadyMixed);
        }
        self.solute = Some(solute);
        Ok(())
    }

    pub fn mix(&mut self) -> Result<LabStep, LabError> {
        if self.solute.is_none() {
            return Err(LabError::NoSolute);
        }
        if self.mixed {
            return Err(LabError::AlreadyMixed);
        }
        self.mixed = true;
        Ok(LabStep::deferred(
            millis(self.config.reveal_delay_ms),
            LabEffect::RevealConductivity,
        ))
    }

    /// Empty the beaker. Not allowed while a result is still on its way.
    pub fn reset(&mut self) -> Result<(), LabError> {
        if self.mixed && self.result.is_none() {
            return Err(LabError::Pending);
        }
        self.solute = None;
        self.mixed = false;
        self.result = None;
        Ok(())
    }
}

impl Experiment for ConductivityTest {
    fn view(&self) -> LabView {
        LabView::Conductivity(ConductivityView {
            solute: self.solute,
            mixed: self.mixed,
            conducts: self.result,
            result_label: self.result.map(|lit| {
                if lit {
                    "Circuit Complete! (Electrolyte)"
                } else {
                    "No Conductivity"
                }
            }),
            complete: self.found_electrolyte,
        })
    }

    fn apply(&mut self, action: LabAction) -> Result<LabStep, LabError> {
        match action {
            LabAction::SelectSolute(solute) => {
                self.select_solute(solute).map(|_| LabStep::none())
            }
            LabAction::Mix => self.mix(),
            LabAction::Reset => self.reset().map(|_| LabStep::none()),
            _ => Err(LabError::Unsupported),
        }
    }

    fn resolve(&mut self, effect: LabEffect) -> Resolution {
        if effect != LabEffect::RevealConductivity || !self.mixed || self.result.is_some() {
            return Resolution::default();
        }
        let Some(solute) = self.solute else {
            return Resolution::default();
        };

        let lit = solute.conducts();
        self.result = Some(lit);

        let reward = if lit && !self.found_electrolyte {
            self.found_electrolyte = true;
            Some(self.config.reward)
        } else {
            None
        };
        Resolution {
            reward,
            auto_advance: false,
        }
    }

    /// Sticky once salt has lit the bulb, even after a reset
    fn is_complete(&self) -> bool {
        self.found_electrolyte
    }
}
