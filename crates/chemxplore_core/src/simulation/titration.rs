//! Acids & bases lab: bring the Zogberry soil to its target pH.

use serde::{Deserialize, Serialize};

use super::{Experiment, LabAction, LabEffect, LabStep, LabView, Resolution};
use crate::error::LabError;

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// Below this the solution reads as acidic
const ACIDIC_BELOW: f64 = 6.0;
/// Above this the solution reads as basic
const BASIC_ABOVE: f64 = 8.0;
const THRIVING_WITHIN: f64 = 1.5;
const WILTING_BEYOND: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitrationConfig {
    pub start_ph: f64,
    pub target_ph: f64,
    pub tolerance: f64,
    pub reward: u32,
}

impl Default for TitrationConfig {
    fn default() -> Self {
        Self {
            start_ph: 7.0,
            target_ph: 4.0,
            tolerance: 1.0,
            reward: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhShift {
    /// Add acid: -1 pH
    Acid,
    /// Add base: +1 pH
    Base,
}

impl PhShift {
    pub fn delta(self) -> f64 {
        match self {
            PhShift::Acid => -1.0,
            PhShift::Base => 1.0,
        }
    }
}

/// Result of checking the soil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhReading {
    OnTarget,
    TooBasic,
    TooAcidic,
}

impl PhReading {
    pub fn message(self) -> &'static str {
        match self {
            PhReading::OnTarget => "Perfect! The Zogberry thrives in this acidic environment.",
            PhReading::TooBasic => "Too basic! The leaves are wilting. Try adding some acid.",
            PhReading::TooAcidic => "Too acidic! Roots are burning. Add some base to neutralize.",
        }
    }

    pub fn is_success(self) -> bool {
        self == PhReading::OnTarget
    }
}

/// Colour of the solution in the beaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Acidic,
    Neutral,
    Basic,
}

impl Tint {
    pub fn for_ph(ph: f64) -> Self {
        if ph < ACIDIC_BELOW {
            Tint::Acidic
        } else if ph > BASIC_ABOVE {
            Tint::Basic
        } else {
            Tint::Neutral
        }
    }
}

/// How the plant looks at the current pH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantMood {
    Bloomed,
    Thriving,
    Growing,
    Wilting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitrationView {
    pub ph: f64,
    pub target_ph: f64,
    pub tint: Tint,
    pub mood: PlantMood,
    pub feedback: Option<PhReading>,
    pub complete: bool,
}

/// pH balancing experiment
#[derive(Debug, Clone)]
pub struct Titration {
    ph: f64,
    target: f64,
    tolerance: f64,
    reward: u32,
    feedback: Option<PhReading>,
    complete: bool,
}

impl Titration {
    pub fn new(config: &TitrationConfig) -> Self {
        Self {
            ph: round_tenth(config.start_ph.clamp(PH_MIN, PH_MAX)),
            target: config.target_ph,
            tolerance: config.tolerance,
            reward: config.reward,
            feedback: None,
            complete: false,
        }
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn feedback(&self) -> Option<PhReading> {
        self.feedback
    }

    /// Add acid or base. Clears the previous reading.
    pub fn adjust(&mut self, shift: PhShift) -> Result<f64, LabError> {
        if self.complete {
            return Err(LabError::Complete);
        }
        self.ph = round_tenth((self.ph + shift.delta()).clamp(PH_MIN, PH_MAX));
        self.feedback = None;
        Ok(self.ph)
    }

    /// Check the soil. Succeeds once the pH is within tolerance of the
    /// target, granting the reward a single time.
    pub fn evaluate(&mut self) -> Result<(PhReading, Option<u32>), LabError> {
        if self.complete {
            return Err(LabError::Complete);
        }

        let distance = (self.ph - self.target).abs();
        let reading = if distance <= self.tolerance {
            PhReading::OnTarget
        } else if self.ph > self.target {
            PhReading::TooBasic
        } else {
            PhReading::TooAcidic
        };
        self.feedback = Some(reading);

        if reading.is_success() {
            self.complete = true;
            Ok((reading, Some(self.reward)))
        } else {
            Ok((reading, None))
        }
    }

    pub fn mood(&self) -> PlantMood {
        if self.complete {
            return PlantMood::Bloomed;
        }
        let distance = (self.ph - self.target).abs();
        if distance <= THRIVING_WITHIN {
            PlantMood::Thriving
        } else if distance > WILTING_BEYOND {
            PlantMood::Wilting
        } else {
            PlantMood::Growing
        }
    }
}

impl Experiment for Titration {
    fn view(&self) -> LabView {
        LabView::Titration(TitrationView {
            ph: self.ph,
            target_ph: self.target,
            tint: Tint::for_ph(self.ph),
            mood: self.mood(),
            feedback: self.feedback,
            complete: self.complete,
        })
    }

    fn apply(&mut self, action: LabAction) -> Result<LabStep, LabError> {
        match action {
            LabAction::Adjust(shift) => self.adjust(shift).map(|_| LabStep::none()),
            LabAction::CheckGrowth => {
                let (_, reward) = self.evaluate()?;
                Ok(LabStep {
                    reward,
                    deferred: None,
                })
            }
            _ => Err(LabError::Unsupported),
        }
    }

    fn resolve(&mut self, _effect: LabEffect) -> Resolution {
        Resolution::default()
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
