//! Keybindings configuration data structures.
//!
//! Defines the customizable keyboard shortcuts that can be loaded from
//! `~/.chemxplore/keybindings.yaml`. Any section or action left out of the
//! file keeps its default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Work on every view
    pub global: GlobalBindings,
    /// Cursor movement and confirmation
    pub navigation: NavigationBindings,
    /// Lab experiment controls
    pub lab: LabBindings,
    /// Quiz answer keys
    pub quiz: QuizBindings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub back: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            back: vec!["esc".into(), "backspace".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub confirm: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            left: vec!["h".into(), "left".into()],
            right: vec!["l".into(), "right".into()],
            confirm: vec!["enter".into(), "space".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabBindings {
    pub add_acid: Vec<String>,
    pub add_base: Vec<String>,
    pub check: Vec<String>,
    pub mix: Vec<String>,
    pub reset: Vec<String>,
    /// Leave a finished lab for the quiz
    pub take_quiz: Vec<String>,
}

impl Default for LabBindings {
    fn default() -> Self {
        Self {
            add_acid: vec!["a".into(), "-".into()],
            add_base: vec!["b".into(), "+".into()],
            check: vec!["c".into()],
            mix: vec!["m".into()],
            reset: vec!["r".into()],
            take_quiz: vec!["t".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizBindings {
    pub option_a: Vec<String>,
    pub option_b: Vec<String>,
    pub option_c: Vec<String>,
    pub option_d: Vec<String>,
    pub next: Vec<String>,
}

impl Default for QuizBindings {
    fn default() -> Self {
        Self {
            option_a: vec!["a".into(), "1".into()],
            option_b: vec!["b".into(), "2".into()],
            option_c: vec!["c".into(), "3".into()],
            option_d: vec!["d".into(), "4".into()],
            next: vec!["n".into()],
        }
    }
}

impl QuizBindings {
    /// Bindings for each answer option, in option order
    pub fn options(&self) -> [&[String]; 4] {
        [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ]
    }
}
