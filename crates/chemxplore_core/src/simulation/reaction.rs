//! Reaction types lab: a two-level atom puzzle.
//!
//! Level 1 is a synthesis: fill both reactant slots with hydrogen and the
//! product slot with oxygen. Level 2 is a single replacement against copper
//! sulfate: only an atom more reactive than copper can displace it.
//!
//! Atoms are placed select-then-place. Picking an atom from the inventory
//! marks it selected (replacing any earlier pick); choosing a slot consumes
//! the selection.

use serde::{Deserialize, Serialize};

use super::{Experiment, LabAction, LabEffect, LabStep, LabView, Resolution, millis};
use crate::error::LabError;

const SYNTHESIS_INVENTORY: [Element; 3] = [Element::Hydrogen, Element::Hydrogen, Element::Oxygen];
const REPLACEMENT_INVENTORY: [Element; 2] = [Element::Magnesium, Element::Copper];

/// Metal bound in the level 2 compound
const COMPOUND_METAL: Element = Element::Copper;

const MSG_START: &str = "Drag atoms to the reaction slots.";
const MSG_TWO_HYDROGENS: &str = "Two Hydrogens... now add Oxygen!";
const MSG_LEVEL_TWO: &str = "Synthesis Complete! Level 2: Single Replacement.";
const MSG_FAILED: &str = "Reaction Failed. Not reactive enough.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionConfig {
    /// Pause between solving level 1 and entering level 2
    pub level_up_delay_ms: u64,
    /// Pause between a successful replacement and completion
    pub finish_delay_ms: u64,
    pub reward: u32,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            level_up_delay_ms: 1000,
            finish_delay_ms: 1500,
            reward: 75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Hydrogen,
    Oxygen,
    Copper,
    Magnesium,
}

impl Element {
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Oxygen => "O",
            Element::Copper => "Cu",
            Element::Magnesium => "Mg",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Hydrogen => "Hydrogen",
            Element::Oxygen => "Oxygen",
            Element::Copper => "Copper",
            Element::Magnesium => "Magnesium",
        }
    }

    /// Rank on the activity series; a higher rank displaces a lower one
    pub fn activity(self) -> u8 {
        match self {
            Element::Hydrogen => 1,
            Element::Oxygen => 2,
            Element::Copper => 3,
            Element::Magnesium => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Left1,
    Left2,
    Product,
    Compound,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::Left1 => "reactant 1",
            Slot::Left2 => "reactant 2",
            Slot::Product => "product",
            Slot::Compound => "compound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleLevel {
    Synthesis,
    Replacement,
}

impl PuzzleLevel {
    pub fn number(self) -> u8 {
        match self {
            PuzzleLevel::Synthesis => 1,
            PuzzleLevel::Replacement => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PuzzleLevel::Synthesis => "Synthesis",
            PuzzleLevel::Replacement => "Single Replacement",
        }
    }

    /// Slots the learner can fill on this level, in display order
    pub fn slots(self) -> &'static [Slot] {
        match self {
            PuzzleLevel::Synthesis => &[Slot::Left1, Slot::Left2, Slot::Product],
            PuzzleLevel::Replacement => &[Slot::Compound],
        }
    }

    pub fn inventory(self) -> &'static [Element] {
        match self {
            PuzzleLevel::Synthesis => &SYNTHESIS_INVENTORY,
            PuzzleLevel::Replacement => &REPLACEMENT_INVENTORY,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SynthesisSlots {
    left1: Option<Element>,
    left2: Option<Element>,
    product: Option<Element>,
}

impl SynthesisSlots {
    fn get(&self, slot: Slot) -> Option<Element> {
        match slot {
            Slot::Left1 => self.left1,
            Slot::Left2 => self.left2,
            Slot::Product => self.product,
            Slot::Compound => None,
        }
    }

    fn set(&mut self, slot: Slot, element: Element) {
        match slot {
            Slot::Left1 => self.left1 = Some(element),
            Slot::Left2 => self.left2 = Some(element),
            Slot::Product => self.product = Some(element),
            Slot::Compound => {}
        }
    }

    fn has_reactants(&self) -> bool {
        self.left1 == Some(Element::Hydrogen) && self.left2 == Some(Element::Hydrogen)
    }

    /// 2H + O: both reactant slots hydrogen, product slot oxygen
    fn is_solved(&self) -> bool {
        self.has_reactants() && self.product == Some(Element::Oxygen)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionView {
    pub level: PuzzleLevel,
    pub inventory: Vec<Element>,
    pub selected: Option<Element>,
    /// Slot contents for the current level, in display order
    pub slots: Vec<(Slot, Option<Element>)>,
    pub compound_metal: Element,
    /// Metal that displaced copper on level 2
    pub product: Option<Element>,
    pub message: String,
    pub pending: bool,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct ReactionPuzzle {
    config: ReactionConfig,
    level: PuzzleLevel,
    slots: SynthesisSlots,
    selected: Option<Element>,
    product: Option<Element>,
    message: String,
    pending: Option<LabEffect>,
    complete: bool,
    rewarded: bool,
}

impl ReactionPuzzle {
    pub fn new(config: &ReactionConfig) -> Self {
        Self {
            config: config.clone(),
            level: PuzzleLevel::Synthesis,
            slots: SynthesisSlots::default(),
            selected: None,
            product: None,
            message: MSG_START.to_string(),
            pending: None,
            complete: false,
            rewarded: false,
        }
    }

    pub fn level(&self) -> PuzzleLevel {
        self.level
    }

    pub fn selected(&self) -> Option<Element> {
        self.selected
    }

    pub fn slot(&self, slot: Slot) -> Option<Element> {
        self.slots.get(slot)
    }

    /// Metal that displaced copper, once a replacement succeeded
    pub fn product(&self) -> Option<Element> {
        self.product
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn ensure_open(&self) -> Result<(), LabError> {
        if self.complete {
            Err(LabError::Complete)
        } else if self.pending.is_some() {
            Err(LabError::Pending)
        } else {
            Ok(())
        }
    }

    /// Pick the atom at `index` in the current inventory
    pub fn select_atom(&mut self, index: usize) -> Result<Element, LabError> {
        self.ensure_open()?;
        let element = *self
            .level
            .inventory()
            .get(index)
            .ok_or(LabError::InvalidAtom(index))?;
        self.selected = Some(element);
        Ok(element)
    }

    /// Drop the selected atom into `slot`
    pub fn place(&mut self, slot: Slot) -> Result<LabStep, LabError> {
        self.ensure_open()?;
        if !self.level.slots().contains(&slot) {
            return Err(LabError::SlotUnavailable(slot));
        }
        let element = self.selected.ok_or(LabError::NoAtomSelected)?;

        match self.level {
            PuzzleLevel::Synthesis => Ok(self.place_synthesis(slot, element)),
            PuzzleLevel::Replacement => Ok(self.apply_replacement(element)),
        }
    }

    fn place_synthesis(&mut self, slot: Slot, element: Element) -> LabStep {
        self.slots.set(slot, element);
        self.selected = None;

        if self.slots.is_solved() {
            self.pending = Some(LabEffect::AdvanceLevel);
            return LabStep::deferred(
                millis(self.config.level_up_delay_ms),
                LabEffect::AdvanceLevel,
            );
        }
        if self.slots.has_reactants() {
            self.message = MSG_TWO_HYDROGENS.to_string();
        }
        LabStep::none()
    }

    fn apply_replacement(&mut self, element: Element) -> LabStep {
        if element.activity() > COMPOUND_METAL.activity() {
            self.message = format!("Reaction Success! {} is more reactive.", element.name());
            self.product = Some(element);
            self.pending = Some(LabEffect::FinishReplacement);
            LabStep::deferred(
                millis(self.config.finish_delay_ms),
                LabEffect::FinishReplacement,
            )
        } else {
            self.message = MSG_FAILED.to_string();
            self.selected = None;
            LabStep::none()
        }
    }
}

impl Experiment for ReactionPuzzle {
    fn view(&self) -> LabView {
        let slots = self
            .level
            .slots()
            .iter()
            .map(|&slot| {
                let content = match slot {
                    Slot::Compound => self.product,
                    _ => self.slots.get(slot),
                };
                (slot, content)
            })
            .collect();

        LabView::Reaction(ReactionView {
            level: self.level,
            inventory: self.level.inventory().to_vec(),
            selected: self.selected,
            slots,
            compound_metal: COMPOUND_METAL,
            product: self.product,
            message: self.message.clone(),
            pending: self.pending.is_some(),
            complete: self.complete,
        })
    }

    fn apply(&mut self, action: LabAction) -> Result<LabStep, LabError> {
        match action {
            LabAction::SelectAtom(index) => self.select_atom(index).map(|_| LabStep::none()),
            LabAction::Place(slot) => self.place(slot),
            _ => Err(LabError::Unsupported),
        }
    }

    fn resolve(&mut self, effect: LabEffect) -> Resolution {
        if self.pending != Some(effect) {
            return Resolution::default();
        }
        self.pending = None;

        match effect {
            LabEffect::AdvanceLevel => {
                self.level = PuzzleLevel::Replacement;
                self.slots = SynthesisSlots::default();
                self.selected = None;
                self.message = MSG_LEVEL_TWO.to_string();
                Resolution::default()
            }
            LabEffect::FinishReplacement => {
                self.complete = true;
                self.selected = None;
                let reward = (!self.rewarded).then_some(self.config.reward);
                self.rewarded = true;
                Resolution {
                    reward,
                    auto_advance: true,
                }
            }
            LabEffect::RevealConductivity => Resolution::default(),
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}
