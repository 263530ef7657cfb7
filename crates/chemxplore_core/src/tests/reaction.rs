//! Tests for the atom-matching reaction puzzle

use std::time::Duration;

use crate::error::LabError;
use crate::simulation::{
    Element, Experiment, LabAction, LabEffect, LabView, PuzzleLevel, ReactionConfig,
    ReactionPuzzle, Slot,
};

fn puzzle() -> ReactionPuzzle {
    ReactionPuzzle::new(&ReactionConfig::default())
}

/// Fill the synthesis slots: H, H into the reactants, O into the product
fn solve_synthesis(puzzle: &mut ReactionPuzzle) {
    puzzle.select_atom(0).unwrap();
    puzzle.place(Slot::Left1).unwrap();
    puzzle.select_atom(1).unwrap();
    puzzle.place(Slot::Left2).unwrap();
    puzzle.select_atom(2).unwrap();
    let step = puzzle.place(Slot::Product).unwrap();
    let deferred = step.deferred.expect("level up should be scheduled");
    assert_eq!(deferred.effect, LabEffect::AdvanceLevel);
    assert_eq!(deferred.delay, Duration::from_millis(1000));
    puzzle.resolve(LabEffect::AdvanceLevel);
}

#[test]
fn test_placing_consumes_selection() {
    let mut puzzle = puzzle();
    assert_eq!(puzzle.place(Slot::Left1), Err(LabError::NoAtomSelected));

    assert_eq!(puzzle.select_atom(2).unwrap(), Element::Oxygen);
    // A new pick replaces the old one
    assert_eq!(puzzle.select_atom(0).unwrap(), Element::Hydrogen);
    puzzle.place(Slot::Left1).unwrap();

    assert_eq!(puzzle.slot(Slot::Left1), Some(Element::Hydrogen));
    assert_eq!(puzzle.selected(), None);
    assert_eq!(puzzle.place(Slot::Left2), Err(LabError::NoAtomSelected));
}

#[test]
fn test_invalid_picks_are_rejected() {
    let mut puzzle = puzzle();
    assert_eq!(puzzle.select_atom(3), Err(LabError::InvalidAtom(3)));
    puzzle.select_atom(0).unwrap();
    assert_eq!(
        puzzle.place(Slot::Compound),
        Err(LabError::SlotUnavailable(Slot::Compound))
    );
    // Selection survives a rejected placement
    assert_eq!(puzzle.selected(), Some(Element::Hydrogen));
}

#[test]
fn test_wrong_synthesis_does_not_advance() {
    let mut puzzle = puzzle();
    puzzle.select_atom(2).unwrap();
    puzzle.place(Slot::Left1).unwrap();
    puzzle.select_atom(0).unwrap();
    puzzle.place(Slot::Left2).unwrap();
    puzzle.select_atom(1).unwrap();
    let step = puzzle.place(Slot::Product).unwrap();

    assert!(step.deferred.is_none());
    assert_eq!(puzzle.level(), PuzzleLevel::Synthesis);
}

#[test]
fn test_guidance_after_two_hydrogens() {
    let mut puzzle = puzzle();
    puzzle.select_atom(0).unwrap();
    puzzle.place(Slot::Left1).unwrap();
    puzzle.select_atom(1).unwrap();
    puzzle.place(Slot::Left2).unwrap();
    assert_eq!(puzzle.message(), "Two Hydrogens... now add Oxygen!");
}

#[test]
fn test_synthesis_advances_after_delay() {
    let mut puzzle = puzzle();
    solve_synthesis(&mut puzzle);

    assert_eq!(puzzle.level(), PuzzleLevel::Replacement);
    assert_eq!(puzzle.selected(), None);
    assert_eq!(puzzle.slot(Slot::Left1), None);
    assert_eq!(
        puzzle.message(),
        "Synthesis Complete! Level 2: Single Replacement."
    );
}

#[test]
fn test_actions_wait_for_pending_level_up() {
    let mut puzzle = puzzle();
    puzzle.select_atom(0).unwrap();
    puzzle.place(Slot::Left1).unwrap();
    puzzle.select_atom(1).unwrap();
    puzzle.place(Slot::Left2).unwrap();
    puzzle.select_atom(2).unwrap();
    puzzle.place(Slot::Product).unwrap();

    assert_eq!(puzzle.select_atom(0), Err(LabError::Pending));
    let LabView::Reaction(view) = puzzle.view() else {
        panic!("expected reaction view");
    };
    assert!(view.pending);
}

#[test]
fn test_less_reactive_metal_fails_and_allows_retry() {
    let mut puzzle = puzzle();
    solve_synthesis(&mut puzzle);

    // Copper cannot displace copper
    puzzle.select_atom(1).unwrap();
    let step = puzzle.place(Slot::Compound).unwrap();
    assert!(step.deferred.is_none());
    assert_eq!(puzzle.message(), "Reaction Failed. Not reactive enough.");
    assert_eq!(puzzle.selected(), None);
    assert_eq!(puzzle.level(), PuzzleLevel::Replacement);
    assert!(!puzzle.is_complete());

    puzzle.select_atom(0).unwrap();
    assert!(puzzle.place(Slot::Compound).unwrap().deferred.is_some());
}

#[test]
fn test_magnesium_completes_with_single_reward() {
    let mut puzzle = puzzle();
    solve_synthesis(&mut puzzle);

    puzzle.select_atom(0).unwrap();
    let step = puzzle.place(Slot::Compound).unwrap();
    let deferred = step.deferred.expect("finish should be scheduled");
    assert_eq!(deferred.delay, Duration::from_millis(1500));
    assert_eq!(puzzle.product(), Some(Element::Magnesium));
    assert!(!puzzle.is_complete());

    let resolution = puzzle.resolve(LabEffect::FinishReplacement);
    assert_eq!(resolution.reward, Some(75));
    assert!(resolution.auto_advance);
    assert!(puzzle.is_complete());

    // A duplicate delivery changes nothing
    let again = puzzle.resolve(LabEffect::FinishReplacement);
    assert_eq!(again.reward, None);
    assert_eq!(puzzle.select_atom(0), Err(LabError::Complete));
}

#[test]
fn test_unexpected_effect_is_ignored() {
    let mut puzzle = puzzle();
    let resolution = puzzle.resolve(LabEffect::AdvanceLevel);
    assert_eq!(resolution.reward, None);
    assert_eq!(puzzle.level(), PuzzleLevel::Synthesis);
}

#[test]
fn test_activity_series() {
    assert!(Element::Magnesium.activity() > Element::Copper.activity());
    assert_eq!(Element::Copper.activity(), 3);
    assert_eq!(Element::Magnesium.activity(), 8);
}
