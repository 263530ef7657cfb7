//! Tests for deferred lab effects and session cancellation

use std::time::Duration;

use crate::config::Course;
use crate::flow::{FlowStage, LessonFlow};
use crate::model::ModuleId;
use crate::simulation::{
    Experiment, LabAction, LabView, PuzzleLevel, Simulation, Slot, Solute,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn flow_in_lab(module: &str) -> LessonFlow {
    let mut flow = LessonFlow::new(Course::builtin()).unwrap();
    flow.start_module(&ModuleId::new(module)).unwrap();
    flow.begin_lab().unwrap();
    flow
}

fn solve_synthesis(flow: &mut LessonFlow) {
    for (atom, slot) in [(0, Slot::Left1), (1, Slot::Left2), (2, Slot::Product)] {
        flow.apply(LabAction::SelectAtom(atom)).unwrap();
        flow.apply(LabAction::Place(slot)).unwrap();
    }
}

fn puzzle_level(flow: &LessonFlow) -> Option<PuzzleLevel> {
    match flow.simulation() {
        Some(Simulation::Reaction(puzzle)) => Some(puzzle.level()),
        _ => None,
    }
}

#[test]
fn test_level_up_waits_for_delay() {
    let mut flow = flow_in_lab("reaction-types");
    solve_synthesis(&mut flow);
    assert_eq!(flow.pending_effects(), 1);

    let report = flow.tick(ms(999));
    assert!(!report.changed());
    assert_eq!(puzzle_level(&flow), Some(PuzzleLevel::Synthesis));

    let report = flow.tick(ms(1));
    assert_eq!(report.applied, 1);
    assert_eq!(puzzle_level(&flow), Some(PuzzleLevel::Replacement));
}

#[test]
fn test_replacement_auto_advances_to_quiz() {
    let mut flow = flow_in_lab("reaction-types");
    solve_synthesis(&mut flow);
    flow.tick(ms(1000));

    flow.apply(LabAction::SelectAtom(0)).unwrap();
    let report = flow.apply(LabAction::Place(Slot::Compound)).unwrap();
    assert_eq!(report.scheduled, Some(ms(1500)));
    assert_eq!(flow.stage(), FlowStage::ModuleSimulation);

    let tick = flow.tick(ms(1500));
    assert_eq!(tick.xp_gained, 75);
    assert!(tick.entered_quiz);
    assert_eq!(flow.stage(), FlowStage::ModuleQuiz);
    assert_eq!(flow.experience().points(), 1250 + 75);
}

#[test]
fn test_stale_effect_dropped_after_back() {
    let mut flow = flow_in_lab("reaction-types");
    solve_synthesis(&mut flow);
    flow.back().unwrap();
    assert_eq!(flow.pending_effects(), 0);

    // Re-enter before the old delay would have elapsed
    flow.start_module(&ModuleId::new("reaction-types")).unwrap();
    flow.begin_lab().unwrap();
    let report = flow.tick(ms(5000));
    assert!(!report.changed());
    assert_eq!(puzzle_level(&flow), Some(PuzzleLevel::Synthesis));
}

#[test]
fn test_stale_reveal_cannot_reach_other_lab() {
    let mut flow = flow_in_lab("solution-properties");
    flow.apply(LabAction::SelectSolute(Solute::Salt)).unwrap();
    flow.apply(LabAction::Mix).unwrap();
    flow.back().unwrap();

    flow.start_module(&ModuleId::new("solution-properties"))
        .unwrap();
    flow.begin_lab().unwrap();
    flow.apply(LabAction::SelectSolute(Solute::Salt)).unwrap();
    flow.apply(LabAction::Mix).unwrap();

    // Only the live session's reveal lands, and only one reward
    let report = flow.tick(ms(1500));
    assert_eq!(report.applied, 1);
    assert_eq!(report.xp_gained, 20);
    assert_eq!(flow.experience().points(), 1270);
}

#[test]
fn test_conductivity_reveal_after_delay() {
    let mut flow = flow_in_lab("solution-properties");
    flow.apply(LabAction::SelectSolute(Solute::Sugar)).unwrap();
    flow.apply(LabAction::Mix).unwrap();

    flow.tick(ms(1000));
    let Some(LabView::Conductivity(view)) = flow.lab_view() else {
        panic!("expected conductivity read-out");
    };
    assert!(view.mixed);
    assert_eq!(view.conducts, None);

    flow.tick(ms(500));
    let Some(LabView::Conductivity(view)) = flow.lab_view() else {
        panic!("expected conductivity read-out");
    };
    assert_eq!(view.conducts, Some(false));
    assert!(!flow.simulation().unwrap().is_complete());
    // Non-electrolytes never leave the lab on their own
    assert_eq!(flow.stage(), FlowStage::ModuleSimulation);
}

#[test]
fn test_double_mix_while_pending_schedules_once() {
    let mut flow = flow_in_lab("solution-properties");
    flow.apply(LabAction::SelectSolute(Solute::Salt)).unwrap();
    flow.apply(LabAction::Mix).unwrap();
    assert!(flow.apply(LabAction::Mix).is_err());
    assert_eq!(flow.pending_effects(), 1);
}

#[test]
fn test_taking_quiz_cancels_lab_effects() {
    let mut flow = flow_in_lab("solution-properties");
    flow.apply(LabAction::SelectSolute(Solute::Salt)).unwrap();
    flow.apply(LabAction::Mix).unwrap();
    flow.tick(ms(1500));
    flow.apply(LabAction::Reset).unwrap();
    flow.apply(LabAction::SelectSolute(Solute::Oil)).unwrap();
    flow.apply(LabAction::Mix).unwrap();

    flow.take_quiz().unwrap();
    assert_eq!(flow.pending_effects(), 0);
    assert!(!flow.tick(ms(1500)).changed());
}
