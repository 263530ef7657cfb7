// Actions module - lesson flow handlers
//
// Each handler drives one `LessonFlow` operation for the UI, logs the
// outcome, and reports what the status bar should show.

use std::time::Duration;

use chemxplore_core::{FlowError, LabAction, ModuleId, QuizStep};

use crate::state::AppState;

/// Result of an action handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed, clear any status message
    Done,
    /// Action completed with something worth telling the learner
    Notice(String),
    /// Action was rejected
    Error(String),
}

impl ActionResult {
    pub fn notice(msg: impl Into<String>) -> Self {
        ActionResult::Notice(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }

    /// Show the result in the status bar
    pub fn apply(self, state: &mut AppState) {
        match self {
            ActionResult::Done => state.clear_notice(),
            ActionResult::Notice(msg) => state.set_info(msg),
            ActionResult::Error(msg) => state.set_error(msg),
        }
    }
}

fn rejected(action: &str, err: FlowError) -> ActionResult {
    tracing::debug!(action, error = %err, "Action rejected");
    ActionResult::error(err.to_string())
}

/// Open the module under the home cursor
pub fn start_selected_module(state: &mut AppState) -> ActionResult {
    let Some(id) = state.selected_module().map(|m| m.id.clone()) else {
        return ActionResult::error("No module selected");
    };
    start_module(state, &id)
}

pub fn start_module(state: &mut AppState, id: &ModuleId) -> ActionResult {
    match state.flow.start_module(id) {
        Ok(()) => {
            tracing::info!(module = %id, "Module opened");
            state.reset_view_cursors();
            ActionResult::Done
        }
        Err(FlowError::ModuleLocked(id)) => {
            tracing::debug!(module = %id, "Locked module ignored");
            ActionResult::notice("This module is locked.")
        }
        Err(e) => rejected("start_module", e),
    }
}

pub fn begin_lab(state: &mut AppState) -> ActionResult {
    match state.flow.begin_lab() {
        Ok(()) => {
            tracing::info!(module = ?state.flow.active_module(), "Lab started");
            state.reset_view_cursors();
            ActionResult::Done
        }
        Err(e) => rejected("begin_lab", e),
    }
}

pub fn lab_action(state: &mut AppState, action: LabAction) -> ActionResult {
    match state.flow.apply(action) {
        Ok(report) => {
            tracing::debug!(?action, ?report, "Lab action applied");
            if let Some(points) = report.reward {
                tracing::info!(points, total = report.total_xp.points(), "Lab reward granted");
                ActionResult::notice(format!("+{points} XP"))
            } else if report.scheduled.is_some() {
                ActionResult::notice("Analyzing...")
            } else {
                ActionResult::Done
            }
        }
        Err(e) => rejected("lab_action", e),
    }
}

pub fn take_quiz(state: &mut AppState) -> ActionResult {
    match state.flow.take_quiz() {
        Ok(()) => {
            tracing::info!(module = ?state.flow.active_module(), "Quiz started");
            state.reset_view_cursors();
            ActionResult::Done
        }
        Err(e) => rejected("take_quiz", e),
    }
}

pub fn answer(state: &mut AppState, option: usize) -> ActionResult {
    match state.flow.answer(option) {
        Ok(feedback) => {
            tracing::debug!(option, correct = feedback.correct, "Quiz answer");
            state.cursors.option = option;
            if feedback.correct {
                ActionResult::notice("Correct!")
            } else {
                ActionResult::notice("Incorrect")
            }
        }
        Err(e) => rejected("answer", e),
    }
}

pub fn advance_quiz(state: &mut AppState) -> ActionResult {
    match state.flow.advance_quiz() {
        Ok(QuizStep::Next { index }) => {
            tracing::debug!(index, "Next question");
            state.cursors.option = 0;
            ActionResult::Done
        }
        Ok(QuizStep::Finished(summary)) => {
            if let Some(report) = state.flow.completion() {
                tracing::info!(
                    module = %report.module,
                    score = summary.score,
                    total = summary.total,
                    xp_gained = report.xp_gained,
                    total_xp = report.total_xp.points(),
                    "Module completed"
                );
                ActionResult::notice(format!("+{} XP", report.xp_gained))
            } else {
                ActionResult::Done
            }
        }
        Err(e) => rejected("advance_quiz", e),
    }
}

/// Leave the current view for Home
pub fn go_home(state: &mut AppState) -> ActionResult {
    let from = state.stage();
    match state.flow.back() {
        Ok(()) => {
            tracing::info!(from = from.name(), "Returned home");
            state.reset_view_cursors();
            ActionResult::Done
        }
        Err(e) => rejected("back", e),
    }
}

/// Advance lab timers. Returns `None` when nothing changed.
pub fn tick(state: &mut AppState, elapsed: Duration) -> Option<ActionResult> {
    let report = state.flow.tick(elapsed);
    if !report.changed() {
        return None;
    }
    tracing::debug!(?report, "Deferred lab effects applied");

    if report.entered_quiz {
        tracing::info!(module = ?state.flow.active_module(), "Lab finished, quiz started");
        state.reset_view_cursors();
    }
    if report.xp_gained > 0 {
        tracing::info!(points = report.xp_gained, "Lab reward granted");
        return Some(ActionResult::notice(format!("+{} XP", report.xp_gained)));
    }
    Some(ActionResult::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::keybindings_data::KeybindingsConfig;
    use chemxplore_core::simulation::{PhShift, Slot, Solute};
    use chemxplore_core::{Course, FlowStage, LessonFlow};

    fn state() -> AppState {
        AppState::new(
            LessonFlow::new(Course::builtin()).unwrap(),
            KeybindingsConfig::default(),
        )
    }

    fn enter_lab(state: &mut AppState, module: &str) {
        assert_eq!(start_module(state, &ModuleId::new(module)), ActionResult::Done);
        assert_eq!(begin_lab(state), ActionResult::Done);
    }

    #[test]
    fn test_reward_reported_as_notice() {
        let mut state = state();
        enter_lab(&mut state, "acids-bases");
        for _ in 0..3 {
            lab_action(&mut state, LabAction::Adjust(PhShift::Acid));
        }
        assert_eq!(
            lab_action(&mut state, LabAction::CheckGrowth),
            ActionResult::notice("+50 XP")
        );
    }

    #[test]
    fn test_rejection_becomes_error() {
        let mut state = state();
        enter_lab(&mut state, "solution-properties");
        let result = lab_action(&mut state, LabAction::Mix);
        assert!(matches!(result, ActionResult::Error(_)));

        result.apply(&mut state);
        assert!(matches!(state.notice, Some(crate::state::Notice::Error(_))));
    }

    #[test]
    fn test_tick_quiet_without_effects() {
        let mut state = state();
        assert_eq!(tick(&mut state, Duration::from_secs(1)), None);
    }

    #[test]
    fn test_tick_reports_reveal_reward() {
        let mut state = state();
        enter_lab(&mut state, "solution-properties");
        lab_action(&mut state, LabAction::SelectSolute(Solute::Salt));
        assert_eq!(
            lab_action(&mut state, LabAction::Mix),
            ActionResult::notice("Analyzing...")
        );
        assert_eq!(
            tick(&mut state, Duration::from_millis(1500)),
            Some(ActionResult::notice("+20 XP"))
        );
    }

    #[test]
    fn test_reaction_finish_moves_to_quiz() {
        let mut state = state();
        enter_lab(&mut state, "reaction-types");
        for (atom, slot) in [(0, Slot::Left1), (1, Slot::Left2), (2, Slot::Product)] {
            lab_action(&mut state, LabAction::SelectAtom(atom));
            lab_action(&mut state, LabAction::Place(slot));
        }
        tick(&mut state, Duration::from_millis(1000));
        lab_action(&mut state, LabAction::SelectAtom(0));
        lab_action(&mut state, LabAction::Place(Slot::Compound));
        state.cursors.lab = 2;

        tick(&mut state, Duration::from_millis(1500));
        assert_eq!(state.stage(), FlowStage::ModuleQuiz);
        assert_eq!(state.cursors.lab, 0);
    }

    #[test]
    fn test_go_home_keeps_module_cursor() {
        let mut state = state();
        state.move_module_cursor(2);
        assert_eq!(start_selected_module(&mut state), ActionResult::Done);
        assert_eq!(go_home(&mut state), ActionResult::Done);
        assert_eq!(state.cursors.module, 2);
        assert!(matches!(go_home(&mut state), ActionResult::Error(_)));
    }
}
