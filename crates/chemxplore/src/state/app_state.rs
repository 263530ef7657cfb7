use chemxplore_core::{FlowStage, LessonFlow, Module};

use crate::data::keybindings_data::KeybindingsConfig;

/// Per-view selection state. Reset whenever the lesson view changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    /// Highlighted module on the home view
    pub module: usize,
    /// Highlighted slot (reaction) or solute (conductivity) in the lab
    pub lab: usize,
    /// Highlighted answer option in the quiz
    pub option: usize,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct AppState {
    pub flow: LessonFlow,
    pub keybindings: KeybindingsConfig,
    pub cursors: Cursors,
    pub notice: Option<Notice>,
    pub exit: bool,
}

impl AppState {
    pub fn new(flow: LessonFlow, keybindings: KeybindingsConfig) -> Self {
        Self {
            flow,
            keybindings,
            cursors: Cursors::default(),
            notice: None,
            exit: false,
        }
    }

    pub fn stage(&self) -> FlowStage {
        self.flow.stage()
    }

    pub fn modules(&self) -> &[Module] {
        self.flow.progress().modules()
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.modules().get(self.cursors.module)
    }

    /// Move the home cursor, clamped to the module list
    pub fn move_module_cursor(&mut self, delta: isize) {
        let len = self.modules().len();
        self.cursors.module = clamp_step(self.cursors.module, delta, len);
    }

    /// Lab and quiz cursors start over on each new view; the home cursor
    /// stays on the module last played.
    pub fn reset_view_cursors(&mut self) {
        self.cursors.lab = 0;
        self.cursors.option = 0;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::Error(msg.into()));
    }

    pub fn set_info(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::Info(msg.into()));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

/// Move `index` by `delta` within `0..len` without wrapping
pub fn clamp_step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}
