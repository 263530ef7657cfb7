use chemxplore_core::simulation::{
    ConductivityView, PH_MAX, PhShift, PlantMood, PuzzleLevel, ReactionView, Solute, Tint,
    TitrationView,
};
use chemxplore_core::{LabAction, LabView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::Screen;
use crate::actions;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, clamp_step};

/// The running experiment for the active module
pub struct LabScreen;

impl LabScreen {
    pub fn new() -> Self {
        Self
    }

    // ========== Key handling ==========

    fn handle_titration(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let lab = &state.keybindings.lab;
        let action = if KeybindingsConfig::matches(key, &lab.add_acid) {
            LabAction::Adjust(PhShift::Acid)
        } else if KeybindingsConfig::matches(key, &lab.add_base) {
            LabAction::Adjust(PhShift::Base)
        } else if KeybindingsConfig::matches(key, &lab.check) {
            LabAction::CheckGrowth
        } else {
            return EventResult::NotHandled;
        };
        actions::lab_action(state, action).apply(state);
        EventResult::Handled
    }

    fn handle_reaction(key: &AppKeyEvent, view: &ReactionView, state: &mut AppState) -> EventResult {
        if let Some(index) = key.digit_index() {
            actions::lab_action(state, LabAction::SelectAtom(index)).apply(state);
            return EventResult::Handled;
        }

        let nav = &state.keybindings.navigation;
        let len = view.slots.len();
        if KeybindingsConfig::matches(key, &nav.left) {
            state.cursors.lab = clamp_step(state.cursors.lab, -1, len);
        } else if KeybindingsConfig::matches(key, &nav.right) {
            state.cursors.lab = clamp_step(state.cursors.lab, 1, len);
        } else if KeybindingsConfig::matches(key, &nav.confirm) {
            let Some(&(slot, _)) = view.slots.get(Self::slot_cursor(state, view)) else {
                return EventResult::Handled;
            };
            actions::lab_action(state, LabAction::Place(slot)).apply(state);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn handle_conductivity(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        let lab = &state.keybindings.lab;
        let len = Solute::ALL.len();
        if KeybindingsConfig::matches(key, &nav.left) {
            state.cursors.lab = clamp_step(state.cursors.lab, -1, len);
        } else if KeybindingsConfig::matches(key, &nav.right) {
            state.cursors.lab = clamp_step(state.cursors.lab, 1, len);
        } else if KeybindingsConfig::matches(key, &nav.confirm) {
            let solute = Solute::ALL[state.cursors.lab.min(len - 1)];
            actions::lab_action(state, LabAction::SelectSolute(solute)).apply(state);
        } else if KeybindingsConfig::matches(key, &lab.mix) {
            actions::lab_action(state, LabAction::Mix).apply(state);
        } else if KeybindingsConfig::matches(key, &lab.reset) {
            actions::lab_action(state, LabAction::Reset).apply(state);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    /// Slot cursor clamped to the current level, which shrinks on level 2
    fn slot_cursor(state: &AppState, view: &ReactionView) -> usize {
        state.cursors.lab.min(view.slots.len().saturating_sub(1))
    }

    // ========== Rendering ==========

    fn tint_color(tint: Tint) -> Color {
        match tint {
            Tint::Acidic => Color::Red,
            Tint::Neutral => Color::Green,
            Tint::Basic => Color::Blue,
        }
    }

    fn mood_text(mood: PlantMood) -> (&'static str, Color) {
        match mood {
            PlantMood::Bloomed => ("The Zogberry is in full bloom!", Color::Magenta),
            PlantMood::Thriving => ("The Zogberry looks healthy.", Color::Green),
            PlantMood::Growing => ("The Zogberry is hanging on.", Color::Yellow),
            PlantMood::Wilting => ("The Zogberry is wilting.", Color::Red),
        }
    }

    fn render_titration(frame: &mut Frame, area: Rect, view: &TitrationView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // pH meter
                Constraint::Length(3), // Plant
                Constraint::Min(3),    // Feedback
            ])
            .split(area);

        let color = Self::tint_color(view.tint);
        let meter = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" SOIL pH (target {:.1}) ", view.target_ph)),
            )
            .gauge_style(Style::default().fg(color))
            .ratio((view.ph / PH_MAX).clamp(0.0, 1.0))
            .label(format!("pH {:.1}", view.ph));
        frame.render_widget(meter, chunks[0]);

        let (mood, mood_color) = Self::mood_text(view.mood);
        let plant = Paragraph::new(Line::from(Span::styled(mood, Style::default().fg(mood_color))))
            .block(Block::default().borders(Borders::ALL).title(" PLANT "));
        frame.render_widget(plant, chunks[1]);

        let feedback = match view.feedback {
            Some(reading) => {
                let color = if reading.is_success() {
                    Color::Green
                } else {
                    Color::Yellow
                };
                Line::from(Span::styled(reading.message(), Style::default().fg(color)))
            }
            None => Line::from(Span::styled(
                "Add acid or base, then check how the plant grows.",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let mut lines = vec![feedback];
        if view.complete {
            lines.push(Line::from(""));
            lines.push(Self::quiz_prompt());
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" ANALYSIS ")),
            chunks[2],
        );
    }

    fn render_reaction(frame: &mut Frame, area: Rect, view: &ReactionView, cursor: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Inventory
                Constraint::Length(3), // Slots
                Constraint::Min(3),    // Message
            ])
            .split(area);

        let mut inventory = Vec::new();
        for (idx, element) in view.inventory.iter().enumerate() {
            let style = if Some(*element) == view.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            inventory.push(Span::styled(
                format!("[{}] {} ", idx + 1, element.symbol()),
                style,
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(inventory)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(
                        " LEVEL {}: {} ",
                        view.level.number(),
                        view.level.title().to_uppercase()
                    )),
            ),
            chunks[0],
        );

        let mut slots = Vec::new();
        for (idx, (slot, content)) in view.slots.iter().enumerate() {
            let symbol = content.map_or("?", |element| element.symbol());
            let style = if idx == cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            slots.push(Span::styled(format!(" {}: {} ", slot.label(), symbol), style));
            slots.push(Span::raw(" "));
        }
        if view.product.is_none() && view.level == PuzzleLevel::Replacement {
            slots.push(Span::styled(
                format!("{}SO4", view.compound_metal.symbol()),
                Style::default().fg(Color::Blue),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(slots))
                .block(Block::default().borders(Borders::ALL).title(" SLOTS ")),
            chunks[1],
        );

        let mut lines = vec![Line::from(view.message.as_str())];
        if view.pending {
            lines.push(Line::from(Span::styled(
                "Reacting...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        if view.complete {
            lines.push(Self::quiz_prompt());
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" REACTION ")),
            chunks[2],
        );
    }

    fn render_conductivity(frame: &mut Frame, area: Rect, view: &ConductivityView, cursor: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Solutes
                Constraint::Length(4), // Beaker
                Constraint::Min(3),    // Circuit
            ])
            .split(area);

        let mut choices = Vec::new();
        for (idx, solute) in Solute::ALL.iter().enumerate() {
            let mut style = Style::default();
            if Some(*solute) == view.solute {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            if idx == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            choices.push(Span::styled(format!(" {} ", solute.label()), style));
            choices.push(Span::raw(" "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(choices))
                .block(Block::default().borders(Borders::ALL).title(" SOLUTES ")),
            chunks[0],
        );

        let beaker = match (view.solute, view.mixed) {
            (None, _) => Line::from(Span::styled(
                "Water. Pick something to dissolve.",
                Style::default().fg(Color::DarkGray),
            )),
            (Some(solute), false) => Line::from(format!("Water + {}. Press m to stir.", solute.label())),
            (Some(solute), true) => Line::from(solute.behaviour()),
        };
        frame.render_widget(
            Paragraph::new(beaker)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" BEAKER ")),
            chunks[1],
        );

        let bulb = match (view.conducts, view.mixed) {
            (Some(true), _) => Span::styled(
                view.result_label.unwrap_or_default(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            (Some(false), _) => Span::styled(
                view.result_label.unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            ),
            (None, true) => Span::styled("Testing circuit...", Style::default().fg(Color::DarkGray)),
            (None, false) => Span::raw("Bulb off"),
        };
        let mut lines = vec![Line::from(bulb)];
        if view.complete {
            lines.push(Line::from(""));
            lines.push(Self::quiz_prompt());
        }
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" CIRCUIT ")),
            chunks[2],
        );
    }

    fn quiz_prompt() -> Line<'static> {
        Line::from(Span::styled(
            "Lab complete! Press t to take the quiz.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

impl Default for LabScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LabScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if KeybindingsConfig::matches(&key, &state.keybindings.lab.take_quiz) {
            actions::take_quiz(state).apply(state);
            return EventResult::Handled;
        }

        match state.flow.lab_view() {
            Some(LabView::Titration(_)) => Self::handle_titration(&key, state),
            Some(LabView::Reaction(view)) => Self::handle_reaction(&key, &view, state),
            Some(LabView::Conductivity(_)) => Self::handle_conductivity(&key, state),
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(view) = state.flow.lab_view() else {
            return;
        };
        let title = state
            .flow
            .active_module_config()
            .map_or("Lab", |module| module.lab.title());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title.to_uppercase()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &view {
            LabView::Titration(view) => Self::render_titration(frame, inner, view),
            LabView::Reaction(view) => {
                Self::render_reaction(frame, inner, view, Self::slot_cursor(state, view))
            }
            LabView::Conductivity(view) => {
                Self::render_conductivity(frame, inner, view, state.cursors.lab)
            }
        }
    }
}

impl Screen for LabScreen {
    fn title(&self) -> &str {
        "Lab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use chemxplore_core::{Course, FlowStage, LessonFlow, ModuleId};
    use std::time::Duration;

    fn lab_state(module: &str) -> AppState {
        let mut state = AppState::new(
            LessonFlow::new(Course::builtin()).unwrap(),
            KeybindingsConfig::default(),
        );
        actions::start_module(&mut state, &ModuleId::new(module));
        actions::begin_lab(&mut state);
        state
    }

    fn press(screen: &mut LabScreen, state: &mut AppState, c: char) -> EventResult {
        screen.handle_key(AppKeyEvent::plain(KeyCode::Char(c)), state)
    }

    #[test]
    fn test_titration_keys() {
        let mut state = lab_state("acids-bases");
        let mut screen = LabScreen::new();

        for _ in 0..3 {
            press(&mut screen, &mut state, 'a');
        }
        press(&mut screen, &mut state, 'c');
        let Some(LabView::Titration(view)) = state.flow.lab_view() else {
            panic!("expected titration");
        };
        assert!(view.complete);

        press(&mut screen, &mut state, 't');
        assert_eq!(state.stage(), FlowStage::ModuleQuiz);
    }

    #[test]
    fn test_take_quiz_refused_before_completion() {
        let mut state = lab_state("acids-bases");
        press(&mut LabScreen::new(), &mut state, 't');
        assert_eq!(state.stage(), FlowStage::ModuleSimulation);
        assert!(matches!(state.notice, Some(crate::state::Notice::Error(_))));
    }

    #[test]
    fn test_reaction_keys() {
        let mut state = lab_state("reaction-types");
        let mut screen = LabScreen::new();

        // H into reactant 1, H into reactant 2, O into the product slot
        press(&mut screen, &mut state, '1');
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        press(&mut screen, &mut state, '2');
        press(&mut screen, &mut state, 'l');
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        press(&mut screen, &mut state, '3');
        press(&mut screen, &mut state, 'l');
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        assert_eq!(state.flow.pending_effects(), 1);

        actions::tick(&mut state, Duration::from_millis(1000));
        // Level 2 has a single slot; the stale cursor is clamped
        press(&mut screen, &mut state, '1');
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        actions::tick(&mut state, Duration::from_millis(1500));
        assert_eq!(state.stage(), FlowStage::ModuleQuiz);
    }

    #[test]
    fn test_conductivity_keys() {
        let mut state = lab_state("solution-properties");
        let mut screen = LabScreen::new();

        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        press(&mut screen, &mut state, 'm');
        actions::tick(&mut state, Duration::from_millis(1500));

        let Some(LabView::Conductivity(view)) = state.flow.lab_view() else {
            panic!("expected conductivity");
        };
        assert_eq!(view.conducts, Some(true));
        assert!(view.complete);

        press(&mut screen, &mut state, 'r');
        screen.handle_key(AppKeyEvent::plain(KeyCode::Right), &mut state);
        assert_eq!(state.cursors.lab, 1);
    }
}
