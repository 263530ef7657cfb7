use chemxplore_core::{QuizPhase, QuizView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::Screen;
use crate::actions;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, clamp_step};

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One question at a time with instant feedback
pub struct QuizScreen;

impl QuizScreen {
    pub fn new() -> Self {
        Self
    }

    fn option_style(view: &QuizView, idx: usize, cursor: usize) -> Style {
        if let Some(correct) = view.correct_index {
            if idx == correct {
                return Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD);
            }
            if Some(idx) == view.selected {
                return Style::default().fg(Color::Red);
            }
            return Style::default().fg(Color::DarkGray);
        }
        if idx == cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    fn render_explanation(frame: &mut Frame, area: Rect, view: &QuizView) {
        let Some(explanation) = &view.explanation else {
            return;
        };
        let correct = view.selected == view.correct_index;
        let (heading, color) = if correct {
            ("Correct! ", Color::Green)
        } else {
            ("Incorrect. ", Color::Red)
        };
        let next = if view.is_last {
            "Press n to finish."
        } else {
            "Press n for the next question."
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(heading, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(explanation.as_str()),
            ]),
            Line::from(Span::styled(next, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" EXPLANATION ")),
            area,
        );
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for QuizScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let Some(view) = state.flow.quiz_view() else {
            return EventResult::NotHandled;
        };
        let quiz = &state.keybindings.quiz;
        let nav = &state.keybindings.navigation;

        let pressed_option = quiz
            .options()
            .iter()
            .position(|bindings| KeybindingsConfig::matches(&key, bindings));

        if let Some(option) = pressed_option {
            actions::answer(state, option).apply(state);
        } else if KeybindingsConfig::matches(&key, &quiz.next) {
            actions::advance_quiz(state).apply(state);
        } else if KeybindingsConfig::matches(&key, &nav.up) {
            state.cursors.option = clamp_step(state.cursors.option, -1, view.options.len());
        } else if KeybindingsConfig::matches(&key, &nav.down) {
            state.cursors.option = clamp_step(state.cursors.option, 1, view.options.len());
        } else if KeybindingsConfig::matches(&key, &nav.confirm) {
            let cursor = state.cursors.option;
            let result = match view.phase {
                QuizPhase::AwaitingAnswer => actions::answer(state, cursor),
                QuizPhase::Revealed | QuizPhase::Finished => actions::advance_quiz(state),
            };
            result.apply(state);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(view) = state.flow.quiz_view() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Question
                Constraint::Length(6), // Options
                Constraint::Min(0),    // Explanation
            ])
            .split(area);

        let question = Paragraph::new(Line::from(Span::styled(
            view.text.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(format!(
            " QUESTION {} OF {}  |  SCORE {} ",
            view.index + 1,
            view.total,
            view.score
        )));
        frame.render_widget(question, chunks[0]);

        let items: Vec<ListItem> = view
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let letter = OPTION_LETTERS.get(idx).copied().unwrap_or('?');
                let style = Self::option_style(&view, idx, state.cursors.option);
                ListItem::new(Line::from(Span::styled(format!("{letter}) {option}"), style)))
            })
            .collect();
        frame.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" OPTIONS ")),
            chunks[1],
        );

        if view.phase == QuizPhase::Revealed {
            Self::render_explanation(frame, chunks[2], &view);
        }
    }
}

impl Screen for QuizScreen {
    fn title(&self) -> &str {
        "Quiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::Notice;
    use chemxplore_core::simulation::{ConductivityConfig, Solute};
    use chemxplore_core::{
        Course, CourseBuilder, FlowStage, LabAction, LessonFlow, ModuleBuilder, ModuleId,
    };
    use std::time::Duration;

    fn quiz_state() -> AppState {
        let course = CourseBuilder::new()
            .module(
                ModuleBuilder::conductivity("solutions", "Solutions", ConductivityConfig::default())
                    .question(
                        "Which conducts?",
                        ["Salt water", "Sugar water", "Oil", "Air"],
                        0,
                        "Ions.",
                    )
                    .question(
                        "Sugar is a...",
                        ["Metal", "Electrolyte", "Non-electrolyte", "Gas"],
                        2,
                        "No ions.",
                    ),
            )
            .build()
            .unwrap();
        let mut state = AppState::new(LessonFlow::new(course).unwrap(), KeybindingsConfig::default());
        actions::start_module(&mut state, &ModuleId::new("solutions"));
        actions::begin_lab(&mut state);
        actions::lab_action(&mut state, LabAction::SelectSolute(Solute::Salt));
        actions::lab_action(&mut state, LabAction::Mix);
        actions::tick(&mut state, Duration::from_millis(1500));
        actions::take_quiz(&mut state);
        state
    }

    fn key(c: char) -> AppKeyEvent {
        AppKeyEvent::plain(KeyCode::Char(c))
    }

    #[test]
    fn test_answer_by_letter_then_next() {
        let mut state = quiz_state();
        let mut screen = QuizScreen::new();
        assert_eq!(state.stage(), FlowStage::ModuleQuiz);

        screen.handle_key(key('a'), &mut state);
        assert_eq!(state.notice, Some(Notice::Info("Correct!".into())));

        // A second answer is refused
        screen.handle_key(key('b'), &mut state);
        assert_eq!(state.flow.quiz_view().unwrap().score, 1);

        screen.handle_key(key('n'), &mut state);
        assert_eq!(state.flow.quiz_view().unwrap().index, 1);
    }

    #[test]
    fn test_cursor_and_confirm_finish_quiz() {
        let mut state = quiz_state();
        let mut screen = QuizScreen::new();

        screen.handle_key(AppKeyEvent::plain(KeyCode::Down), &mut state);
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        assert_eq!(state.flow.quiz_view().unwrap().selected, Some(1));
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);

        screen.handle_key(key('3'), &mut state);
        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        assert_eq!(state.stage(), FlowStage::ModuleDone);
        assert_eq!(state.flow.completion().unwrap().summary.score, 1);
    }

    #[test]
    fn test_builtin_quiz_has_four_options() {
        let flow = LessonFlow::new(Course::builtin()).unwrap();
        for module in &flow.course().modules {
            for question in flow.course().questions(&module.id).unwrap() {
                assert_eq!(question.options.len(), OPTION_LETTERS.len());
            }
        }
    }
}
