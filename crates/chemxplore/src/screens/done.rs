use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;
use crate::actions;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Quiz result for the module just finished
pub struct DoneScreen;

impl DoneScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DoneScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DoneScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if KeybindingsConfig::matches(&key, &state.keybindings.navigation.confirm) {
            actions::go_home(state).apply(state);
            return EventResult::Handled;
        }
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(report) = state.flow.completion() else {
            return;
        };
        let summary = report.summary;
        let verdict_color = if summary.passed() {
            Color::Green
        } else {
            Color::Yellow
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Module Complete!",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("You scored "),
                Span::styled(
                    format!("{} / {}", summary.score, summary.total),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                summary.verdict(),
                Style::default().fg(verdict_color),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("+{} XP", report.xp_gained),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  (total {})", report.total_xp.points())),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return to the learning path.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" COMPLETE "));
        frame.render_widget(paragraph, area);
    }
}

impl Screen for DoneScreen {
    fn title(&self) -> &str {
        "Done"
    }
}
