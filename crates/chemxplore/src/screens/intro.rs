use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
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

/// Concept summary shown before the lab
pub struct IntroScreen;

impl IntroScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IntroScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for IntroScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if KeybindingsConfig::matches(&key, &state.keybindings.navigation.confirm) {
            actions::begin_lab(state).apply(state);
            return EventResult::Handled;
        }
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(module) = state.flow.active_module_config() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(area);

        let mut lines = Vec::new();
        if !module.description.is_empty() {
            lines.push(Line::from(Span::styled(
                module.description.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }
        for concept in &module.intro {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::raw(concept.as_str()),
            ]));
        }

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", module.title.to_uppercase())),
            );
        frame.render_widget(body, chunks[0]);

        let start = Paragraph::new(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("Start {}", module.lab.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(start, chunks[1]);
    }
}

impl Screen for IntroScreen {
    fn title(&self) -> &str {
        "Intro"
    }
}
