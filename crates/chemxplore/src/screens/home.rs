use chemxplore_core::{Module, ModuleStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::Screen;
use crate::actions;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Learning path: every module with its status and progress
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn status_style(status: ModuleStatus) -> Style {
        match status {
            ModuleStatus::Locked => Style::default().fg(Color::DarkGray),
            ModuleStatus::InProgress => Style::default().fg(Color::Cyan),
            ModuleStatus::Completed => Style::default().fg(Color::Green),
        }
    }

    fn render_module_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .modules()
            .iter()
            .enumerate()
            .map(|(idx, module)| {
                let marker = if idx == state.cursors.module { "> " } else { "  " };
                let title_style = if idx == state.cursors.module {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if module.is_locked() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, title_style),
                    Span::styled(module.title.as_str(), title_style),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", module.status.label()),
                        Self::status_style(module.status),
                    ),
                ]))
            })
            .collect();

        let completed = state.flow.progress().completed_count();
        let title = format!(" LEARNING PATH ({}/{}) ", completed, state.modules().len());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" MODULE ");
        let Some(module) = state.selected_module() else {
            frame.render_widget(Paragraph::new("No modules.").block(block), area);
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Self::detail_lines(module)).wrap(Wrap { trim: true }),
            chunks[0],
        );

        let gauge = Gauge::default()
            .gauge_style(Self::status_style(module.status))
            .percent(u16::from(module.progress.min(100)))
            .label(format!("{}%", module.progress));
        frame.render_widget(gauge, chunks[1]);
    }

    fn detail_lines(module: &Module) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(
                module.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if !module.description.is_empty() {
            lines.push(Line::from(module.description.as_str()));
            lines.push(Line::from(""));
        }
        let hint = match module.status {
            ModuleStatus::Locked => "Finish earlier modules to unlock.",
            ModuleStatus::InProgress => "Press Enter to continue.",
            ModuleStatus::Completed => "Press Enter to review.",
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomeScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        if KeybindingsConfig::matches(&key, &nav.up) {
            state.move_module_cursor(-1);
            state.clear_notice();
        } else if KeybindingsConfig::matches(&key, &nav.down) {
            state.move_module_cursor(1);
            state.clear_notice();
        } else if KeybindingsConfig::matches(&key, &nav.confirm) {
            actions::start_selected_module(state).apply(state);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        self.render_module_list(frame, chunks[0], state);
        self.render_details(frame, chunks[1], state);
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> &str {
        "Home"
    }
}
