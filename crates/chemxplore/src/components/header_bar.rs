use chemxplore_core::FlowStage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Lesson steps shown as a breadcrumb, in flow order
const STEPS: [(FlowStage, &str); 4] = [
    (FlowStage::ModuleIntro, "Intro"),
    (FlowStage::ModuleSimulation, "Lab"),
    (FlowStage::ModuleQuiz, "Quiz"),
    (FlowStage::ModuleDone, "Done"),
];

/// App title, lesson breadcrumb and XP badge
pub struct HeaderBar;

impl HeaderBar {
    fn title(state: &AppState) -> String {
        match state.flow.active_module_config() {
            Some(module) => format!("ChemXplore › {}", module.title),
            None => "ChemXplore".to_string(),
        }
    }
}

impl Component for HeaderBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),    // Title
                Constraint::Length(34), // Breadcrumb
                Constraint::Length(14), // XP
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            Self::title(state),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let stage = state.stage();
        let titles: Vec<Line> = STEPS
            .iter()
            .map(|(_, name)| Line::from(Span::styled(*name, Style::default().fg(Color::Gray))))
            .collect();
        // Nothing is highlighted on the home view
        let (selected, highlight) = match STEPS.iter().position(|(s, _)| *s == stage) {
            Some(index) => (
                index,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (0, Style::default().fg(Color::Gray)),
        };
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(selected)
            .highlight_style(highlight);
        frame.render_widget(tabs, chunks[1]);

        let xp = Paragraph::new(Line::from(vec![
            Span::styled("XP ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.flow.experience().points().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(xp, chunks[2]);
    }
}
