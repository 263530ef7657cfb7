use chemxplore_core::{FlowStage, LabView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, Notice};

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &AppState) -> &'static str {
        match state.stage() {
            FlowStage::Home => "j/k: select module | Enter: open | q: quit",
            FlowStage::ModuleIntro => "Enter: start lab | Esc: home | q: quit",
            FlowStage::ModuleSimulation => match state.flow.lab_view() {
                Some(LabView::Titration(_)) => {
                    "a: add acid | b: add base | c: check growth | t: take quiz | Esc: home"
                }
                Some(LabView::Reaction(_)) => {
                    "1-3: pick atom | h/l: choose slot | Enter: place | t: take quiz | Esc: home"
                }
                Some(LabView::Conductivity(_)) => {
                    "h/l: choose solute | Enter: add | m: mix | r: reset | t: take quiz | Esc: home"
                }
                None => "Esc: home",
            },
            FlowStage::ModuleQuiz => "a-d/1-4: answer | j/k + Enter: select | n: next | Esc: home",
            FlowStage::ModuleDone => "Enter: return to path | q: quit",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = match &state.notice {
            Some(Notice::Error(error)) => Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ]),
            Some(Notice::Info(info)) => {
                Line::from(Span::styled(info.as_str(), Style::default().fg(Color::Green)))
            }
            None => Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            )),
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
