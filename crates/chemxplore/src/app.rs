use std::time::Duration;

use chemxplore_core::FlowStage;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions;
use crate::components::{Component, EventResult, header_bar::HeaderBar, status_bar::StatusBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::screens::{
    done::DoneScreen, home::HomeScreen, intro::IntroScreen, lab::LabScreen, quiz::QuizScreen,
};
use crate::state::AppState;

/// Lab clock resolution for the native event loop
#[cfg(feature = "native")]
const TICK_RATE: Duration = Duration::from_millis(50);

pub struct App {
    state: AppState,
    header_bar: HeaderBar,
    status_bar: StatusBar,
    home_screen: HomeScreen,
    intro_screen: IntroScreen,
    lab_screen: LabScreen,
    quiz_screen: QuizScreen,
    done_screen: DoneScreen,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            header_bar: HeaderBar,
            status_bar: StatusBar,
            home_screen: HomeScreen::new(),
            intro_screen: IntroScreen::new(),
            lab_screen: LabScreen::new(),
            quiz_screen: QuizScreen::new(),
            done_screen: DoneScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        // Header, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.header_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.stage() {
            FlowStage::Home => self.home_screen.render(frame, area, &self.state),
            FlowStage::ModuleIntro => self.intro_screen.render(frame, area, &self.state),
            FlowStage::ModuleSimulation => self.lab_screen.render(frame, area, &self.state),
            FlowStage::ModuleQuiz => self.quiz_screen.render(frame, area, &self.state),
            FlowStage::ModuleDone => self.done_screen.render(frame, area, &self.state),
        }
    }

    pub fn handle_key(&mut self, key: AppKeyEvent) {
        let global = &self.state.keybindings.global;
        if KeybindingsConfig::matches(&key, &global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(&key, &global.back) {
            if self.state.stage() == FlowStage::Home {
                self.state.clear_notice();
            } else {
                actions::go_home(&mut self.state).apply(&mut self.state);
            }
            return;
        }

        let result = match self.state.stage() {
            FlowStage::Home => self.home_screen.handle_key(key, &mut self.state),
            FlowStage::ModuleIntro => self.intro_screen.handle_key(key, &mut self.state),
            FlowStage::ModuleSimulation => self.lab_screen.handle_key(key, &mut self.state),
            FlowStage::ModuleQuiz => self.quiz_screen.handle_key(key, &mut self.state),
            FlowStage::ModuleDone => self.done_screen.handle_key(key, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    /// Advance lab timers by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(result) = actions::tick(&mut self.state, elapsed) {
            result.apply(&mut self.state);
        }
    }
}

#[cfg(feature = "native")]
impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        use crossterm::event::{self, Event, KeyEventKind};
        use std::time::Instant;

        let mut last_tick = Instant::now();
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key(key_event.into())
                    }
                    _ => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= TICK_RATE {
                self.tick(elapsed);
                last_tick = Instant::now();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::Notice;
    use chemxplore_core::{Course, LessonFlow, ModuleId, ModuleStatus};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(AppState::new(
            LessonFlow::new(Course::builtin()).unwrap(),
            KeybindingsConfig::default(),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(AppKeyEvent::plain(code));
    }

    fn type_char(app: &mut App, c: char) {
        press(app, KeyCode::Char(c));
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_full_module_by_keyboard() {
        let mut app = app();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().stage(), FlowStage::ModuleIntro);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().stage(), FlowStage::ModuleSimulation);

        for _ in 0..3 {
            type_char(&mut app, 'a');
        }
        type_char(&mut app, 'c');
        assert_eq!(app.state().flow.experience().points(), 1300);
        type_char(&mut app, 't');
        assert_eq!(app.state().stage(), FlowStage::ModuleQuiz);

        while app.state().stage() == FlowStage::ModuleQuiz {
            let correct = app
                .state()
                .flow
                .quiz()
                .and_then(|quiz| quiz.current())
                .map(|question| question.correct_index)
                .unwrap();
            let digit = char::from_digit(correct as u32 + 1, 10).unwrap();
            type_char(&mut app, digit);
            type_char(&mut app, 'n');
        }

        assert_eq!(app.state().stage(), FlowStage::ModuleDone);
        let report = app.state().flow.completion().unwrap();
        assert_eq!(report.summary.score, 10);
        assert_eq!(report.total_xp.points(), 1400);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().stage(), FlowStage::Home);
        let module = app
            .state()
            .flow
            .progress()
            .module(&ModuleId::new("acids-bases"))
            .unwrap();
        assert_eq!(module.status, ModuleStatus::Completed);
        assert_eq!(module.progress, 100);
    }

    #[test]
    fn test_back_from_lab_drops_pending_reveal() {
        let mut app = app();
        app.state_mut().move_module_cursor(2);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter); // salt
        type_char(&mut app, 'm');
        assert_eq!(app.state().flow.pending_effects(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().stage(), FlowStage::Home);
        assert_eq!(app.state().flow.pending_effects(), 0);

        let before = app.state().flow.experience();
        app.tick(Duration::from_secs(5));
        assert_eq!(app.state().flow.experience(), before);
    }

    #[test]
    fn test_tick_reveals_result() {
        let mut app = app();
        app.state_mut().move_module_cursor(2);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_char(&mut app, 'm');

        app.tick(Duration::from_millis(1499));
        assert_eq!(app.state().notice, Some(Notice::Info("Analyzing...".into())));
        app.tick(Duration::from_millis(1));
        assert_eq!(app.state().notice, Some(Notice::Info("+20 XP".into())));
    }

    #[test]
    fn test_quit_sets_exit() {
        let mut app = app();
        type_char(&mut app, 'q');
        assert!(app.state().exit);
    }

    #[test]
    fn test_back_on_home_is_quiet() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().stage(), FlowStage::Home);
        assert_eq!(app.state().notice, None);
    }

    #[test]
    fn test_every_stage_renders() {
        let mut app = app();
        assert!(render(&mut app).contains("LEARNING PATH"));

        press(&mut app, KeyCode::Enter);
        assert!(render(&mut app).contains("ACIDS & BASES"));

        press(&mut app, KeyCode::Enter);
        assert!(render(&mut app).contains("SOIL pH"));

        for _ in 0..3 {
            type_char(&mut app, 'a');
        }
        type_char(&mut app, 'c');
        type_char(&mut app, 't');
        assert!(render(&mut app).contains("QUESTION 1 OF 10"));
    }
}
