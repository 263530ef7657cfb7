//! Web entry point for ChemXplore using ratzilla.
//!
//! Runs the same [`App`] as the native binary, rendered into the DOM. The
//! lab clock is driven from the draw callback using wall-clock deltas.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chemxplore_core::{Course, LessonFlow};
use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Browser-side wrapper: the shared app plus the last clock reading.
struct WebApp {
    app: App,
    last_tick_ms: f64,
}

impl WebApp {
    fn new() -> Result<Self, JsValue> {
        let flow = LessonFlow::new(Course::builtin())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = AppState::new(flow, KeybindingsConfig::default());
        Ok(Self {
            app: App::new(state),
            last_tick_ms: js_sys::Date::now(),
        })
    }

    fn handle_key(&mut self, key: AppKeyEvent) {
        self.app.handle_key(key);

        // There is no process to end in the browser
        if self.app.state().exit {
            tracing::info!("Exit requested, ignoring in web build");
            self.app.state_mut().exit = false;
        }
    }

    /// Feed the time since the previous frame to the lab clock
    fn tick(&mut self) {
        let now = js_sys::Date::now();
        let elapsed_ms = (now - self.last_tick_ms).max(0.0);
        self.last_tick_ms = now;
        self.app.tick(Duration::from_secs_f64(elapsed_ms / 1000.0));
    }
}

/// Set up a keydown listener to prevent default browser behavior for keys
/// the lessons use (scrolling on arrows and space, navigation on backspace).
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        let should_prevent = matches!(
            key.as_str(),
            "Tab" | "Backspace" | " " | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight"
        );

        if should_prevent {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Prevent the closure from being dropped
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging to browser console
    crate::init_logging_web();

    tracing::info!("ChemXplore web version starting");

    setup_prevent_default()?;

    let app = Rc::new(RefCell::new(WebApp::new()?));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        app_clone.borrow_mut().handle_key(key);
    });

    terminal.draw_web(move |frame| {
        let mut web_app = app.borrow_mut();
        web_app.tick();
        web_app.app.draw(frame);
    });

    Ok(())
}
