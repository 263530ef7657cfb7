#[cfg(feature = "native")]
use chemxplore::data::course_data;
#[cfg(feature = "native")]
use chemxplore::data::keybindings_data::KeybindingsConfig;
#[cfg(feature = "native")]
use chemxplore::state::AppState;
#[cfg(feature = "native")]
use chemxplore::{App, init_logging};
#[cfg(feature = "native")]
use chemxplore_core::{Course, LessonFlow};
#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "chemxplore")]
#[command(about = "Interactive chemistry lessons with virtual labs and quizzes")]
struct Args {
    /// Path to the data directory (default: ~/.chemxplore/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Course definition to load instead of the built-in one (YAML)
    #[arg(short, long)]
    course: Option<PathBuf>,

    /// Write the built-in course as YAML to this path and exit
    #[arg(long, value_name = "FILE")]
    export_course: Option<PathBuf>,
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chemxplore")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    if let Some(path) = args.export_course {
        course_data::save_course(&path, &Course::builtin())?;
        tracing::info!(path = %path.display(), "Exported built-in course");
        println!("Wrote built-in course to {}", path.display());
        return Ok(());
    }

    let course = match &args.course {
        Some(path) => course_data::load_course(path)?,
        None => Course::builtin(),
    };
    let flow = LessonFlow::new(course)?;
    let keybindings = KeybindingsConfig::load_or_default(&data_dir);

    let mut app = App::new(AppState::new(flow, keybindings));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
