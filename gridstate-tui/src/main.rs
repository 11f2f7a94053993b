use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use gridstate_lib::settings::{MemoryBackend, SettingsProvider};
use gridstate_lib::store::InMemoryStore;
use gridstate_lib::{GridConfig, GridEngine};
use gridstate_tui::app::App;
use gridstate_tui::render::{body_height, render};
use gridstate_tui::settings::SqliteBackend;
use gridstate_tui::terminal::Terminal;
use gridstate_tui::{deals, paths};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    paths::rotate_logs();
    let log_path = paths::log_file().unwrap_or_else(|| PathBuf::from("gridstate-tui.log"));
    if let Some(dir) = log_path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let log_file = File::create(&log_path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let engine = GridEngine::new(
        deals::registry(),
        InMemoryStore::with_records(deals::sample_deals()),
        open_settings(),
        GridConfig::default(),
    );
    let mut app = App::new(engine);

    if let Err(e) = run(&mut app) {
        eprintln!("Error: {}", e);
    }
}

/// Settings stored in the data directory, or kept in memory if it is unusable.
fn open_settings() -> SettingsProvider {
    let Some(path) = paths::settings_db() else {
        log::warn!("no home directory; grid state will not be saved");
        return SettingsProvider::new(MemoryBackend::new());
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match SqliteBackend::open(&path) {
        Ok(backend) => {
            log::info!("settings database at {}", path.display());
            SettingsProvider::new(backend)
        }
        Err(e) => {
            log::warn!("failed to open {}: {e}; grid state will not be saved", path.display());
            SettingsProvider::new(MemoryBackend::new())
        }
    }
}

fn run(app: &mut App<InMemoryStore>) -> io::Result<()> {
    let mut terminal = Terminal::new()?;
    while !app.should_quit() {
        let (width, height) = terminal.size()?;
        app.scroll_to_focus(body_height(height));
        terminal.draw(&render(app, width, height))?;

        for event in terminal.poll(None)? {
            app.handle_event(event);
        }
    }
    Ok(())
}
