pub mod app;
pub mod config;
pub mod countdown;
pub mod definitions;
pub mod event;
pub mod i18n;
pub mod particles;
pub mod prefs;
pub mod rsvp;
pub mod sched;
pub mod story;
pub mod theme;
pub mod tui;
pub mod ui;

use std::env;
use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use event::Event;
use futures_util::StreamExt;
use tui::{init, restore};
use ui::render;

/// Logs go to the file named by `$KALYANAM_LOG`; stderr would scribble
/// over the alternate screen. Without the variable, logging is off.
fn init_logging() -> Result<()> {
    if let Ok(path) = env::var("KALYANAM_LOG") {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {path}"))?;
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let mut tui = init()?;
    let mut app = App::new()?;

    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(50));

    while !app.should_quit {
        tui.draw(|frame| render(&mut app, frame))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::FocusGained)) => Event::FocusGained,
                    Some(Ok(CrosstermEvent::FocusLost)) => Event::FocusLost,
                    // Resize is picked up by the next draw.
                    Some(Ok(_)) => continue,
                    // If the event stream ends or errors, leave the loop.
                    Some(Err(_)) | None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(Instant::now()),
            other => app.handle_event(other),
        }
    }

    restore()?;
    Ok(())
}
