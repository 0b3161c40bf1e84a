use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    tracing::info!(locale = ?config.locale, tick_ms = config.tick_rate_ms, "Form opened");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "Terminal resized"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Form closed");
    Ok(())
}
