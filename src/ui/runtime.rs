use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive browser until the user quits.
///
/// Must be called from a plain thread; fetches are spawned onto `runtime`.
pub fn run(config: &Config, client: CatalogClient, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(client, runtime, config.catalog.page_size);
    app.attach_notifier(events.sender());
    app.activate();
    tracing::info!(page_size = config.catalog.page_size, "Browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick | AppEvent::Resize | AppEvent::SyncChanged) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    tracing::info!("Browser closed");
    Ok(())
}
