use crate::api::RestClient;
use crate::config::ConfigStore;
use crate::store::{Action, Dispatch, Store};
use crate::tables::Operations;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::Arc;

pub fn run(config: ConfigStore) -> anyhow::Result<()> {
    let settings = config.get();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = RestClient::new(&settings.api).context("failed to build HTTP client")?;
    let operations = Operations::new(Arc::new(client));

    let store = Store::new();
    if let Some(channel) = settings.ui.channel.clone() {
        store.dispatch(Action::SelectChannel { channel });
    }

    let tick_rate = settings.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let notify = events.sender();
    store.subscribe(move |action_type| {
        let _ = notify.send(AppEvent::StateChanged(action_type));
    });

    tracing::info!(
        "explorer-tui started against {} (config: {})",
        settings.api.base_url,
        config.path().display()
    );
    let mut app = App::new(config, store, operations, runtime.handle().clone());
    app.refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StateChanged(action_type)) => app.on_state_changed(action_type),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("explorer-tui stopped");
    Ok(())
}
