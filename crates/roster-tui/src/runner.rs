//! Main TUI runner - entry point and event loop

use roster_app::{Engine, Navigator};
use roster_backend::CustomerSource;
use roster_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user or a signal quits.
///
/// The engine should not be started yet; mounting happens here so the first
/// frame already shows the loading state.
pub async fn run<S, N>(mut engine: Engine<S, N>) -> Result<()>
where
    S: CustomerSource + Sync + 'static,
    N: Navigator,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

fn run_loop<S, N>(term: &mut ratatui::DefaultTerminal, engine: &mut Engine<S, N>) -> Result<()>
where
    S: CustomerSource + Sync + 'static,
    N: Navigator,
{
    while !engine.should_quit() {
        // Fetch settlements, navigator messages, signals
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving TUI");
    Ok(())
}
