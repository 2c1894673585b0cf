//! The frame loop.

use ratatui::backend::Backend;
use ratatui::Terminal;

use super::App;
use crate::traits::{InfoProvider, InputSource};
use crate::ui;

/// Run frames until the exit input arrives.
///
/// Each frame repaints both surfaces in full, presents them, then waits on
/// `input` for the next snapshot. `input.capture` paces the loop. Fact
/// lookups cannot fail a frame; only terminal I/O ends the loop early.
pub async fn run_app<B, P, I>(
    terminal: &mut Terminal<B>,
    app: &mut App<P>,
    input: &mut I,
) -> color_eyre::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    P: InfoProvider,
    I: InputSource,
{
    tracing::info!(
        panels = app.controller().panel_count(),
        reveal = app.controller().reveal_sensitive(),
        "Main loop started"
    );

    while app.is_running() {
        terminal.draw(|frame| ui::render(frame, &*app))?;
        app.frame_presented();

        let snapshot = input.capture().await;
        app.handle_input(&snapshot);
    }

    tracing::info!(frames = app.frames(), "Main loop terminated");
    Ok(())
}
