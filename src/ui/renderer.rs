use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::time::Duration;

/// Set up the terminal, run the demo until the user quits, then restore the terminal
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let mut app = AppComponent::new(config.clone())?;
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));
    log::info!("Ticking every {:?}", event_handler.tick_rate());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;
    app.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                needs_render |= app.handle_app_action(action);
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    // Let the component hierarchy consume what it owns first
                    let processed = app.update(action);
                    needs_render |= app.handle_app_action(processed);
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
