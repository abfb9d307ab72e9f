use crate::config::{Config, DemoConfig};
use crate::ui::components::{PromiseView, StatusBar, Views};
use crate::ui::core::{Action, Component, Status, TaskManager};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;

pub type RequestView = PromiseView<String, String, Paragraph<'static>>;

/// A request that settles after `delay` to `settles_to`, carrying `payload` either way.
pub fn simulated_request(
    delay: Duration,
    settles_to: Status,
    payload: String,
) -> impl Future<Output = Result<String, String>> + Send + 'static {
    async move {
        tokio::time::sleep(delay).await;
        match settles_to {
            Status::Rejected => Err(payload),
            _ => Ok(payload),
        }
    }
}

/// The three views of the demo request
pub fn request_views(pending_text: String) -> Views<String, String, Paragraph<'static>> {
    Views::new(
        move || {
            Paragraph::new(pending_text.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
        },
        |body: &String| Paragraph::new(body.clone()).wrap(Wrap { trim: false }),
        |reason: &String| {
            Paragraph::new(format!("Request failed: {reason}"))
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: false })
        },
    )
}

/// Demo host: one [`PromiseView`] over a simulated request, restartable and detachable.
pub struct AppComponent {
    config: Config,
    settles_to: Status,
    view: RequestView,
    attempt: u32,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    /// Create the app and mount the first request. Must run inside a tokio runtime.
    pub fn new(config: Config) -> Result<Self> {
        let settles_to = config.demo.settles_to()?;
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut app = Self {
            view: Self::build_view(&config.demo, settles_to, 1),
            config,
            settles_to,
            attempt: 1,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.view.mount(&mut app.task_manager);

        Ok(app)
    }

    fn build_view(demo: &DemoConfig, settles_to: Status, attempt: u32) -> RequestView {
        let request = simulated_request(Duration::from_millis(demo.delay_ms), settles_to, demo.payload.clone());

        PromiseView::new(Some(request), request_views(demo.pending_text.clone()))
            .with_description(format!("request #{attempt}"))
    }

    /// Replace the current view with a fresh request.
    /// The old view is dropped, which detaches it.
    fn restart(&mut self) {
        self.attempt += 1;
        log::info!("Restarting request, attempt {}", self.attempt);

        self.view = Self::build_view(&self.config.demo, self.settles_to, self.attempt);
        self.view.mount(&mut self.task_manager);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn view(&self) -> &RequestView {
        &self.view
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished watchers", finished.len());
        }

        actions
    }

    /// Wait for the next background action. Used by tests and headless hosts.
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Apply an app-level action; returns whether a redraw is needed
    pub fn handle_app_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Restart => {
                self.restart();
                true
            }
            Action::Detach => {
                log::info!("Unmounting request #{}", self.attempt);
                self.view.unmount();
                true
            }
            Action::Render => true,
            Action::Settled { .. } | Action::None => false,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('r') => Action::Restart,
            KeyCode::Char('u') => Action::Detach,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.view.update(action)
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.config.ui.title));
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        self.view.render(f, inner);
        StatusBar::render(
            f,
            chunks[1],
            self.view.status(),
            self.view.is_detached(),
            self.attempt,
        );
    }
}
