use super::actions::Action;
use super::task_manager::TaskManager;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Called once when the component is attached to the running app.
    /// Components that observe async work hand it to `tasks` here.
    fn mount(&mut self, _tasks: &mut TaskManager) {}

    /// Called when the component is detached; pending notifications must be dropped afterwards.
    fn unmount(&mut self) {}

    fn handle_events(&mut self, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Resize(_, _)) => Action::Render,
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
