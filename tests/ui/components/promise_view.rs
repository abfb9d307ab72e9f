use promise_view::ui::components::{PromiseView, ViewError, Views};
use promise_view::ui::core::{Action, Component, PromiseState, Status, TaskManager, TaskResult};
use ratatui::{backend::TestBackend, widgets::Paragraph, Terminal};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use tokio::sync::oneshot;

/// How many times each view has been invoked
#[derive(Default)]
struct Calls {
    pending: Cell<usize>,
    fulfilled: Cell<usize>,
    rejected: Cell<usize>,
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

fn counting_views(calls: &Rc<Calls>) -> Views<String, String, String> {
    let (p, f, r) = (Rc::clone(calls), Rc::clone(calls), Rc::clone(calls));
    Views::new(
        move || {
            bump(&p.pending);
            "pending".to_string()
        },
        move |value: &String| {
            bump(&f.fulfilled);
            format!("fulfilled:{value}")
        },
        move |reason: &String| {
            bump(&r.rejected);
            format!("rejected:{reason}")
        },
    )
}

/// A value settled from the outside, like a hand-resolved promise
fn deferred() -> (
    oneshot::Sender<Result<String, String>>,
    impl Future<Output = Result<String, String>> + Send + 'static,
) {
    let (tx, rx) = oneshot::channel();
    let value = async move { rx.await.unwrap_or_else(|_| Err("sender dropped".to_string())) };
    (tx, value)
}

type TestView = PromiseView<String, String, String>;

/// Drain the watcher and deliver its wake-up to the view, the way the host loop does
async fn settle_round(view: &mut TestView, tasks: &mut TaskManager) -> Action {
    tasks.join_all().await;
    match view.attachment_id() {
        Some(attachment) => view.handle_action(Action::Settled {
            attachment,
            status: Status::Fulfilled,
        }),
        None => Action::None,
    }
}

#[tokio::test]
async fn test_unsettled_value_renders_pending() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, _actions) = TaskManager::new();
    let (_resolve, value) = deferred();

    let mut view: TestView = PromiseView::new(Some(value), counting_views(&calls));
    view.attach(&mut tasks);

    for _ in 0..3 {
        tokio::task::yield_now().await;
        assert!(!view.poll_outcomes());
        assert_eq!(view.view(), "pending");
    }

    assert_eq!(view.status(), Status::Pending);
    assert_eq!(calls.pending.get(), 3);
    assert_eq!(calls.fulfilled.get(), 0);
    assert_eq!(calls.rejected.get(), 0);
    assert!(view.is_attached());
}

#[tokio::test]
async fn test_fulfilled_value_renders_fulfilled_and_stays() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, mut actions) = TaskManager::new();
    let (resolve, value) = deferred();

    let mut view: TestView = PromiseView::new(Some(value), counting_views(&calls));
    view.attach(&mut tasks);
    assert_eq!(view.view(), "pending");

    resolve.send(Ok("ok".to_string())).unwrap();
    let action = actions.recv().await.expect("watcher should wake the host");
    assert_eq!(
        action,
        Action::Settled {
            attachment: view.attachment_id().unwrap(),
            status: Status::Fulfilled
        }
    );

    assert_eq!(view.handle_action(action), Action::Render);
    assert_eq!(view.state(), &PromiseState::Fulfilled("ok".to_string()));
    assert_eq!(view.view(), "fulfilled:ok");

    // Nothing can move it back
    assert!(!view.poll_outcomes());
    assert_eq!(view.view(), "fulfilled:ok");
    assert_eq!(calls.pending.get(), 1);
    assert_eq!(calls.rejected.get(), 0);
}

#[tokio::test]
async fn test_rejected_value_renders_rejected() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, _actions) = TaskManager::new();
    let (resolve, value) = deferred();

    let mut view: TestView = PromiseView::new(Some(value), counting_views(&calls));
    view.attach(&mut tasks);

    resolve.send(Err("boom".to_string())).unwrap();
    assert_eq!(settle_round(&mut view, &mut tasks).await, Action::Render);

    assert_eq!(view.status(), Status::Rejected);
    assert_eq!(view.view(), "rejected:boom");
    assert_eq!(calls.fulfilled.get(), 0);
}

#[tokio::test]
async fn test_absent_value_stays_pending() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, _actions) = TaskManager::new();

    let mut view: TestView = PromiseView::idle(counting_views(&calls));
    view.attach(&mut tasks);

    assert_eq!(tasks.task_count(), 0, "nothing is observed without a value");
    assert_eq!(view.attachment_id(), None);
    assert!(!view.is_attached());

    let unrelated = Action::Settled {
        attachment: 1,
        status: Status::Fulfilled,
    };
    assert_eq!(view.handle_action(unrelated.clone()), unrelated);
    assert!(!view.poll_outcomes());
    assert_eq!(view.view(), "pending");
    assert_eq!(view.view(), "pending");
    assert_eq!(calls.pending.get(), 2);
}

#[tokio::test]
async fn test_unmount_before_settle_ignores_outcome() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, mut actions) = TaskManager::new();
    let (resolve, value) = deferred();

    let mut view: TestView = PromiseView::new(Some(value), counting_views(&calls));
    view.attach(&mut tasks);
    let attachment = view.attachment_id().unwrap();

    view.detach();
    view.detach();
    resolve.send(Ok("late".to_string())).unwrap();

    let results = tasks.join_all().await;
    assert_eq!(
        results,
        vec![TaskResult::Dropped {
            attachment,
            status: Status::Fulfilled
        }]
    );
    assert!(actions.try_recv().is_err());

    let stray = Action::Settled {
        attachment,
        status: Status::Fulfilled,
    };
    assert_eq!(view.handle_action(stray), Action::None);
    assert_eq!(view.state(), &PromiseState::Pending);
    assert!(!view.is_attached());
    assert_eq!(calls.fulfilled.get(), 0);
    assert_eq!(calls.pending.get(), 0);
}

#[tokio::test]
async fn test_dropping_view_detaches() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, _actions) = TaskManager::new();
    let (resolve, value) = deferred();

    let mut view: TestView = PromiseView::new(Some(value), counting_views(&calls));
    view.attach(&mut tasks);
    drop(view);

    resolve.send(Ok("late".to_string())).unwrap();
    let results = tasks.join_all().await;

    assert!(matches!(results.as_slice(), [TaskResult::Dropped { .. }]));
    assert_eq!(calls.fulfilled.get(), 0);
}

#[tokio::test]
async fn test_already_fulfilled_value() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, _actions) = TaskManager::new();

    let mut view: TestView =
        PromiseView::new(Some(std::future::ready(Ok("ok".to_string()))), counting_views(&calls));
    view.attach(&mut tasks);

    // Pending may be observed before the watcher gets to run
    assert_eq!(view.view(), "pending");

    assert_eq!(settle_round(&mut view, &mut tasks).await, Action::Render);
    assert_eq!(view.view(), "fulfilled:ok");

    assert_eq!(calls.fulfilled.get(), 1);
    assert_eq!(calls.rejected.get(), 0);
}

#[tokio::test]
async fn test_mount_twice_spawns_once() {
    let calls = Rc::new(Calls::default());
    let (mut tasks, _actions) = TaskManager::new();
    let (_resolve, value) = deferred();

    let mut view: TestView = PromiseView::new(Some(value), counting_views(&calls));
    view.attach(&mut tasks);
    let attachment = view.attachment_id();
    view.attach(&mut tasks);

    assert!(view.is_mounted());
    assert_eq!(tasks.task_count(), 1);
    assert_eq!(view.attachment_id(), attachment);
}

#[test]
fn test_builder_requires_every_view() {
    let missing = Views::<u8, u8, &'static str>::builder()
        .on_pending(|| "pending")
        .on_fulfilled(|_| "fulfilled")
        .build();
    assert_eq!(missing.err(), Some(ViewError::MissingView(Status::Rejected)));

    let views = Views::<u8, u8, &'static str>::builder()
        .on_rejected(|_| "rejected")
        .on_pending(|| "pending")
        .on_fulfilled(|_| "fulfilled")
        .build()
        .unwrap();
    assert_eq!(views.select(&PromiseState::Rejected(1)), "rejected");
    assert_eq!(views.select(&PromiseState::Pending), "pending");
}

#[test]
fn test_missing_view_message_names_status() {
    let err = ViewError::MissingView(Status::Pending);
    assert_eq!(err.to_string(), "No view registered for onPending");
}

#[tokio::test]
async fn test_renders_selected_widget() {
    let (mut tasks, _actions) = TaskManager::new();
    let views = Views::new(
        || Paragraph::new("Loading..."),
        |text: &String| Paragraph::new(text.clone()),
        |reason: &String| Paragraph::new(format!("Error: {reason}")),
    );

    let mut view = PromiseView::new(Some(std::future::ready(Ok::<_, String>("hello".to_string()))), views);
    view.mount(&mut tasks);

    let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
    let screen = |terminal: &Terminal<TestBackend>| -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    };

    terminal
        .draw(|f| {
            let area = f.area();
            view.render(f, area);
        })
        .unwrap();
    assert!(screen(&terminal).starts_with("Loading..."));

    tasks.join_all().await;
    assert!(view.poll_outcomes());

    terminal
        .draw(|f| {
            let area = f.area();
            view.render(f, area);
        })
        .unwrap();
    assert!(screen(&terminal).starts_with("hello"));
}
