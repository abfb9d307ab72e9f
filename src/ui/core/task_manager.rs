use super::actions::Action;
use super::guard::{AttachmentGuard, AttachmentId};
use super::status::{Outcome, Status};
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// What a watcher task did with the outcome of the value it awaited.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    Forwarded { attachment: AttachmentId, status: Status },
    Dropped { attachment: AttachmentId, status: Status },
}

/// Owns the tokio tasks that await async values on behalf of mounted components.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    next_attachment_id: AttachmentId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                next_attachment_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Hand out a fresh attachment id for a new guard
    pub fn next_attachment_id(&mut self) -> AttachmentId {
        let id = self.next_attachment_id;
        self.next_attachment_id += 1;
        id
    }

    /// Await `future` in the background and forward its outcome through `guard`.
    ///
    /// Detaching the guard never aborts the task: the underlying computation
    /// runs to completion and its outcome is simply dropped.
    pub fn spawn_watch<F, T, E>(&mut self, future: F, guard: AttachmentGuard<T, E>, description: String) -> TaskId
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let attachment = guard.id();

        let handle = tokio::spawn(async move {
            let outcome = Outcome::from(future.await);
            let status = outcome.status();

            if guard.forward(outcome) {
                // Wake the host loop so it drains and re-renders
                let _ = action_sender.send(Action::Settled { attachment, status });
                TaskResult::Forwarded { attachment, status }
            } else {
                TaskResult::Dropped { attachment, status }
            }
        });

        log::debug!("Spawned watcher {} for attachment {}: {}", task_id, attachment, description);

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Watcher {} ({}) finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Wait for a watcher to finish and report what it did with the outcome
    pub async fn join(&mut self, task_id: TaskId) -> Option<TaskResult> {
        let task = self.tasks.remove(&task_id)?;
        task.handle.await.ok()
    }

    /// Wait for every watcher to finish, in spawn order
    pub async fn join_all(&mut self) -> Vec<TaskResult> {
        let mut ids: Vec<TaskId> = self.tasks.keys().copied().collect();
        ids.sort_unstable();

        let mut results = Vec::with_capacity(ids.len());
        for task_id in ids {
            if let Some(result) = self.join(task_id).await {
                results.push(result);
            }
        }
        results
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
