//! Task tracking: observe a server-side job until it settles.

use crate::catalog;
use crate::client::Session;
use crate::error::{VcdError, VcdResult};
use crate::types::Task;

use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Polls task handles. Never mutates a task except through [`Self::cancel`].
#[derive(Clone)]
pub struct TaskTracker {
    session: Session,
}

impl TaskTracker {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch the current snapshot of `task`.
    pub async fn poll(&self, task: &Task) -> VcdResult<Task> {
        let current = self.session.task(&catalog::GET_TASK, &task.href).await?;
        log::trace!(
            "task {} is {} ({}%)",
            current.href,
            current.status.as_str(),
            current.progress.unwrap_or(0)
        );
        Ok(current)
    }

    /// Poll every `poll_interval` until the task reaches a terminal status.
    ///
    /// A terminal snapshot is returned as-is without contacting the server.
    /// Terminal failure statuses are returned as `Ok`; inspect
    /// [`Task::is_success`]. Gives up with [`VcdError::Timeout`] once the next
    /// poll would start after `timeout`, so a timeout shorter than the
    /// interval means exactly one poll.
    pub async fn await_completion(
        &self,
        task: &Task,
        poll_interval: Duration,
        timeout: Duration,
    ) -> VcdResult<Task> {
        if task.is_terminal() {
            return Ok(task.clone());
        }

        let started = Instant::now();
        loop {
            let current = self.poll(task).await?;
            if current.is_terminal() {
                log::debug!(
                    "task {} finished with {} after {:?}",
                    current.href,
                    current.status.as_str(),
                    started.elapsed()
                );
                return Ok(current);
            }

            let waited = started.elapsed();
            if waited.saturating_add(poll_interval) > timeout {
                return Err(VcdError::Timeout {
                    task: Box::new(current),
                    waited,
                });
            }
            sleep(poll_interval).await;
        }
    }

    /// Ask the server to cancel `task`. Only ever called explicitly.
    pub async fn cancel(&self, task: &Task) -> VcdResult<()> {
        log::debug!("cancelling task {}", task.href);
        self.session.unit(&catalog::CANCEL_TASK, &task.href).await
    }
}
