//! Timed continuations for a single-threaded UI.
//!
//! A [`Scheduler`] holds payloads that should be handed back to their owner
//! once the clock passes a due time. Nothing runs on its own: the owner calls
//! [`Scheduler::drain_due`] from its frame tick and dispatches what comes out.
//! Tasks are cancellable by id, and [`Scheduler::clear`] drops everything when
//! the owner is torn down.

/// Identifier of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    due_ms: u64,
    payload: T,
}

/// Queue of payloads keyed by due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to become due `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due_ms = now_ms.saturating_add(delay_ms);
        log::trace!("scheduled task {id:?} due at {due_ms}ms");
        self.tasks.push(Scheduled {
            id,
            due_ms,
            payload,
        });
        id
    }

    /// Cancel a task. Returns false if it already ran or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Whether a task is still waiting.
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Remove and return every payload due at `now_ms`, earliest first.
    /// Tasks with equal due times come out in scheduling order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|t| t.due_ms <= now_ms);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due_ms, t.id));
        due.into_iter().map(|t| t.payload).collect()
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_ms).min()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        if !self.tasks.is_empty() {
            log::debug!("dropping {} pending task(s)", self.tasks.len());
        }
        self.tasks.clear();
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
