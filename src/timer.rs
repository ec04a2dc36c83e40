//! # Timer Service
//!
//! The abstract periodic-callback service the metronome and sequencer are
//! written against, plus [`EventLoop`], the crate's single-threaded
//! implementation of it.
//!
//! Two primitives exist, mirroring the two kinds of scheduling playback
//! needs: a repeating tick that can be cancelled through a [`StopHandle`],
//! and fire-and-forget one-shots (note-stop gates) that are never cancelled
//! and must stay harmless if they outlive the playback that scheduled them.
//!
//! Everything runs on one thread. Callbacks are delivered serially, never
//! overlapping, and may re-enter the timer to schedule further work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Abstract scheduling capability.
pub trait Timer {
    /// Deliver `tick` every `period`, starting one full period from now,
    /// until the returned handle is cancelled.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> StopHandle;

    /// Run `action` once after `delay`. One-shots cannot be cancelled.
    fn after(&self, delay: Duration, action: Box<dyn FnOnce()>);
}

/// Cancellation token for a repeating tick. Cancelling twice is a no-op.
pub struct StopHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl StopHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> StopHandle {
        StopHandle {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel all future ticks. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for StopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopHandle")
            .field("cancelled", &self.cancel.is_none())
            .finish()
    }
}

enum TaskKind {
    Repeating {
        period: Duration,
        tick: Box<dyn FnMut()>,
        cancelled: Rc<Cell<bool>>,
    },
    Once(Box<dyn FnOnce()>),
}

struct Task {
    due: Duration,
    seq: u64,
    kind: TaskKind,
}

struct Inner {
    now: Duration,
    next_seq: u64,
    tasks: Vec<Task>,
}

impl Inner {
    fn push(&mut self, due: Duration, kind: TaskKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(Task { due, seq, kind });
    }

    /// Index of the next live task due at or before `deadline`, earliest
    /// deadline first, FIFO among ties.
    fn next_due(&self, deadline: Duration) -> Option<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .filter(|(_, t)| match &t.kind {
                TaskKind::Repeating { cancelled, .. } => !cancelled.get(),
                TaskKind::Once(_) => true,
            })
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)
    }
}

/// Single-threaded task queue delivering timer callbacks in deadline order.
///
/// The clock is virtual: [`advance`](EventLoop::advance) moves it forward
/// deterministically (this is how the tests drive playback), while
/// [`run_for`](EventLoop::run_for) pins the virtual clock to wall time by
/// sleeping between deadlines (this is how the binary drives it).
pub struct EventLoop {
    inner: RefCell<Inner>,
}

impl EventLoop {
    pub fn new() -> EventLoop {
        EventLoop {
            inner: RefCell::new(Inner {
                now: Duration::ZERO,
                next_seq: 0,
                tasks: Vec::new(),
            }),
        }
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Drop repeating tasks whose handle has been cancelled, so their boxed
    /// closures (and whatever they capture) are released instead of sitting
    /// in the queue forever.
    fn purge_cancelled(&self) {
        self.inner.borrow_mut().tasks.retain(|t| {
            !matches!(&t.kind, TaskKind::Repeating { cancelled, .. } if cancelled.get())
        });
    }

    #[cfg(test)]
    fn task_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Move the clock forward by `dt`, firing every task that falls due, in
    /// order. Tasks scheduled by callbacks within the window also fire.
    pub fn advance(&self, dt: Duration) {
        self.purge_cancelled();
        let deadline = self.inner.borrow().now + dt;
        loop {
            let idx = {
                let inner = self.inner.borrow();
                inner.next_due(deadline)
            };
            let Some(idx) = idx else { break };

            // Pull the task out and release the borrow before invoking the
            // callback, which may re-enter to schedule or cancel.
            let task = {
                let mut inner = self.inner.borrow_mut();
                let task = inner.tasks.swap_remove(idx);
                if task.due > inner.now {
                    inner.now = task.due;
                }
                task
            };

            match task.kind {
                TaskKind::Once(action) => action(),
                TaskKind::Repeating {
                    period,
                    mut tick,
                    cancelled,
                } => {
                    tick();
                    // The tick itself may have cancelled the handle.
                    if !cancelled.get() {
                        self.inner.borrow_mut().push(
                            task.due + period,
                            TaskKind::Repeating {
                                period,
                                tick,
                                cancelled,
                            },
                        );
                    }
                }
            }
        }
        self.inner.borrow_mut().now = deadline;
        // Callbacks fired above may have cancelled other handles.
        self.purge_cancelled();
    }

    /// Drive the loop against wall time for `dt`, sleeping until each
    /// deadline before firing it.
    pub fn run_for(&self, dt: Duration) {
        self.purge_cancelled();
        let deadline = self.inner.borrow().now + dt;
        loop {
            let next = {
                let inner = self.inner.borrow();
                inner.next_due(deadline).map(|i| inner.tasks[i].due)
            };
            let Some(due) = next else { break };
            let now = self.inner.borrow().now;
            if due > now {
                std::thread::sleep(due - now);
            }
            self.advance(due.saturating_sub(now));
        }
        let now = self.inner.borrow().now;
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.inner.borrow_mut().now = deadline;
        }
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        EventLoop::new()
    }
}

impl Timer for EventLoop {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> StopHandle {
        debug_assert!(period > Duration::ZERO);
        let cancelled = Rc::new(Cell::new(false));
        let due = self.inner.borrow().now + period;
        self.inner.borrow_mut().push(
            due,
            TaskKind::Repeating {
                period,
                tick,
                cancelled: Rc::clone(&cancelled),
            },
        );
        StopHandle::new(move || cancelled.set(true))
    }

    fn after(&self, delay: Duration, action: Box<dyn FnOnce()>) {
        let due = self.inner.borrow().now + delay;
        self.inner.borrow_mut().push(due, TaskKind::Once(action));
    }
}
