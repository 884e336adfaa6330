use std::{cell::Cell, ops::ControlFlow, rc::Rc, time::Duration};

use leptos::prelude::{set_interval_with_handle, IntervalHandle};

use crate::config::Settings;

/// Runs on every period until it breaks or its timer is cancelled.
pub type Task = Box<dyn Fn() -> ControlFlow<()>>;

pub trait TimerHandle {
    /// Stops the timer. Cancelling twice is a no-op.
    fn cancel(&self);
}

pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    fn every(&self, period: Duration, task: Task) -> Self::Handle;
}

/// Which periodic process a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Typewriter,
    Cursor,
}

/// Owns every timer of a session; dropping it cancels them all.
#[derive(Default)]
pub struct AnimationTimers {
    handles: Vec<Box<dyn TimerHandle>>,
}

impl AnimationTimers {
    /// Starts the typewriter and cursor timers, both feeding `drive`.
    pub fn start<S, F>(scheduler: &S, settings: &Settings, drive: F) -> Self
    where
        S: Scheduler,
        F: Fn(Tick) -> ControlFlow<()> + Clone + 'static,
    {
        let mut timers = Self::default();
        let typewriter = drive.clone();
        timers.push(scheduler.every(
            settings.typewriter_period(),
            Box::new(move || typewriter(Tick::Typewriter)),
        ));
        timers.push(scheduler.every(
            settings.cursor_period(),
            Box::new(move || drive(Tick::Cursor)),
        ));
        log::debug!("started {} animation timers", timers.len());
        timers
    }

    pub fn push(&mut self, handle: impl TimerHandle + 'static) {
        self.handles.push(Box::new(handle));
    }

    pub fn cancel_all(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        log::debug!("cancelling {} animation timers", self.handles.len());
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for AnimationTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Browser scheduler backed by `setInterval`.
pub struct IntervalScheduler;

#[derive(Clone, Default)]
pub struct IntervalTimer(Rc<Cell<Option<IntervalHandle>>>);

impl TimerHandle for IntervalTimer {
    fn cancel(&self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalTimer;

    fn every(&self, period: Duration, task: Task) -> IntervalTimer {
        let timer = IntervalTimer::default();
        let inner = timer.clone();
        let res = set_interval_with_handle(
            move || {
                if task().is_break() {
                    inner.cancel();
                }
            },
            period,
        );
        match res {
            Ok(handle) => timer.0.set(Some(handle)),
            Err(e) => log::error!("couldn't start interval: {e:?}"),
        }
        timer
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;

    use super::*;

    struct Entry {
        period: Duration,
        task: Task,
        stopped: Rc<Cell<bool>>,
    }

    /// Deterministic scheduler driven by `advance`, with millisecond resolution.
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        entries: RefCell<Vec<Entry>>,
        now: Cell<Duration>,
    }

    #[derive(Clone)]
    pub(crate) struct ManualTimer(Rc<Cell<bool>>);

    impl ManualTimer {
        pub(crate) fn is_stopped(&self) -> bool {
            self.0.get()
        }
    }

    impl TimerHandle for ManualTimer {
        fn cancel(&self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualTimer;

        fn every(&self, period: Duration, task: Task) -> ManualTimer {
            let stopped = Rc::new(Cell::new(false));
            self.entries.borrow_mut().push(Entry {
                period,
                task,
                stopped: stopped.clone(),
            });
            ManualTimer(stopped)
        }
    }

    impl ManualScheduler {
        pub(crate) fn advance(&self, by: Duration) {
            let step = Duration::from_millis(1);
            let end = self.now.get() + by;
            while self.now.get() < end {
                let now = self.now.get() + step;
                self.now.set(now);
                for entry in self.entries.borrow().iter() {
                    if entry.stopped.get() || now.as_millis() % entry.period.as_millis() != 0 {
                        continue;
                    }
                    if (entry.task)().is_break() {
                        entry.stopped.set(true);
                    }
                }
            }
        }

        pub(crate) fn running(&self) -> usize {
            self.entries
                .borrow()
                .iter()
                .filter(|e| !e.stopped.get())
                .count()
        }

        pub(crate) fn handles(&self) -> Vec<ManualTimer> {
            self.entries
                .borrow()
                .iter()
                .map(|e| ManualTimer(e.stopped.clone()))
                .collect()
        }
    }
}
