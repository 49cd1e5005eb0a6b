//! Timer scheduling behind a small trait, so timer-driven components can run
//! on the browser event loop or on a simulated clock in tests.

use std::time::Duration;

pub type Task = Box<dyn FnMut()>;
pub type OnceTask = Box<dyn FnOnce()>;

pub trait Clock: Clone + 'static {
    type Handle;

    /// Runs `task` every `period` until cancelled. `None` if the timer couldn't be armed.
    fn every(&self, period: Duration, task: Task) -> Option<Self::Handle>;

    /// Runs `task` once after `delay`. `None` if the timer couldn't be armed.
    fn once(&self, delay: Duration, task: OnceTask) -> Option<Self::Handle>;

    /// Cancelling a timer that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// One armed timer. Cancelled on `cancel()` or when dropped.
pub struct Scheduled<C: Clock> {
    clock: C,
    handle: Option<C::Handle>,
}

impl<C: Clock> Scheduled<C> {
    pub fn every(clock: &C, period: Duration, task: Task) -> Self {
        Self {
            clock: clock.clone(),
            handle: clock.every(period, task),
        }
    }

    pub fn once(clock: &C, delay: Duration, task: OnceTask) -> Self {
        Self {
            clock: clock.clone(),
            handle: clock.once(delay, task),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.clock.cancel(handle);
        }
    }
}

impl<C: Clock> Drop for Scheduled<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::manual::ManualClock;
    use super::*;

    #[test]
    fn test_repeating_timer_fires_each_period() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let _timer = Scheduled::every(
            &clock,
            Duration::from_millis(100),
            Box::new(move || c.set(c.get() + 1)),
        );

        clock.advance(Duration::from_millis(99));
        assert_eq!(count.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        clock.advance(Duration::from_millis(350));
        assert_eq!(count.get(), 4);
        assert_eq!(clock.now(), Duration::from_millis(450));
    }

    #[test]
    fn test_dropping_scheduled_cancels_it() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let timer = Scheduled::every(
            &clock,
            Duration::from_millis(10),
            Box::new(move || c.set(c.get() + 1)),
        );
        assert!(timer.is_armed());
        assert_eq!(clock.pending(), 1);

        drop(timer);
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(1));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut timer = Scheduled::once(
            &clock,
            Duration::from_millis(500),
            Box::new(move || c.set(c.get() + 1)),
        );
        clock.advance(Duration::from_secs(2));
        assert_eq!(count.get(), 1);

        // cancelling after the fact is harmless
        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let clock = ManualClock::new();
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let _slow = Scheduled::once(&clock, Duration::from_millis(30), Box::new(move || a.borrow_mut().push("slow")));
        let _fast = Scheduled::once(&clock, Duration::from_millis(10), Box::new(move || b.borrow_mut().push("fast")));

        clock.advance(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["fast", "slow"]);
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let clock = ManualClock::new();
        let timer = Scheduled::every(&clock, Duration::ZERO, Box::new(|| {}));
        assert!(!timer.is_armed());
    }
}
