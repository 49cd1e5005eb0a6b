use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::schedule::{Clock, Scheduled};

/// Index into a fixed list of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn tick(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }
}

struct Inner<C: Clock> {
    rotation: Rotation,
    timer: Option<Scheduled<C>>,
    listener: Option<Rc<dyn Fn(usize)>>,
}

/// Advances a [`Rotation`] on a repeating timer.
pub struct Rotator<C: Clock> {
    clock: C,
    interval: Duration,
    shared: Rc<RefCell<Inner<C>>>,
}

impl<C: Clock> Rotator<C> {
    pub fn new(len: usize, interval: Duration, clock: C) -> Self {
        Self {
            clock,
            interval,
            shared: Rc::new(RefCell::new(Inner {
                rotation: Rotation::new(len),
                timer: None,
                listener: None,
            })),
        }
    }

    pub fn set_listener(&self, listener: impl Fn(usize) + 'static) {
        self.shared.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn current(&self) -> Option<usize> {
        self.shared.borrow().rotation.current()
    }

    pub fn is_running(&self) -> bool {
        self.shared
            .borrow()
            .timer
            .as_ref()
            .is_some_and(Scheduled::is_armed)
    }

    /// With `reduced_motion` the first label stays put and no timer is armed.
    pub fn start(&self, reduced_motion: bool) {
        let mut inner = self.shared.borrow_mut();
        if reduced_motion || inner.rotation.len < 2 || inner.timer.is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.shared);
        let timer = Scheduled::every(
            &self.clock,
            self.interval,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let update = {
                    let mut inner = shared.borrow_mut();
                    let index = inner.rotation.tick();
                    index.zip(inner.listener.clone())
                };
                if let Some((index, listener)) = update {
                    listener(index);
                }
            }),
        );
        inner.timer = Some(timer);
    }

    pub fn stop(&self) {
        let mut inner = self.shared.borrow_mut();
        inner.timer = None;
        inner.listener = None;
    }
}
