//! Browser-side implementations of the timer and script seams.

use std::{cell::RefCell, time::Duration};

use leptos::prelude::*;

use crate::{
    embed::{EmbedError, ScriptInjector},
    schedule::{Clock, OnceTask, Task},
};

/// Timers on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

impl Clock for BrowserClock {
    type Handle = BrowserTimer;

    fn every(&self, period: Duration, task: Task) -> Option<Self::Handle> {
        if period.is_zero() {
            log::warn!("refusing to arm a zero-period interval");
            return None;
        }
        let task = RefCell::new(task);
        set_interval_with_handle(move || (task.borrow_mut())(), period)
            .inspect_err(|err| log::warn!("couldn't arm interval: {err:?}"))
            .ok()
            .map(BrowserTimer::Interval)
    }

    fn once(&self, delay: Duration, task: OnceTask) -> Option<Self::Handle> {
        set_timeout_with_handle(task, delay)
            .inspect_err(|err| log::warn!("couldn't arm timeout: {err:?}"))
            .ok()
            .map(BrowserTimer::Timeout)
    }

    fn cancel(&self, handle: Self::Handle) {
        match handle {
            BrowserTimer::Interval(h) => h.clear(),
            BrowserTimer::Timeout(h) => h.clear(),
        }
    }
}

/// Appends a `<script async>` tag to `<head>` and reports load/error to the
/// global embed registry.
pub struct ScriptTagInjector;

#[cfg(feature = "hydrate")]
impl ScriptInjector for ScriptTagInjector {
    fn inject(&self, url: &str) -> Result<(), EmbedError> {
        use wasm_bindgen::{closure::Closure, JsCast};

        use crate::embed::EmbedRegistry;

        let doc = document();
        let head = doc
            .head()
            .ok_or_else(|| EmbedError::Inject("document has no <head>".to_string()))?;
        let script = doc
            .create_element("script")
            .map_err(|e| EmbedError::Inject(format!("{e:?}")))?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| EmbedError::Inject("not a script element".to_string()))?;
        script.set_src(url);
        script.set_async(true);

        let loaded = url.to_string();
        let onload = Closure::once_into_js(move || {
            EmbedRegistry::global().report(&loaded, Ok(()));
        });
        let failed = url.to_string();
        let onerror = Closure::once_into_js(move || {
            EmbedRegistry::global().report(&failed, Err(EmbedError::Load(failed.clone())));
        });
        script.set_onload(Some(onload.unchecked_ref()));
        script.set_onerror(Some(onerror.unchecked_ref()));

        head.append_child(&script)
            .map_err(|e| EmbedError::Inject(format!("{e:?}")))?;
        Ok(())
    }
}

#[cfg(not(feature = "hydrate"))]
impl ScriptInjector for ScriptTagInjector {
    fn inject(&self, url: &str) -> Result<(), EmbedError> {
        Err(EmbedError::Inject(format!("{url} can only be injected in a browser")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_period_interval_is_not_armed() {
        let clock = BrowserClock;
        assert!(clock.every(Duration::ZERO, Box::new(|| {})).is_none());
    }
}
