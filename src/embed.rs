//! Third-party scripts (the scheduling widget) shared by every component that
//! embeds them.
//!
//! A script is injected by the first mounted holder and stays in the document
//! for later holders. Failures become [`EmbedStatus::Degraded`] instead of
//! being swallowed, and a degraded entry is forgotten once its last holder
//! goes away so that a later mount tries again.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, LazyLock,
};

use dashmap::DashMap;
use thiserror::Error;

static GLOBAL_EMBEDS: LazyLock<EmbedRegistry> = LazyLock::new(EmbedRegistry::new);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedStatus {
    Loading,
    Ready,
    Degraded(String),
}

impl EmbedStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("couldn't inject script {0}")]
    Inject(String),
    #[error("script failed to load: {0}")]
    Load(String),
}

pub trait ScriptInjector {
    /// Adds the script to the document. Load completion is reported later
    /// through [`EmbedRegistry::report`].
    fn inject(&self, url: &str) -> Result<(), EmbedError>;
}

type Listener = Arc<dyn Fn(&EmbedStatus) + Send + Sync>;

struct Entry {
    status: EmbedStatus,
    injected: bool,
    holders: Vec<(u64, Listener)>,
}

pub struct EmbedRegistry {
    entries: DashMap<String, Entry>,
    next_id: AtomicU64,
}

impl Default for EmbedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn global() -> &'static Self {
        &GLOBAL_EMBEDS
    }

    pub fn status(&self, url: &str) -> Option<EmbedStatus> {
        self.entries.get(url).map(|e| e.status.clone())
    }

    pub fn holders(&self, url: &str) -> usize {
        self.entries.get(url).map_or(0, |e| e.holders.len())
    }

    /// Registers a holder of `url`, injecting the script if nobody has yet.
    /// `listener` receives the current status right away and every change
    /// after that until the lease is dropped.
    pub fn acquire(
        &self,
        url: &str,
        injector: &impl ScriptInjector,
        listener: impl Fn(&EmbedStatus) + Send + Sync + 'static,
    ) -> EmbedLease<'_> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener = Arc::new(listener);
        let (inject, status) = {
            let mut entry = self
                .entries
                .entry(url.to_string())
                .or_insert_with(|| Entry {
                    status: EmbedStatus::Loading,
                    injected: false,
                    holders: Vec::new(),
                });
            let inject = !std::mem::replace(&mut entry.injected, true);
            entry.holders.push((id, listener.clone()));
            (inject, entry.status.clone())
        };

        listener(&status);
        if inject {
            log::debug!("injecting embed script {url}");
            if let Err(err) = injector.inject(url) {
                self.report(url, Err(err));
            }
        }
        EmbedLease {
            registry: self,
            url: url.to_string(),
            id,
        }
    }

    /// Records the outcome of a load and tells every current holder.
    pub fn report(&self, url: &str, result: Result<(), EmbedError>) {
        let (status, listeners) = {
            let Some(mut entry) = self.entries.get_mut(url) else {
                return;
            };
            let status = match result {
                Ok(()) => EmbedStatus::Ready,
                Err(err) => {
                    log::warn!("embed degraded: {err}");
                    EmbedStatus::Degraded(err.to_string())
                }
            };
            if entry.status == status {
                return;
            }
            entry.status = status.clone();
            let listeners = entry
                .holders
                .iter()
                .map(|(_, l)| l.clone())
                .collect::<Vec<_>>();
            (status, listeners)
        };
        for listener in listeners {
            listener(&status);
        }
    }

    fn release(&self, url: &str, id: u64) {
        if let Some(mut entry) = self.entries.get_mut(url) {
            entry.holders.retain(|(holder, _)| *holder != id);
        }
        let forgotten = self
            .entries
            .remove_if(url, |_, e| e.holders.is_empty() && e.status.is_degraded());
        if forgotten.is_some() {
            log::debug!("forgetting degraded embed {url}");
        }
    }
}

/// Held by a mounted component; dropping it releases the script.
pub struct EmbedLease<'a> {
    registry: &'a EmbedRegistry,
    url: String,
    id: u64,
}

impl EmbedLease<'_> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> Option<EmbedStatus> {
        self.registry.status(&self.url)
    }
}

impl Drop for EmbedLease<'_> {
    fn drop(&mut self) {
        self.registry.release(&self.url, self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{atomic::AtomicUsize, Mutex};

    use super::*;

    #[derive(Default)]
    struct FakeInjector {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeInjector {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ScriptInjector for FakeInjector {
        fn inject(&self, url: &str) -> Result<(), EmbedError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(EmbedError::Inject(url.to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn recorder() -> (Arc<Mutex<Vec<EmbedStatus>>>, impl Fn(&EmbedStatus) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        (seen, move |status: &EmbedStatus| {
            s.lock().unwrap().push(status.clone())
        })
    }

    const URL: &str = "https://assets.example.com/widget.js";

    #[test]
    fn test_first_holder_injects_once() {
        let registry = EmbedRegistry::new();
        let injector = FakeInjector::default();

        let first = registry.acquire(URL, &injector, |_| {});
        let second = registry.acquire(URL, &injector, |_| {});
        assert_eq!(injector.calls(), 1);
        assert_eq!(registry.holders(URL), 2);

        drop(first);
        drop(second);
        // a healthy script stays in the document
        let _third = registry.acquire(URL, &injector, |_| {});
        assert_eq!(injector.calls(), 1);
    }

    #[test]
    fn test_ready_is_broadcast() {
        let registry = EmbedRegistry::new();
        let injector = FakeInjector::default();
        let (seen_a, listener_a) = recorder();
        let (seen_b, listener_b) = recorder();

        let a = registry.acquire(URL, &injector, listener_a);
        let _b = registry.acquire(URL, &injector, listener_b);
        registry.report(URL, Ok(()));

        assert_eq!(
            *seen_a.lock().unwrap(),
            vec![EmbedStatus::Loading, EmbedStatus::Ready]
        );
        assert_eq!(
            *seen_b.lock().unwrap(),
            vec![EmbedStatus::Loading, EmbedStatus::Ready]
        );
        assert_eq!(a.status(), Some(EmbedStatus::Ready));
    }

    #[test]
    fn test_late_holder_gets_current_status() {
        let registry = EmbedRegistry::new();
        let injector = FakeInjector::default();
        let _a = registry.acquire(URL, &injector, |_| {});
        registry.report(URL, Ok(()));

        let (seen, listener) = recorder();
        let _b = registry.acquire(URL, &injector, listener);
        assert_eq!(*seen.lock().unwrap(), vec![EmbedStatus::Ready]);
    }

    #[test]
    fn test_injection_failure_degrades() {
        let registry = EmbedRegistry::new();
        let injector = FakeInjector::failing();
        let (seen, listener) = recorder();

        let lease = registry.acquire(URL, &injector, listener);
        let status = lease.status().unwrap();
        assert!(status.is_degraded());
        assert_eq!(
            seen.lock().unwrap().last(),
            Some(&EmbedStatus::Degraded(format!("couldn't inject script {URL}")))
        );
    }

    #[test]
    fn test_load_failure_degrades_and_retries_after_release() {
        let registry = EmbedRegistry::new();
        let injector = FakeInjector::default();

        let lease = registry.acquire(URL, &injector, |_| {});
        registry.report(URL, Err(EmbedError::Load(URL.to_string())));
        assert!(registry.status(URL).unwrap().is_degraded());

        // still held: a second mount sees degraded mode without reinjecting
        let other = registry.acquire(URL, &injector, |_| {});
        assert_eq!(injector.calls(), 1);
        drop(other);
        drop(lease);

        assert_eq!(registry.status(URL), None);
        let _retry = registry.acquire(URL, &injector, |_| {});
        assert_eq!(injector.calls(), 2);
        assert_eq!(registry.status(URL), Some(EmbedStatus::Loading));
    }

    #[test]
    fn test_released_listener_is_not_called() {
        let registry = EmbedRegistry::new();
        let injector = FakeInjector::default();
        let (seen, listener) = recorder();
        let _keep = registry.acquire(URL, &injector, |_| {});
        let lease = registry.acquire(URL, &injector, listener);
        drop(lease);

        registry.report(URL, Ok(()));
        assert_eq!(*seen.lock().unwrap(), vec![EmbedStatus::Loading]);
        assert_eq!(registry.holders(URL), 1);
    }

    #[test]
    fn test_report_for_unknown_url_is_ignored() {
        let registry = EmbedRegistry::new();
        registry.report("https://nowhere.example.com/x.js", Ok(()));
        assert_eq!(registry.status("https://nowhere.example.com/x.js"), None);
    }
}
