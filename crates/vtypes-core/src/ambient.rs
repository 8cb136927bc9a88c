//! # Ambient Culture
//!
//! The ambient culture is the caller's current locale at call time. It is
//! consulted when a `Money` value is built from an amount alone, when the
//! region selection algorithm looks for the caller's own region, and when a
//! money value is formatted without an explicit format provider.
//!
//! Resolution order:
//!
//! 1. A thread-scoped override installed with [`scoped_culture()`].
//! 2. The process default installed with [`set_process_culture()`]
//!    (normally from [`crate::config::Settings::apply()`]).
//! 3. The environment (`VTYPES_CULTURE`, then POSIX `LC_ALL`,
//!    `LC_MONETARY`, `LANG`), read once per process.
//! 4. The invariant culture (empty name), which has no region.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::config;

/// Name of the invariant culture. It never has region data.
pub const INVARIANT_CULTURE: &str = "";

static PROCESS_CULTURE: RwLock<Option<String>> = parking_lot::const_rwlock(None);

static ENVIRONMENT_CULTURE: OnceLock<Option<String>> = OnceLock::new();

thread_local! {
    static SCOPED_CULTURE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Culture name in effect for the calling thread.
pub fn current_culture() -> String {
    if let Some(name) = SCOPED_CULTURE.with(|c| c.borrow().clone()) {
        return name;
    }
    if let Some(name) = PROCESS_CULTURE.read().clone() {
        return name;
    }
    ENVIRONMENT_CULTURE
        .get_or_init(config::culture_from_env)
        .clone()
        .unwrap_or_else(|| INVARIANT_CULTURE.to_string())
}

/// Install (or clear, with `None`) the process-wide default culture.
pub fn set_process_culture(name: Option<String>) {
    tracing::debug!(culture = ?name, "process culture set");
    *PROCESS_CULTURE.write() = name;
}

/// The process-wide default culture, if one was installed.
pub fn process_culture() -> Option<String> {
    PROCESS_CULTURE.read().clone()
}

/// Override the culture for the current thread until the guard is dropped.
///
/// Guards nest: dropping a guard restores whatever was in effect when it
/// was created.
#[must_use = "the override is removed as soon as the guard is dropped"]
pub fn scoped_culture(name: impl Into<String>) -> CultureGuard {
    let previous = SCOPED_CULTURE.with(|c| c.borrow_mut().replace(name.into()));
    CultureGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Run `f` with `name` as the calling thread's culture.
pub fn with_culture<R>(name: impl Into<String>, f: impl FnOnce() -> R) -> R {
    let _guard = scoped_culture(name);
    f()
}

/// Restores the previous thread culture on drop. Bound to the thread that
/// created it.
#[derive(Debug)]
pub struct CultureGuard {
    previous: Option<String>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for CultureGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SCOPED_CULTURE.with(|c| *c.borrow_mut() = previous);
    }
}
