use chrono::{DateTime, SubsecRound, Utc};
use std::{fmt, sync::Arc};

/// Source of the current time used to stamp create/update timestamp fields.
///
/// Readings are truncated to whole seconds, the resolution of stored
/// timestamps.
#[derive(Clone)]
pub struct Clock {
    now: Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl Clock {
    /// The system clock.
    pub fn system() -> Clock {
        Clock::from_fn(Utc::now)
    }

    /// A clock frozen at `at`.
    pub fn fixed(at: DateTime<Utc>) -> Clock {
        Clock::from_fn(move || at)
    }

    pub fn from_fn(now: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Clock {
        Clock { now: Arc::new(now) }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.now)().trunc_subsecs(0)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::system()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock").finish_non_exhaustive()
    }
}
