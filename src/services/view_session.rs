use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

// A user can switch mode or period before the previous load resolves. Every
// load takes a token at start; only the load holding the newest token may
// install its result, so a superseded load is discarded instead of
// clobbering the view that replaced it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Default)]
pub struct LoadSequencer {
    current: AtomicU64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadToken {
        LoadToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}

// The caller-owned slot holding the latest committed view.
#[derive(Default)]
pub struct ViewSession<T> {
    sequencer: LoadSequencer,
    latest: Mutex<Option<T>>,
}

impl<T: Clone> ViewSession<T> {
    pub fn new() -> Self {
        Self {
            sequencer: LoadSequencer::new(),
            latest: Mutex::new(None),
        }
    }

    pub fn begin_load(&self) -> LoadToken {
        self.sequencer.begin()
    }

    // Installs the view only while the token is still the newest one.
    // Returns false for a stale load, whose result must be dropped.
    pub fn commit(&self, token: LoadToken, view: T) -> bool {
        if !self.sequencer.is_current(token) {
            return false;
        }
        *self.latest.lock().expect("view session lock poisoned") = Some(view);
        true
    }

    pub fn latest(&self) -> Option<T> {
        self.latest.lock().expect("view session lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_loads_invalidate_older_tokens() {
        let sequencer = LoadSequencer::new();

        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn stale_commit_is_discarded() {
        let session: ViewSession<&str> = ViewSession::new();

        let slow_load = session.begin_load();
        let fast_switch = session.begin_load();

        assert!(session.commit(fast_switch, "week"));
        // The earlier load resolves late; its result must not win.
        assert!(!session.commit(slow_load, "today"));
        assert_eq!(session.latest(), Some("week"));
    }

    #[test]
    fn current_commit_replaces_the_previous_view() {
        let session: ViewSession<&str> = ViewSession::new();

        let first = session.begin_load();
        assert!(session.commit(first, "accuracy"));
        assert_eq!(session.latest(), Some("accuracy"));

        let second = session.begin_load();
        assert!(session.commit(second, "streak"));
        assert_eq!(session.latest(), Some("streak"));
    }
}
