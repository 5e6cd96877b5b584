//! One-shot reveal bookkeeping for page sections.
//!
//! A single intersection subscription feeds [`RevealRegistry::dispatch`],
//! which maps each reported section to its revealed-flag cell. Flags only
//! ever go from hidden to revealed.

use std::collections::HashMap;
use std::hash::Hash;

/// Receives the one-time "revealed" notification for a section.
pub trait RevealSink {
    fn reveal(&self);
}

/// Lifecycle of the shared subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Events are dispatched to registered sections.
    Observing,
    /// Intersection primitive missing: everything is revealed on sight.
    FailOpen,
    /// Torn down on unmount: nothing mutates anymore.
    Stopped,
}

struct Tracked<S> {
    sink: S,
    revealed: bool,
}

pub struct RevealRegistry<K, S> {
    phase: Phase,
    sections: HashMap<K, Tracked<S>>,
}

impl<K, S> Default for RevealRegistry<K, S>
where
    K: Eq + Hash,
    S: RevealSink,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> RevealRegistry<K, S>
where
    K: Eq + Hash,
    S: RevealSink,
{
    pub fn new() -> Self {
        Self {
            phase: Phase::Observing,
            sections: HashMap::new(),
        }
    }

    /// Start tracking a section. Returns `true` when the caller should begin
    /// observing it: the key is new and the registry is still observing.
    /// In fail-open mode the section is revealed immediately instead.
    pub fn register(&mut self, key: K, sink: S) -> bool {
        if self.phase == Phase::Stopped || self.sections.contains_key(&key) {
            return false;
        }
        let revealed = self.phase == Phase::FailOpen;
        if revealed {
            sink.reveal();
        }
        self.sections.insert(key, Tracked { sink, revealed });
        !revealed
    }

    /// Apply one batch of intersection reports. Returns the keys that were
    /// revealed by this batch so the caller can stop observing them.
    pub fn dispatch<'a, Q>(&mut self, entries: impl IntoIterator<Item = (&'a Q, bool)>) -> Vec<&'a Q>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
    {
        if self.phase != Phase::Observing {
            return Vec::new();
        }
        let mut newly = Vec::new();
        for (key, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(tracked) = self.sections.get_mut(key) {
                if !tracked.revealed {
                    tracked.revealed = true;
                    tracked.sink.reveal();
                    newly.push(key);
                }
            }
        }
        newly
    }

    /// Fail open: reveal every section now and every section registered
    /// later. Content must never stay hidden because animation broke.
    pub fn fail_open(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.phase = Phase::FailOpen;
        for tracked in self.sections.values_mut().filter(|t| !t.revealed) {
            tracked.revealed = true;
            tracked.sink.reveal();
        }
    }

    /// Stop reacting to anything. Idempotent.
    pub fn teardown(&mut self) {
        self.phase = Phase::Stopped;
        self.sections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counter(Rc<Cell<u32>>);

    impl Counter {
        fn hits(&self) -> u32 {
            self.0.get()
        }
    }

    impl RevealSink for Counter {
        fn reveal(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl<K: Eq + Hash, S: RevealSink> RevealRegistry<K, S> {
        fn is_revealed(&self, key: &K) -> Option<bool> {
            self.sections.get(key).map(|t| t.revealed)
        }
    }

    fn registry(ids: &[&'static str]) -> (RevealRegistry<&'static str, Counter>, Vec<Counter>) {
        let mut reg = RevealRegistry::new();
        let counters: Vec<Counter> = ids.iter().map(|_| Counter::default()).collect();
        for (id, counter) in ids.iter().zip(&counters) {
            assert!(reg.register(*id, counter.clone()));
        }
        (reg, counters)
    }

    #[test]
    fn reveals_on_first_intersection() {
        let (mut reg, counters) = registry(&["features", "team"]);
        let newly = reg.dispatch([(&"features", true), (&"team", false)]);
        assert_eq!(newly, vec![&"features"]);
        assert_eq!(reg.is_revealed(&"features"), Some(true));
        assert_eq!(reg.is_revealed(&"team"), Some(false));
        assert_eq!(counters[0].hits(), 1);
        assert_eq!(counters[1].hits(), 0);
    }

    #[test]
    fn reveal_happens_at_most_once() {
        let (mut reg, counters) = registry(&["features"]);
        reg.dispatch([(&"features", true)]);
        reg.dispatch([(&"features", false)]);
        let newly = reg.dispatch([(&"features", true)]);
        assert!(newly.is_empty());
        assert_eq!(reg.is_revealed(&"features"), Some(true));
        assert_eq!(counters[0].hits(), 1);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let (mut reg, counters) = registry(&["features"]);
        assert!(reg.dispatch([(&"pricing", true)]).is_empty());
        assert_eq!(counters[0].hits(), 0);
    }

    #[test]
    fn dispatch_accepts_borrowed_keys() {
        let mut reg: RevealRegistry<String, Counter> = RevealRegistry::new();
        let counter = Counter::default();
        reg.register("contact".to_string(), counter.clone());
        let reported = String::from("contact");
        let newly = reg.dispatch([(reported.as_str(), true)]);
        assert_eq!(newly, vec!["contact"]);
        assert_eq!(counter.hits(), 1);
    }

    #[test]
    fn duplicate_registration_is_noop() {
        let (mut reg, _) = registry(&["team"]);
        assert!(!reg.register("team", Counter::default()));
        assert_eq!(reg.sections.len(), 1);
    }

    #[test]
    fn teardown_before_events_blocks_all_mutations() {
        let (mut reg, counters) = registry(&["features", "team"]);
        reg.teardown();
        assert!(reg.dispatch([(&"features", true), (&"team", true)]).is_empty());
        assert!(!reg.register("about", Counter::default()));
        reg.fail_open();
        assert_eq!(reg.phase, Phase::Stopped);
        assert!(counters.iter().all(|c| c.hits() == 0));
        assert!(reg.sections.is_empty());
    }

    #[test]
    fn fail_open_reveals_everything() {
        let (mut reg, counters) = registry(&["features", "team"]);
        reg.dispatch([(&"team", true)]);
        reg.fail_open();
        assert!(counters.iter().all(|c| c.hits() == 1));

        let late = Counter::default();
        assert!(!reg.register("contact", late.clone()));
        assert_eq!(late.hits(), 1);
        assert_eq!(reg.is_revealed(&"contact"), Some(true));
    }

    #[test]
    fn events_after_fail_open_do_nothing() {
        let (mut reg, counters) = registry(&["features"]);
        reg.fail_open();
        assert!(reg.dispatch([(&"features", true)]).is_empty());
        assert_eq!(counters[0].hits(), 1);
    }
}
