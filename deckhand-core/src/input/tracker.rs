//! Press and hold tracking across poll cycles

use super::keys::Key;

/// What the keypad did this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyActivity {
    /// Key decoded this cycle
    pub key: Key,
    /// Cycles the key has been held beyond the first
    pub repeat: u8,
    /// True on the cycle the decoded key changed
    pub fresh: bool,
}

impl KeyActivity {
    /// A key went down this cycle
    pub fn is_press(&self) -> bool {
        self.fresh && self.key.is_pressed()
    }

    /// A key is still down from an earlier cycle
    pub fn is_held(&self) -> bool {
        !self.fresh && self.key.is_pressed()
    }

    /// Select has been held for exactly `threshold` repeats
    ///
    /// The repeat count keeps climbing past the threshold, so this is true
    /// on one cycle per press.
    pub fn is_long_press(&self, threshold: u8) -> bool {
        self.is_held() && self.key == Key::Select && self.repeat == threshold
    }
}

/// Previous key and how long it has been held
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    last: Key,
    repeat: u8,
}

impl KeyTracker {
    /// Create a tracker with no key down
    pub const fn new() -> Self {
        Self {
            last: Key::None,
            repeat: 0,
        }
    }

    /// Feed this cycle's decoded key
    pub fn update(&mut self, key: Key) -> KeyActivity {
        let fresh = key != self.last;
        if fresh {
            self.last = key;
            self.repeat = 0;
        } else if key.is_pressed() {
            self.repeat = self.repeat.saturating_add(1);
        }

        KeyActivity {
            key,
            repeat: self.repeat,
            fresh,
        }
    }

    /// Start counting the current hold from zero
    ///
    /// The key stays the same, so a key already down is still not a fresh
    /// press on the next update.
    pub fn restart_hold(&mut self) {
        self.repeat = 0;
    }

    /// Key seen on the last update
    pub fn last(&self) -> Key {
        self.last
    }

    /// Current repeat count
    pub fn repeat(&self) -> u8 {
        self.repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_hold() {
        let mut tracker = KeyTracker::new();
        let first = tracker.update(Key::Up);
        assert!(first.is_press());
        assert_eq!(first.repeat, 0);

        let second = tracker.update(Key::Up);
        assert!(second.is_held());
        assert!(!second.is_press());
        assert_eq!(second.repeat, 1);
    }

    #[test]
    fn test_change_resets_repeat() {
        let mut tracker = KeyTracker::new();
        tracker.update(Key::Left);
        tracker.update(Key::Left);
        tracker.update(Key::Left);
        assert_eq!(tracker.repeat(), 2);

        let next = tracker.update(Key::Right);
        assert!(next.is_press());
        assert_eq!(next.repeat, 0);
    }

    #[test]
    fn test_release_is_not_a_press() {
        let mut tracker = KeyTracker::new();
        tracker.update(Key::Down);
        let release = tracker.update(Key::None);
        assert!(release.fresh);
        assert!(!release.is_press());
        let idle = tracker.update(Key::None);
        assert_eq!(idle.repeat, 0);
        assert!(!idle.is_held());
    }

    #[test]
    fn test_restart_hold_keeps_key() {
        let mut tracker = KeyTracker::new();
        for _ in 0..4 {
            tracker.update(Key::Select);
        }
        tracker.restart_hold();
        assert_eq!(tracker.last(), Key::Select);
        assert_eq!(tracker.repeat(), 0);

        let next = tracker.update(Key::Select);
        assert!(next.is_held());
        assert_eq!(next.repeat, 1);
        assert!(!next.is_long_press(5));
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut tracker = KeyTracker::new();
        let fired: usize = (0..20)
            .map(|_| tracker.update(Key::Select))
            .filter(|a| a.is_long_press(5))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_long_press_on_sixth_cycle() {
        let mut tracker = KeyTracker::new();
        for _ in 0..5 {
            assert!(!tracker.update(Key::Select).is_long_press(5));
        }
        assert!(tracker.update(Key::Select).is_long_press(5));
    }

    #[test]
    fn test_only_select_long_presses() {
        let mut tracker = KeyTracker::new();
        for _ in 0..6 {
            assert!(!tracker.update(Key::Left).is_long_press(5));
        }
    }

    #[test]
    fn test_repeat_saturates() {
        let mut tracker = KeyTracker::new();
        for _ in 0..300 {
            tracker.update(Key::Select);
        }
        assert_eq!(tracker.repeat(), u8::MAX);
        assert_eq!(tracker.last(), Key::Select);
    }
}
