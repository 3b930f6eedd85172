//! Edge debouncing

/// Default debounce window
pub const DEBOUNCE_WINDOW_US: u64 = 250_000;

/// Debounce clock shared by all buttons
///
/// Remembers only the last *accepted* edge. Rejected edges do not move
/// the window, so a burst of bounces cannot keep extending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_us: u64,
    last_accepted_us: Option<u64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_US)
    }
}

impl Debouncer {
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: None,
        }
    }

    /// Build from a window in milliseconds
    pub const fn from_millis(window_ms: u32) -> Self {
        Self::new(window_ms as u64 * 1_000)
    }

    pub fn window_us(&self) -> u64 {
        self.window_us
    }

    pub fn last_accepted_us(&self) -> Option<u64> {
        self.last_accepted_us
    }

    /// Decide whether an edge at `now_us` counts
    ///
    /// The first edge ever seen is always accepted. A timestamp earlier
    /// than the last accepted one counts as zero elapsed time.
    pub fn accept(&mut self, now_us: u64) -> bool {
        if let Some(last) = self.last_accepted_us {
            if now_us.saturating_sub(last) < self.window_us {
                return false;
            }
        }
        self.last_accepted_us = Some(now_us);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_accepted() {
        let mut d = Debouncer::default();
        assert!(d.accept(0));
        assert_eq!(d.last_accepted_us(), Some(0));
    }

    #[test]
    fn test_edge_inside_window_rejected() {
        let mut d = Debouncer::default();
        assert!(d.accept(1_000_000));
        assert!(!d.accept(1_249_999));
        // Rejection does not move the window
        assert_eq!(d.last_accepted_us(), Some(1_000_000));
    }

    #[test]
    fn test_edge_at_window_boundary_accepted() {
        let mut d = Debouncer::default();
        assert!(d.accept(1_000_000));
        assert!(d.accept(1_250_000));
        assert_eq!(d.last_accepted_us(), Some(1_250_000));
    }

    #[test]
    fn test_bounces_do_not_extend_window() {
        let mut d = Debouncer::default();
        assert!(d.accept(0));
        assert!(!d.accept(100_000));
        assert!(!d.accept(200_000));
        assert!(d.accept(250_000));
    }

    #[test]
    fn test_time_going_backwards() {
        let mut d = Debouncer::default();
        assert!(d.accept(500_000));
        assert!(!d.accept(400_000));
    }

    #[test]
    fn test_from_millis() {
        assert_eq!(Debouncer::from_millis(250), Debouncer::default());
    }
}
