//! Sticky-header and scroll-to-top decisions, plus the debounce gate that
//! throttles the scroll handler driving them.
//!
//! The model is pure: it maps a vertical scroll offset to marker states.
//! The UI crate reads offsets from the viewport and applies the results.

use std::time::Duration;

/// Scroll offset past which the scroll-to-top control becomes visible.
pub const TO_TOP_THRESHOLD: f64 = 300.0;

/// Quiet period for the trailing-edge scroll debounce.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(50);

/// Decides sticky-header and scroll-to-top state from a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollModel {
    /// The header's natural (unstuck) height, measured once at startup.
    sticky_threshold: f64,
}

impl ScrollModel {
    /// Model with the header's natural height as the sticky threshold.
    pub fn new(header_height: f64) -> Self {
        Self {
            sticky_threshold: header_height,
        }
    }

    /// Header is stuck once the page has scrolled past its own height.
    pub fn header_sticky(&self, offset: f64) -> bool {
        offset > self.sticky_threshold
    }

    /// Body top padding compensating for the header leaving the flow.
    ///
    /// Equals the header's rendered height while stuck so the content below
    /// does not jump, zero otherwise.
    pub fn body_padding(&self, offset: f64, rendered_header_height: f64) -> f64 {
        if self.header_sticky(offset) {
            rendered_header_height
        } else {
            0.0
        }
    }

    /// Scroll-to-top control shows past the fixed 300px threshold.
    pub fn to_top_visible(offset: f64) -> bool {
        offset > TO_TOP_THRESHOLD
    }
}

/// Trailing-edge debounce expressed as a generation counter.
///
/// Every trigger arms a new generation and invalidates all earlier ones.
/// The caller sleeps the quiet period and only acts if its token is still
/// the current generation, so a burst of triggers runs the handler once,
/// after the burst goes quiet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate, invalidating every previously issued token.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// True iff `token` is the most recently armed generation.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_crosses_header_height() {
        let model = ScrollModel::new(80.0);
        assert!(!model.header_sticky(0.0));
        assert!(!model.header_sticky(80.0));
        assert!(model.header_sticky(81.0));
    }

    #[test]
    fn test_body_padding_matches_rendered_height() {
        let model = ScrollModel::new(80.0);
        assert_eq!(model.body_padding(200.0, 64.0), 64.0);
        assert_eq!(model.body_padding(10.0, 64.0), 0.0);
    }

    #[test]
    fn test_to_top_threshold_both_directions() {
        assert!(!ScrollModel::to_top_visible(0.0));
        assert!(!ScrollModel::to_top_visible(300.0));
        assert!(ScrollModel::to_top_visible(301.0));
        assert!(!ScrollModel::to_top_visible(299.0));
    }

    #[test]
    fn test_gate_invalidates_older_tokens() {
        let mut gate = DebounceGate::new();
        let first = gate.arm();
        let second = gate.arm();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_trailing_trigger_fires() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::{Arc, Mutex};

        let gate = Arc::new(Mutex::new(DebounceGate::new()));
        let fired = Arc::new(AtomicUsize::new(0));

        // Three triggers in a burst, each scheduling the trailing check.
        let mut tasks = Vec::new();
        for _ in 0..3 {
            let token = gate.lock().unwrap().arm();
            let gate = Arc::clone(&gate);
            let fired = Arc::clone(&fired);
            tasks.push(tokio::spawn(async move {
                tokio::time::sleep(DEBOUNCE_QUIET).await;
                if gate.lock().unwrap().is_current(token) {
                    fired.fetch_add(1, Ordering::SeqCst);
                }
            }));
        }

        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
