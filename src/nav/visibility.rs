//! Show/hide decisions for the floating nav bar.
//!
//! Fed by two browser signals: normalized scroll progress (for the
//! direction heuristic) and the raw scroll offset (for the elevation shadow).

use super::TOP_REVEAL_THRESHOLD;

/// Visibility state of the floating nav, recomputed from scroll samples.
///
/// Fresh state on every mount: the bar starts visible and un-elevated, and
/// the first progress sample is compared against 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollVisibility {
    /// Previous progress sample, used only to derive direction.
    progress: f64,
    visible: bool,
    scrolled: bool,
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollVisibility {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            visible: true,
            scrolled: false,
        }
    }

    /// Feed one normalized scroll-progress sample in [0, 1].
    ///
    /// The bar is shown near the top of the page or while scrolling upward;
    /// scrolling downward past the top threshold hides it. The raw difference
    /// between consecutive samples is used as-is - no smoothing for anchor
    /// jumps.
    pub fn sample_progress(&mut self, current: f64) -> bool {
        let direction = current - self.progress;
        self.visible = current < TOP_REVEAL_THRESHOLD || direction < 0.0;
        self.progress = current;
        self.visible
    }

    /// Feed one raw vertical scroll offset (px).
    ///
    /// Returns `Some(new_value)` only when the elevation flag actually flips,
    /// so callers can skip redundant redraws.
    pub fn sample_offset(&mut self, offset_px: f64) -> Option<bool> {
        let scrolled = offset_px > 0.0;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    /// Whether the bar should currently be shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the page has scrolled at all (drives shadow/margin only).
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(samples: &[f64]) -> ScrollVisibility {
        let mut state = ScrollVisibility::new();
        for &s in samples {
            state.sample_progress(s);
        }
        state
    }

    #[test]
    fn starts_visible_and_unelevated() {
        let state = ScrollVisibility::new();
        assert!(state.visible());
        assert!(!state.scrolled());
    }

    #[test]
    fn near_top_is_always_visible() {
        // Scrolling down, but the second sample lands inside the threshold.
        assert!(feed(&[0.10, 0.03]).visible());
        assert!(feed(&[0.049]).visible());
    }

    #[test]
    fn scrolling_down_past_threshold_hides() {
        assert!(!feed(&[0.10, 0.20]).visible());
    }

    #[test]
    fn scrolling_up_reveals() {
        assert!(feed(&[0.20, 0.10]).visible());
    }

    #[test]
    fn holding_position_past_threshold_stays_hidden() {
        // direction == 0 is not "scrolling up"
        assert!(!feed(&[0.20, 0.20]).visible());
    }

    #[test]
    fn offset_flag_flips_once_per_sign_change() {
        let mut state = ScrollVisibility::new();
        assert_eq!(state.sample_offset(12.0), Some(true));
        assert_eq!(state.sample_offset(300.0), None);
        assert_eq!(state.sample_offset(1.0), None);
        assert_eq!(state.sample_offset(0.0), Some(false));
        assert_eq!(state.sample_offset(0.0), None);
    }
}
