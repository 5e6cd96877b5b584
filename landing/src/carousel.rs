//! Scroll-position bookkeeping for the app walkthrough carousel.
//!
//! Everything here is pure: the component in `components::image_carousel`
//! measures the DOM, feeds the numbers in, and applies the returned
//! [`ScrollCommand`]s. Keeping the math out of the event plumbing lets the
//! rounding and clamping rules be tested without a browser.

/// Widths read from the rendered strip, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    /// Visible width of the scroll container.
    pub container_width: f64,
    /// Rendered width of one item, `None` before any item is laid out.
    pub item_width: Option<f64>,
    /// Largest reachable scroll offset (`scrollWidth - clientWidth`), when
    /// known. The browser clamps every scroll into `[0, max_offset]`.
    pub max_offset: Option<f64>,
}

impl Measurements {
    pub fn new(container_width: f64, item_width: Option<f64>) -> Self {
        Self {
            container_width,
            item_width,
            max_offset: None,
        }
    }

    pub fn with_max_offset(mut self, max_offset: f64) -> Self {
        self.max_offset = Some(max_offset);
        self
    }

    /// Width of one item, falling back to the container width when no item
    /// has been measured yet. `None` when neither is usable.
    pub fn resolved_item_width(&self) -> Option<f64> {
        self.item_width
            .filter(|w| usable(*w))
            .or_else(|| Some(self.container_width).filter(|w| usable(*w)))
    }

    fn container_or(&self, item_width: f64) -> f64 {
        if usable(self.container_width) {
            self.container_width
        } else {
            item_width
        }
    }
}

fn usable(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

/// Round half up: an offset exactly between two items selects the later one.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Slack for sub-pixel rounding of `scrollLeft` at the end of the range.
const EDGE_TOLERANCE: f64 = 1.0;

/// Index of the item nearest to the centre of the visible container.
///
/// With a container exactly one item wide this is `round(offset / item_width)`.
/// Wider containers shift the offset by the centring margin so the result is
/// the inverse of [`centered_offset`]. The first and last items cannot be
/// centred in a wider container, so an offset pinned at either end of the
/// scrollable range (`max_offset`) selects that end's item. Returns `None`
/// for an empty strip or unusable input.
pub fn nearest_index(
    offset: f64,
    item_width: f64,
    container_width: f64,
    max_offset: Option<f64>,
    item_count: usize,
) -> Option<usize> {
    if item_count == 0 || !usable(item_width) || !offset.is_finite() {
        return None;
    }
    let last = item_count - 1;
    if let Some(max) = max_offset.filter(|max| usable(*max)) {
        if offset <= 0.0 {
            return Some(0);
        }
        if offset >= max - EDGE_TOLERANCE {
            return Some(last);
        }
    }
    let container_width = if usable(container_width) {
        container_width
    } else {
        item_width
    };
    let margin = (container_width - item_width) / 2.0;
    let candidate = round_half_up((offset + margin) / item_width);
    Some(candidate.clamp(0.0, last as f64) as usize)
}

/// Scroll offset that centres item `index` in the visible container.
///
/// Can fall outside `[0, max_offset]` for the first and last items; the
/// browser clamps it to the scrollable range.
pub fn centered_offset(index: usize, item_width: f64, container_width: f64) -> f64 {
    index as f64 * item_width - (container_width - item_width) / 2.0
}

/// A scroll the DOM layer should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub left: f64,
    pub smooth: bool,
}

/// The carousel has a single state, `Idle(active)`, driven by user scrolls
/// and programmatic scroll-to-index requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    active: usize,
}

impl Carousel {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            active: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Initial centring. `preferred` is clamped to the last item so short
    /// strips never index out of bounds.
    pub fn mount(&mut self, preferred: usize, m: &Measurements) -> Option<ScrollCommand> {
        if self.is_empty() {
            return None;
        }
        let index = preferred.min(self.item_count - 1);
        self.scroll_to_index(index, m)
    }

    /// Centre item `index` with a smooth scroll and mark it active right
    /// away, without waiting for the animation. Out-of-range indexes are
    /// ignored.
    pub fn scroll_to_index(&mut self, index: usize, m: &Measurements) -> Option<ScrollCommand> {
        if index >= self.item_count {
            tracing::debug!(index, count = self.item_count, "carousel: index out of range");
            return None;
        }
        self.active = index;
        let left = match m.resolved_item_width() {
            Some(item_width) => centered_offset(index, item_width, m.container_or(item_width)),
            None => 0.0,
        };
        Some(ScrollCommand { left, smooth: true })
    }

    /// Sync the active index with a scroll position reported by the browser.
    /// Returns `true` when the active index changed.
    pub fn on_user_scroll(&mut self, offset: f64, m: &Measurements) -> bool {
        let Some(item_width) = m.resolved_item_width() else {
            return false;
        };
        match nearest_index(
            offset,
            item_width,
            m.container_width,
            m.max_offset,
            self.item_count,
        ) {
            Some(candidate) if candidate != self.active => {
                self.active = candidate;
                true
            }
            _ => false,
        }
    }

    /// Whether dot `index` should render as active.
    pub fn is_active(&self, index: usize) -> bool {
        index < self.item_count && index == self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strip(item: f64, container: f64) -> Measurements {
        Measurements::new(container, Some(item))
    }

    #[test]
    fn rounds_half_up_at_exact_midpoint() {
        assert_eq!(nearest_index(250.0, 100.0, 100.0, None, 5), Some(3));
        assert_eq!(nearest_index(249.9, 100.0, 100.0, None, 5), Some(2));
        assert_eq!(nearest_index(150.0, 100.0, 100.0, None, 5), Some(2));
    }

    #[test]
    fn nearest_index_clamps_into_range() {
        assert_eq!(nearest_index(-500.0, 100.0, 100.0, None, 3), Some(0));
        assert_eq!(nearest_index(10_000.0, 100.0, 100.0, None, 3), Some(2));
        assert_eq!(nearest_index(0.0, 100.0, 100.0, None, 0), None);
    }

    #[test]
    fn nearest_index_rejects_unusable_input() {
        assert_eq!(nearest_index(10.0, 0.0, 100.0, None, 3), None);
        assert_eq!(nearest_index(f64::NAN, 100.0, 100.0, None, 3), None);
        assert_eq!(nearest_index(10.0, f64::INFINITY, 100.0, None, 3), None);
    }

    #[test]
    fn nearest_index_inverts_centering() {
        let (item, container) = (220.0, 600.0);
        for index in 0..3 {
            let offset = centered_offset(index, item, container);
            assert_eq!(nearest_index(offset, item, container, None, 3), Some(index));
        }
    }

    #[test]
    fn clicked_edge_dots_survive_clamped_scroll() {
        // Three 220px items in a 448px track: scrollLeft tops out at 212.
        let m = strip(220.0, 448.0).with_max_offset(212.0);
        let mut carousel = Carousel::new(3);
        for index in [0, 2, 1, 0, 2] {
            let cmd = carousel.scroll_to_index(index, &m).unwrap();
            let settled = cmd.left.clamp(0.0, 212.0);
            carousel.on_user_scroll(settled, &m);
            assert_eq!(carousel.active_index(), index, "settled at {settled}");
        }
    }

    #[test]
    fn range_ends_select_edge_items() {
        let max = Some(212.0);
        assert_eq!(nearest_index(0.0, 220.0, 448.0, max, 3), Some(0));
        assert_eq!(nearest_index(106.0, 220.0, 448.0, max, 3), Some(1));
        assert_eq!(nearest_index(211.5, 220.0, 448.0, max, 3), Some(2));
        assert_eq!(nearest_index(212.0, 220.0, 448.0, max, 3), Some(2));
        // Without the range the pinned ends read as the middle item.
        assert_eq!(nearest_index(0.0, 220.0, 448.0, None, 3), Some(1));
        // A strip that does not scroll has no ends to pin.
        assert_eq!(nearest_index(0.0, 220.0, 448.0, Some(0.0), 3), Some(1));
    }

    #[test]
    fn centered_offset_centres_item_in_container() {
        assert_eq!(centered_offset(1, 200.0, 600.0), 0.0);
        assert_eq!(centered_offset(2, 200.0, 600.0), 200.0);
        assert_eq!(centered_offset(3, 100.0, 100.0), 300.0);
    }

    #[test]
    fn falls_back_to_container_width() {
        assert_eq!(Measurements::new(320.0, None).resolved_item_width(), Some(320.0));
        assert_eq!(Measurements::new(320.0, Some(0.0)).resolved_item_width(), Some(320.0));
        assert_eq!(Measurements::new(0.0, None).resolved_item_width(), None);
    }

    #[test]
    fn mount_centres_second_item() {
        let mut carousel = Carousel::new(3);
        let cmd = carousel.mount(1, &strip(200.0, 600.0));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(cmd, Some(ScrollCommand { left: 0.0, smooth: true }));
    }

    #[test]
    fn mount_clamps_for_single_item() {
        let mut carousel = Carousel::new(1);
        assert!(carousel.mount(1, &strip(200.0, 600.0)).is_some());
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        let m = strip(100.0, 100.0);
        assert_eq!(carousel.mount(1, &m), None);
        assert_eq!(carousel.scroll_to_index(0, &m), None);
        assert!(!carousel.on_user_scroll(300.0, &m));
        assert_eq!(carousel.active_index(), 0);
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn scroll_to_index_is_optimistic() {
        let mut carousel = Carousel::new(4);
        let m = strip(100.0, 100.0);
        for target in [3, 0, 2, 2, 1] {
            carousel.scroll_to_index(target, &m);
            assert_eq!(carousel.active_index(), target);
        }
    }

    #[test]
    fn scroll_to_invalid_index_is_ignored() {
        let mut carousel = Carousel::new(3);
        let m = strip(100.0, 100.0);
        carousel.scroll_to_index(2, &m);
        assert_eq!(carousel.scroll_to_index(3, &m), None);
        assert_eq!(carousel.scroll_to_index(usize::MAX, &m), None);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn unmeasured_strip_scrolls_to_origin() {
        let mut carousel = Carousel::new(3);
        let cmd = carousel.scroll_to_index(2, &Measurements::default());
        assert_eq!(cmd, Some(ScrollCommand { left: 0.0, smooth: true }));
        assert_eq!(carousel.active_index(), 2);
        assert!(!carousel.on_user_scroll(500.0, &Measurements::default()));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn user_scroll_reports_only_changes() {
        let mut carousel = Carousel::new(3);
        let m = strip(100.0, 100.0);
        assert!(!carousel.on_user_scroll(20.0, &m));
        assert!(carousel.on_user_scroll(110.0, &m));
        assert_eq!(carousel.active_index(), 1);
        assert!(!carousel.on_user_scroll(140.0, &m));
    }

    #[test]
    fn indicators_mark_active_dot() {
        let mut carousel = Carousel::new(3);
        carousel.scroll_to_index(1, &strip(100.0, 100.0));
        let active: Vec<bool> = (0..3).map(|i| carousel.is_active(i)).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn active_index_stays_in_range_for_any_sequence() {
        // Small deterministic LCG so the event mix is reproducible.
        let mut seed: u64 = 0x5eed;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            seed >> 33
        };
        let widths = [
            strip(100.0, 100.0),
            strip(220.0, 640.0),
            strip(220.0, 448.0).with_max_offset(212.0),
            Measurements::new(0.0, None),
            Measurements::new(375.0, None),
        ];
        for count in 0..8usize {
            let mut carousel = Carousel::new(count);
            carousel.mount(1, &widths[count % widths.len()]);
            for _ in 0..200 {
                let m = widths[(next() % widths.len() as u64) as usize];
                if next() % 2 == 0 {
                    carousel.scroll_to_index((next() % 10) as usize, &m);
                } else {
                    let offset = (next() % 4000) as f64 - 1000.0;
                    carousel.on_user_scroll(offset, &m);
                }
                assert!(carousel.active_index() <= count.saturating_sub(1));
            }
        }
    }
}
