use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::carousel::{Measurements, ScrollCommand};

/// Measure a carousel track: its visible width, the width of its first
/// item and how far it can scroll. Items that have not been laid out yet
/// report `None`.
pub fn measure(track: &Element) -> Measurements {
    let container_width = f64::from(track.client_width());
    let item_width = track
        .first_element_child()
        .map(|item| item.get_bounding_client_rect().width())
        .filter(|w| *w > 0.0);
    let max_offset = f64::from(track.scroll_width() - track.client_width());
    Measurements::new(container_width, item_width).with_max_offset(max_offset)
}

pub fn scroll_offset(track: &Element) -> f64 {
    f64::from(track.scroll_left())
}

/// Fire-and-forget: a newer command simply replaces the running animation.
pub fn apply(track: &Element, command: ScrollCommand) {
    let options = ScrollToOptions::new();
    options.set_left(command.left);
    options.set_behavior(if command.smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    track.scroll_to_with_scroll_to_options(&options);
}
