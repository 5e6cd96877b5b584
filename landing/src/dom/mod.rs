// Thin wrappers over web-sys for the interactive components.
// All decisions live in `crate::carousel` and `crate::reveal`.

mod observer;
mod scroll;

pub use observer::RevealController;
pub use scroll::{apply, measure, scroll_offset};

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
