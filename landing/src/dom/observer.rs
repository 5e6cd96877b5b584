//! Browser side of the scroll reveal: one `IntersectionObserver` shared by
//! every section, dispatching into [`RevealRegistry`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealOptions;
use crate::error::DomError;
use crate::reveal::{RevealRegistry, RevealSink};

/// Attribute carrying the section id on every observed element; must match
/// the markup in `RevealSection`.
const REVEAL_ATTR: &str = "data-reveal";

impl RevealSink for RwSignal<bool> {
    fn reveal(&self) {
        self.set(true);
    }
}

/// One intersection report, already mapped back to its section id.
pub struct Report {
    pub key: String,
    pub target: Element,
    pub intersecting: bool,
}

/// Owns the observer and its JS callback. Dropping it disconnects.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(
        options: &RevealOptions,
        mut on_reports: impl FnMut(Vec<Report>) + 'static,
    ) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::MissingWindow)?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(DomError::ObserverUnavailable);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let key = target.get_attribute(REVEAL_ATTR)?;
                        Some(Report {
                            key,
                            intersecting: entry.is_intersecting(),
                            target,
                        })
                    })
                    .collect();
                on_reports(reports);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct RevealState {
    registry: RevealRegistry<&'static str, RwSignal<bool>>,
    observer: Option<RevealObserver>,
}

/// Handle shared through context. Sections register with [`observe`], the
/// app root calls [`teardown`] on unmount.
///
/// [`observe`]: RevealController::observe
/// [`teardown`]: RevealController::teardown
#[derive(Clone, Copy)]
pub struct RevealController {
    state: StoredValue<RevealState, LocalStorage>,
}

impl RevealController {
    pub fn new(options: &RevealOptions) -> Self {
        let state = StoredValue::new_local(RevealState {
            registry: RevealRegistry::new(),
            observer: None,
        });
        let controller = Self { state };

        match RevealObserver::new(options, move |reports| controller.dispatch(reports)) {
            Ok(observer) => {
                tracing::debug!(
                    threshold = options.threshold,
                    root_margin = %options.root_margin,
                    "reveal observer attached"
                );
                state.update_value(|s| s.observer = Some(observer));
            }
            Err(err) => {
                tracing::warn!(%err, "reveal animations disabled, showing every section");
                state.update_value(|s| s.registry.fail_open());
            }
        }

        controller
    }

    /// Start watching `element` for section `key`. Idempotent per key.
    pub fn observe(&self, key: &'static str, element: &Element, revealed: RwSignal<bool>) {
        let stored = self.state.try_update_value(|s| {
            if s.registry.register(key, revealed) {
                if let Some(observer) = &s.observer {
                    observer.observe(element);
                }
            }
        });
        if stored.is_none() {
            tracing::trace!(key, "reveal controller disposed, section not observed");
        }
    }

    fn dispatch(&self, reports: Vec<Report>) {
        let stored = self.state.try_update_value(|s| {
            let newly = s
                .registry
                .dispatch(reports.iter().map(|r| (r.key.as_str(), r.intersecting)));
            if newly.is_empty() {
                return;
            }
            tracing::debug!(sections = ?newly, "sections revealed");
            if let Some(observer) = &s.observer {
                for report in reports.iter().filter(|r| newly.contains(&r.key.as_str())) {
                    observer.unobserve(&report.target);
                }
            }
        });
        if stored.is_none() {
            tracing::trace!(reports = reports.len(), "reveal controller disposed, reports dropped");
        }
    }

    /// Stop observing everything. Later intersection events and
    /// registrations are ignored.
    pub fn teardown(&self) {
        match self.state.try_update_value(|s| {
            if let Some(observer) = s.observer.take() {
                observer.disconnect();
            }
            s.registry.teardown();
        }) {
            Some(()) => tracing::debug!("reveal observer torn down"),
            None => tracing::trace!("reveal controller already disposed"),
        }
    }
}
