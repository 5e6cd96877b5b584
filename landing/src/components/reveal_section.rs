use leptos::html;
use leptos::prelude::*;

use crate::dom::RevealController;

/// A page section that fades in the first time it scrolls into view.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let controller = expect_context::<RevealController>();
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<html::Section>::new();

    Effect::new(move || {
        if let Some(section) = node_ref.get() {
            controller.observe(id, &section, revealed);
        }
    });

    view! {
        <section
            id=id
            node_ref=node_ref
            data-reveal=id
            class=move || reveal_class(class, revealed.get())
        >
            {children()}
        </section>
    }
}

fn reveal_class(base: &str, revealed: bool) -> String {
    let state = if revealed { "reveal revealed" } else { "reveal" };
    if base.is_empty() {
        state.to_string()
    } else {
        format!("{base} {state}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tracks_revealed_flag() {
        assert_eq!(reveal_class("features", false), "features reveal");
        assert_eq!(reveal_class("features", true), "features reveal revealed");
        assert_eq!(reveal_class("", true), "reveal revealed");
    }
}
