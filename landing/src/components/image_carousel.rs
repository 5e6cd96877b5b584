use leptos::html;
use leptos::prelude::*;

use crate::carousel::Carousel;
use crate::dom;

/// Horizontally scrollable, snap-aligned image strip with one dot per image.
///
/// The strip centres `initial_index` (clamped) once it has been laid out.
/// Scrolling by hand moves the active dot to the nearest image; clicking a
/// dot smooth-scrolls to its image and highlights it immediately.
#[component]
pub fn ImageCarousel(
    images: &'static [&'static str],
    #[prop(default = 1)] initial_index: usize,
    #[prop(default = "Image")] alt_prefix: &'static str,
) -> impl IntoView {
    let count = images.len();
    let carousel = StoredValue::new(Carousel::new(count));
    let (active, set_active) = signal(0usize);
    let track = NodeRef::<html::Div>::new();

    let sync_active = move || set_active.set(carousel.with_value(Carousel::active_index));
    let dot_active = move |index: usize| {
        active.track();
        carousel.with_value(|c| c.is_active(index))
    };

    let scroll_to = move |index: usize| {
        let Some(el) = track.get_untracked() else {
            return;
        };
        let m = dom::measure(&el);
        if let Some(cmd) = carousel
            .try_update_value(|c| c.scroll_to_index(index, &m))
            .flatten()
        {
            tracing::debug!(index, left = cmd.left, "carousel: scroll to index");
            dom::apply(&el, cmd);
            sync_active();
        }
    };

    Effect::new(move || {
        let Some(el) = track.get() else {
            return;
        };
        // Wait one frame so the items have a width to centre against.
        request_animation_frame(move || {
            let m = dom::measure(&el);
            if let Some(cmd) = carousel
                .try_update_value(|c| c.mount(initial_index, &m))
                .flatten()
            {
                tracing::debug!(
                    index = carousel.with_value(Carousel::active_index),
                    left = cmd.left,
                    "carousel: initial centring"
                );
                dom::apply(&el, cmd);
                sync_active();
            }
        });
    });

    let on_scroll = move |_| {
        let Some(el) = track.get_untracked() else {
            return;
        };
        let m = dom::measure(&el);
        let offset = dom::scroll_offset(&el);
        let changed = carousel
            .try_update_value(|c| c.on_user_scroll(offset, &m))
            .unwrap_or(false);
        if changed {
            sync_active();
        }
    };

    if count == 0 {
        return ().into_any();
    }

    view! {
        <div class="carousel">
            <div class="carousel-track" node_ref=track on:scroll=on_scroll>
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <div class="carousel-item">
                                <img
                                    src=*src
                                    alt=format!("{alt_prefix} {}", i + 1)
                                    class="carousel-image"
                                    loading="lazy"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="carousel-dots">
                {(0..count)
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if dot_active(i) { "carousel-dot active" } else { "carousel-dot" }
                                }
                                aria-label=format!("Show {} {}", alt_prefix.to_lowercase(), i + 1)
                                aria-current=move || dot_active(i).then_some("true")
                                on:click=move |_| scroll_to(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
