use leptos::prelude::*;

use crate::components::{ImageCarousel, RevealSection};
use crate::content::{APP_IMAGES, ids};

#[component]
pub fn AppWalkthrough(initial_index: usize) -> impl IntoView {
    view! {
        <RevealSection id=ids::APP class="app-walkthrough">
            <div class="container">
                <h2 class="section-title">"Mobile App Walkthrough"</h2>
                <p class="section-description">
                    "Preview the user journey in our fabric detection mobile app:"
                </p>
                <ImageCarousel images=APP_IMAGES initial_index=initial_index alt_prefix="Screen" />
            </div>
        </RevealSection>
    }
}
