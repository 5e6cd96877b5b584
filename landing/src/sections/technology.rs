use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{TECH_STACK, ids};

#[component]
pub fn Technology() -> impl IntoView {
    view! {
        <RevealSection id=ids::TECHNOLOGY class="technology">
            <div class="container">
                <h2 class="section-title">"Technology Stack"</h2>
                <ul class="tech-list">
                    {TECH_STACK
                        .iter()
                        .map(|tech| view! { <li class="tech-item">"✅ "{*tech}</li> })
                        .collect_view()}
                </ul>
            </div>
        </RevealSection>
    }
}
