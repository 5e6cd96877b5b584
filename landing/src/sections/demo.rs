use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{BRAND, DEMO_IMAGE, ids};

#[component]
pub fn Demo() -> impl IntoView {
    view! {
        <RevealSection id=ids::DEMO class="demo">
            <div class="container">
                <h2 class="section-title">"See It In Action"</h2>
                <p class="section-description">{format!("Here's a look at the {BRAND} Web App:")}</p>
                <div class="demo-frame">
                    <img src=DEMO_IMAGE alt=format!("{BRAND} Web App Preview") class="demo-image" />
                </div>
            </div>
        </RevealSection>
    }
}
