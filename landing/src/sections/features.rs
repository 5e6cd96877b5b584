use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{FEATURES, Feature, ids};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <RevealSection id=ids::FEATURES class="features">
            <div class="container">
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <img src="assets/check-icon.png" alt="" class="feature-icon" />
            <div>
                <h3 class="feature-title">{feature.title}</h3>
                <p class="feature-description">{feature.description}</p>
            </div>
        </article>
    }
}
