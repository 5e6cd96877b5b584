use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{CORE_VALUES, MISSION, VISION, ids};

/// Mission, vision and core values.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection id=ids::ABOUT class="about">
            <div class="container">
                <div class="about-grid">
                    <article class="about-card">
                        <h2 class="section-title">"Our Mission"</h2>
                        <p class="about-text">{MISSION}</p>
                    </article>
                    <article class="about-card">
                        <h2 class="section-title">"Our Vision"</h2>
                        <p class="about-text">{VISION}</p>
                    </article>
                </div>
                <h3 class="values-title">"Core Values"</h3>
                <ul class="values-list">
                    {CORE_VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <li class="value-item">
                                    <span class="value-name">{value.name}</span>
                                    <span class="value-description">{value.description}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </RevealSection>
    }
}
