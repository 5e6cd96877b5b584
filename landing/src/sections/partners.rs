use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{PARTNERS, ids};

#[component]
pub fn Partners() -> impl IntoView {
    view! {
        <RevealSection id=ids::PARTNERS class="partners">
            <div class="container">
                <h2 class="section-title">"Our Partners"</h2>
                <div class="partners-grid">
                    {PARTNERS
                        .iter()
                        .enumerate()
                        .map(|(i, logo)| {
                            view! {
                                <div class="partner-card">
                                    <img src=*logo alt=format!("Partner {}", i + 1) class="partner-logo" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
