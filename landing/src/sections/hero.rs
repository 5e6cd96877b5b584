use leptos::prelude::*;

use crate::content::{HEADLINE, TAGLINE, ids};

#[component]
pub fn Hero() -> impl IntoView {
    let demo_href = format!("#{}", ids::CONTACT);
    view! {
        <section id="top" class="hero">
            <div class="container">
                <h1 class="hero-title">{HEADLINE}</h1>
                <p class="hero-description">{TAGLINE}</p>
                <div class="hero-actions">
                    <a href=demo_href class="btn btn-primary">
                        "Request a Demo"
                    </a>
                </div>
            </div>
        </section>
    }
}
