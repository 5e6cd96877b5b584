use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{TESTIMONIALS, ids};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <RevealSection id=ids::CUSTOMERS class="testimonials">
            <div class="container">
                <h2 class="section-title">"Customer Testimonials"</h2>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial-card">
                                    <p class="testimonial-quote">"“"{t.quote}"”"</p>
                                    <footer class="testimonial-author">"– "{t.author}</footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
