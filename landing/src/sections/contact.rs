use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{CONTACT, SOCIAL_LINKS, ids};

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", CONTACT.email);
    view! {
        <RevealSection id=ids::CONTACT class="contact">
            <div class="container">
                <h2 class="section-title">"Contact Us"</h2>
                <p class="contact-line">
                    "Email Us: "
                    <a href=mailto class="contact-link">{CONTACT.email}</a>
                </p>
                <p class="contact-line">"Phone Number: "{CONTACT.phone}</p>
                <p class="contact-address">{CONTACT.address}</p>
                <div class="social-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a href=social.url target="_blank" rel="noopener noreferrer" class="social-link">
                                    <img src=social.icon alt=social.label class="social-icon" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
