use leptos::prelude::*;

use crate::content::BRAND;
use crate::dom::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {BRAND}. All rights reserved.", current_year());
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
