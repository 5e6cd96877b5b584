use leptos::prelude::*;

use crate::content::{BRAND, LOGO, NAV_LINKS};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#top" class="nav-brand">
                    <img src=LOGO alt=format!("{BRAND} logo") class="nav-logo" />
                </a>

                // Burger, visible below the mobile breakpoint only
                <button
                    class=move || if menu_open.get() { "nav-burger open" } else { "nav-burger" }
                    aria-label="Toggle navigation"
                    aria-controls="nav-links"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    <span class="burger-bar"></span>
                    <span class="burger-bar"></span>
                    <span class="burger-bar"></span>
                </button>

                <nav
                    id="nav-links"
                    class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }
                >
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.target)
                                    class="nav-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
