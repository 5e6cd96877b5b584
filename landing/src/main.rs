// PATTEX Landing Page, Leptos 0.8 Edition

mod carousel;
mod components;
mod config;
mod content;
mod dom;
mod error;
mod logging;
mod reveal;
mod sections;

use config::SiteConfig;
use dom::RevealController;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::load();
    logging::init(loaded.as_ref().map_or("info", |c| c.log_level.as_str()));
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "site config rejected, using defaults");
        SiteConfig::default()
    });
    tracing::info!(sections = content::ids::ALL.len(), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    // One observer for every section, released when the page unmounts.
    let reveal = RevealController::new(&config.reveal);
    provide_context(reveal);
    on_cleanup(move || reveal.teardown());

    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <Technology />
            <Partners />
            <Testimonials />
            <Demo />
            <About />
            <AppWalkthrough initial_index=config.carousel.initial_index />
            <Team />
            <Contact />
        </main>
        <Footer />
    }
}
