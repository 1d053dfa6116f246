//! Portfolio App
//!
//! Page shell: builds the state manager, provides it, and lays out the sections.

use browser_env::Environment;
use leptos::prelude::*;

use crate::components::{
    ContactSection, ExperienceSection, Footer, Hero, ProjectGallery, ScrollToTopButton, SiteHeader,
    SkillsSection, Summary,
};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::state::UiStateManager;

#[component]
pub fn App() -> impl IntoView {
    let env = Environment::browser();
    if env.is_none() {
        log::info!("[APP] no interactive document, theme and scroll sync disabled");
    }

    let mut manager = UiStateManager::new(PageConfig::default(), env);
    manager.initialize_theme();

    let ctx = AppContext::new(manager);
    provide_context(ctx);

    // Scroll listener lives as long as the page
    let scroll_guard = StoredValue::new_local(ctx.observe_scroll());
    on_cleanup(move || {
        scroll_guard.try_update_value(|guard| guard.take());
    });

    view! {
        <div class="min-h-screen scroll-smooth bg-white text-slate-900 transition-colors dark:bg-[#242526] dark:text-slate-50">
            <SiteHeader />

            <main class="mx-auto max-w-3xl px-4 pb-16 pt-8">
                <Hero />
                <Summary />
                <SkillsSection />
                <ExperienceSection />
                <ProjectGallery />
                <ContactSection />
            </main>

            <ScrollToTopButton />
            <Footer />
        </div>
    }
}
