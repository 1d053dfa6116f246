//! Scroll-to-top Button

use leptos::prelude::*;

use crate::components::icons::ArrowUpIcon;
use crate::context::use_app_context;

/// Floating button, mounted only while the page is scrolled past the threshold
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.scroll_top_visible()>
            <button
                on:click=move |_| ctx.scroll_to_top()
                aria-label="Scroll to top"
                class="fixed bottom-5 right-4 flex h-10 w-10 items-center justify-center rounded-full border border-accent/60 bg-white/90 text-slate-700 shadow-md backdrop-blur transition hover:-translate-y-0.5 hover:shadow-lg dark:border-accent-light/70 dark:bg-[#383a3d]/90 dark:text-slate-100 md:bottom-7 md:right-8"
            >
                <ArrowUpIcon icon_class="h-4 w-4" />
            </button>
        </Show>
    }
}
