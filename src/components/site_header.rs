//! Site Header Component
//!
//! Sticky header with logo, name, hidden section nav and the theme toggle.

use leptos::prelude::*;

use crate::catalog::{OWNER_NAME, OWNER_TITLE, SECTION_ANCHORS};
use crate::components::icons::{MoonIcon, SunIcon};
use crate::context::use_app_context;
use crate::state::Theme;

const LOGO_SRC: &str = "public/logo.svg";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="sticky top-0 z-20 border-b border-slate-200 bg-white/80 backdrop-blur dark:border-slate-700 dark:bg-[#242526]/90">
            <div class="mx-auto flex h-14 max-w-3xl items-center justify-between px-4">
                // Logo + name reload the page
                <div class="flex cursor-pointer select-none items-center" on:click=move |_| ctx.reload()>
                    <button class="flex items-center justify-center rounded-md p-1 transition-opacity hover:opacity-80">
                        <img src=LOGO_SRC alt="Logo" class="max-h-16 w-auto object-contain" />
                    </button>
                    <div class="flex flex-col leading-tight">
                        <span class="text-s font-semibold tracking-tight text-slate-900 dark:text-slate-50">
                            {OWNER_NAME}
                        </span>
                        <span class="text-[11px] text-slate-500 dark:text-slate-400">
                            {OWNER_TITLE}
                        </span>
                    </div>
                </div>

                <div class="flex items-center gap-4">
                    // Section nav, hidden until the layout settles
                    <nav class="hidden">
                        {SECTION_ANCHORS.iter().map(|(id, label)| view! {
                            <a
                                href=format!("#{}", id)
                                class="text-slate-600 hover:text-slate-900 dark:text-slate-300 dark:hover:text-white"
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                    </nav>

                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

/// Icon-only theme switch: sun while dark, moon while light
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            on:click=move |_| ctx.toggle_theme()
            aria-label="Toggle theme"
            class="flex h-8 w-8 items-center justify-center rounded-full border border-slate-300 bg-white text-slate-700 shadow-sm transition hover:-translate-y-0.5 hover:border-slate-400 hover:shadow-md dark:border-slate-600 dark:bg-[#383a3d] dark:text-slate-100"
        >
            {move || match ctx.theme() {
                Theme::Dark => view! { <SunIcon icon_class="h-4 w-4" /> }.into_any(),
                Theme::Light => view! { <MoonIcon icon_class="h-4 w-4" /> }.into_any(),
            }}
        </button>
    }
}
