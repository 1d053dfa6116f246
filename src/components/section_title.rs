//! Section Title Component

use leptos::prelude::*;

/// Accent bar + heading used at the top of every section
#[component]
pub fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <div class="mb-1 flex items-center gap-2">
            <span class="h-[4px] w-4 rounded-full bg-accent/80"></span>
            <h2 class="font-inter text-sm font-semibold tracking-tight text-slate-900 dark:text-slate-50">
                {title}
            </h2>
        </div>
    }
}
