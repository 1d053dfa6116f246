//! Experience Section

use leptos::prelude::*;

use crate::catalog::EXPERIENCE;
use crate::components::SectionTitle;
use crate::models::ExperienceEntry;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="mb-8 border-t border-slate-200 pt-6 dark:border-slate-700">
            <SectionTitle title="Experience" />
            <p class="mt-3 text-sm text-slate-700 dark:text-slate-300">
                "다년간 수행한 역할과 책임 중심으로 정리했습니다."
            </p>
            <div class="mt-4 space-y-5">
                {EXPERIENCE.iter().map(|entry| view! { <ExperienceItem entry=entry /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceItem(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-200 bg-slate-50 p-4 text-sm shadow-sm dark:border-slate-600 dark:bg-[#383a3d]">
            <p class="text-xs text-slate-500 dark:text-slate-300">{entry.period}</p>
            <p class="mt-1 font-semibold text-slate-900 dark:text-slate-50">
                {format!("{} · {}", entry.role, entry.org)}
            </p>
            <ul class="mt-2 list-disc space-y-1 pl-4 text-slate-700 dark:text-slate-200">
                {entry.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
        </div>
    }
}
