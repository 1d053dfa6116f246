//! Skills Section
//!
//! Skill chip rows followed by the proficiency chart card.

use leptos::prelude::*;

use crate::catalog::{PROFICIENCY, SKILL_GROUPS};
use crate::components::{ProficiencyChart, SectionTitle};
use crate::models::SkillGroup;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="mb-8 border-t border-slate-200 pt-6 dark:border-slate-700">
            <SectionTitle title="Skills" />

            <div class="mt-4 space-y-5 text-sm">
                <div class="mt-4 space-y-4 text-sm">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillRow group=group /> }).collect_view()}
                </div>

                <div class="rounded-xl border border-slate-200 bg-slate-50 p-4 text-xs shadow-sm dark:border-slate-600 dark:bg-[#383a3d]">
                    <div class="flex items-baseline justify-between gap-3">
                        <p class="font-semibold text-slate-700 dark:text-slate-100">"Tech Proficiency Overview"</p>
                        <p class="text-[11px] text-slate-500 dark:text-slate-300">"상대적인 비중 / 활용도 기준 (0–100)"</p>
                    </div>

                    // Legend
                    <div class="mt-2 flex flex-wrap gap-1.5 text-[11px] text-slate-500 dark:text-slate-300">
                        {PROFICIENCY.iter().map(|entry| view! {
                            <span class="rounded-full border border-slate-200 px-2 py-0.5 dark:border-slate-500">
                                {entry.category}
                            </span>
                        }).collect_view()}
                    </div>

                    <div class="mt-3 h-64">
                        <ProficiencyChart entries=PROFICIENCY />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillRow(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1 text-sm md:flex-row md:items-baseline md:gap-4">
            <div class="w-28 shrink-0 text-xs font-semibold uppercase tracking-wide text-slate-500 dark:text-slate-400">
                {group.label}
            </div>
            <div class="flex flex-wrap gap-1.5">
                {group.items.iter().map(|item| view! {
                    <span class="rounded-full border border-slate-200 bg-slate-50 px-2 py-0.5 text-xs text-slate-800 dark:border-slate-600 dark:bg-[#383a3d] dark:text-slate-50">
                        {*item}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}
