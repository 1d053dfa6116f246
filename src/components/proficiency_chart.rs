//! Proficiency Chart Component
//!
//! Horizontal bars on a shared 0-100 scale. Hover or focus shows the exact value.

use leptos::prelude::*;

use crate::chart::{layout_bars, ChartBar};
use crate::models::ProficiencyEntry;

#[component]
pub fn ProficiencyChart(entries: &'static [ProficiencyEntry]) -> impl IntoView {
    let (active, set_active) = signal(None::<usize>);
    let bars = layout_bars(entries);

    view! {
        <div class="h-56 w-full rounded-xl border border-slate-200 bg-slate-50 p-3 text-xs dark:border-slate-600 dark:bg-[#383a3d]">
            <p class="mb-2 text-[11px] font-semibold text-slate-500 dark:text-slate-300">
                "Tech Focus (비중)"
            </p>
            <div class="flex flex-col gap-3 pt-2" role="list">
                {bars.into_iter().enumerate().map(|(index, bar)| view! {
                    <ChartRow index=index bar=bar active=active set_active=set_active />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ChartRow(
    index: usize,
    bar: ChartBar,
    active: ReadSignal<Option<usize>>,
    set_active: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let is_active = move || active.get() == Some(index);
    let tooltip = bar.tooltip();
    let aria_label = tooltip.clone();
    let clear = move || set_active.update(|a| if *a == Some(index) { *a = None });

    view! {
        <div class="flex items-center gap-2" role="listitem">
            <span class="w-20 shrink-0 text-right text-[11px]">{bar.label}</span>
            <div class="relative h-6 flex-1 rounded-r bg-slate-400/15">
                <div
                    class="h-full rounded-r bg-current text-slate-400 outline-none dark:text-slate-200"
                    style=bar.width_style()
                    tabindex="0"
                    aria-label=aria_label
                    on:mouseenter=move |_| set_active.set(Some(index))
                    on:mouseleave=move |_| clear()
                    on:focus=move |_| set_active.set(Some(index))
                    on:blur=move |_| clear()
                ></div>
                <Show when=is_active>
                    <span class="absolute -top-7 left-2 z-10 rounded border border-[#E5E7EB] bg-[#F9FAFB] px-2 py-0.5 text-[11px] text-[#0F172A] shadow-sm">
                        {tooltip.clone()}
                    </span>
                </Show>
            </div>
        </div>
    }
}
