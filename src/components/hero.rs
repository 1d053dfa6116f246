//! Hero and Summary Sections

use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::context::use_app_context;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();

    let go_to_projects = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.scroll_to_anchor("projects");
    };

    view! {
        <section class="mb-8 border-b border-slate-200 pb-6 dark:border-slate-700">
            <div class="flex items-start gap-6">
                // Profile image frame
                <div class="flex h-32 w-32 flex-shrink-0 items-center justify-center rounded-xl border border-slate-300 bg-slate-100 text-xs text-slate-500 dark:border-slate-600 dark:bg-[#383a3d] dark:text-slate-400">
                    "Image Here"
                </div>

                <div class="flex-1">
                    <h2 class="font-inter text-2xl font-semibold tracking-tight">
                        "복잡함을 구조로 풀어내는 개발자, 준입니다."
                    </h2>
                    <p class="mt-3 text-s leading-relaxed text-slate-600 dark:text-slate-300">
                        "웹·모바일·백엔드를 넘나들며 문제의 본질을 찾고, 서비스가 단순하게 작동하도록 만드는 데 집중합니다."
                    </p>
                    <p class="mt-2 text-s leading-relaxed text-slate-600 dark:text-slate-300">
                        "기술보다 흐름과 사용자 경험을 먼저 고민하며, 제품이 실제로 가치로 이어지는 구조를 설계합니다."
                    </p>

                    <div class="mt-4 flex flex-wrap gap-3 text-sm">
                        <a
                            href="#projects"
                            on:click=go_to_projects
                            class="inline-flex items-center rounded-full border border-accent/70 bg-accent/90 px-4 py-1.5 text-sm font-medium text-white transition-colors duration-300 ease-out hover:bg-accent dark:border-accent-light/70 dark:bg-accent-light/90 dark:hover:bg-accent-light"
                        >
                            "프로젝트 보기"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Summary() -> impl IntoView {
    view! {
        <section id="summary" class="mb-8">
            <SectionTitle title="Summary" />
            <p class="mt-3 text-sm leading-relaxed text-slate-700 dark:text-slate-300">
                "복잡한 흐름을 단순한 구조로 정리하고, 실제로 작동하는 제품으로 연결하는 과정에 집중합니다. \
                 웹·모바일·백엔드를 넘나들며 필요한 것을 빠르게 실험하고 구현합니다. \
                 작은 디테일과 인터랙션이 만드는 사용자 경험을 중요하게 생각하며, \
                 더 나은 사용성을 향해 지속적으로 개선합니다."
            </p>
        </section>
    }
}
