//! Project Gallery Component
//!
//! Top projects on the home view, the whole catalog after "view all".

use leptos::prelude::*;

use crate::catalog::{visible_projects, PROJECTS};
use crate::components::SectionTitle;
use crate::context::use_app_context;
use crate::models::ProjectRecord;
use crate::state::ViewState;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let ctx = use_app_context();
    let summary_count = ctx.summary_project_count();
    let has_more = PROJECTS.len() > summary_count;

    view! {
        <section id="projects" class="mb-8 border-t border-slate-200 pt-6 dark:border-slate-700">
            <div class="flex items-center justify-between">
                <SectionTitle title="Projects" />
                <Show when=move || has_more>
                    {move || match ctx.active_view() {
                        ViewState::Home => view! {
                            <button
                                class="text-xs font-medium text-accent hover:underline dark:text-accent-light"
                                on:click=move |_| ctx.show_projects(ViewState::FullProjectList)
                            >
                                {format!("전체 프로젝트 보기 ({}) →", PROJECTS.len())}
                            </button>
                        }.into_any(),
                        ViewState::FullProjectList => view! {
                            <button
                                class="text-xs font-medium text-accent hover:underline dark:text-accent-light"
                                on:click=move |_| ctx.show_projects(ViewState::Home)
                            >
                                "← 돌아가기"
                            </button>
                        }.into_any(),
                    }}
                </Show>
            </div>

            <div class="mt-4 grid gap-4 md:grid-cols-2">
                <For
                    each=move || visible_projects(ctx.active_view(), summary_count)
                    key=|project| project.id
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <article class="flex h-full flex-col rounded-xl border border-slate-200 bg-slate-50 p-4 text-sm shadow-sm dark:border-slate-600 dark:bg-[#383a3d]">
            <h3 class="font-inter text-sm font-semibold text-slate-900 dark:text-slate-50">{project.name}</h3>
            <p class="mt-2 flex-1 text-slate-700 dark:text-slate-200">{project.description}</p>

            {project.achievement.map(|text| view! {
                <p class="mt-2 text-xs font-medium text-accent dark:text-accent-light">{format!("★ {}", text)}</p>
            })}

            <div class="mt-3 flex flex-wrap gap-1.5">
                {project.techs.iter().map(|t| view! {
                    <span class="rounded-full bg-slate-100 px-2 py-0.5 text-[11px] text-slate-800 dark:bg-[#4a4c50] dark:text-slate-50">
                        {*t}
                    </span>
                }).collect_view()}
            </div>

            {project.link_affordance().map(|link| view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-3 text-xs font-medium text-accent hover:underline dark:text-accent-light"
                >
                    {link.label}
                </a>
            })}
        </article>
    }
}
