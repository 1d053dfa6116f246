//! Contact Section and Footer

use leptos::prelude::*;

use crate::catalog::{CONTACT_EMAIL, CONTACT_LINKS, OWNER_NAME};
use crate::components::icons::ContactIcon;
use crate::components::SectionTitle;
use crate::models::ContactLink;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="border-t border-slate-200 pt-6 dark:border-slate-700">
            <SectionTitle title="Contact" />
            <p class="mt-3 text-sm text-slate-700 dark:text-slate-300">
                "협업 제안, 문의, 기타 연락은 아래 채널로 부탁드립니다."
            </p>
            <div class="mt-3 space-y-1 text-sm">
                <p>{format!("Email: {}", CONTACT_EMAIL)}</p>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    use chrono::Datelike;
    let year = chrono::Local::now().year();

    view! {
        <footer class="mt-16 border-t border-slate-200 py-6 text-center text-xs text-slate-500 dark:border-slate-700 dark:text-slate-400">
            <div class="mb-3 flex justify-center gap-6 text-2xl">
                {CONTACT_LINKS.iter().map(|link| view! { <FooterLink link=link /> }).collect_view()}
            </div>
            <p>{format!("© {} {}.", year, OWNER_NAME)}</p>
        </footer>
    }
}

#[component]
fn FooterLink(link: &'static ContactLink) -> impl IntoView {
    // mailto hands off to the mail client; everything else gets a new tab
    let target = link.opens_new_context().then_some("_blank");
    let rel = link.opens_new_context().then_some("noopener noreferrer");

    view! {
        <a
            href=link.href
            target=target
            rel=rel
            aria-label=link.label
            class="transition-colors duration-300 ease-out hover:text-accent dark:hover:text-accent-light"
        >
            <ContactIcon kind=link.kind />
        </a>
    }
}
