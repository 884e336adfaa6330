use leptos::prelude::*;

use super::current_width;
use crate::{
    render::{self, NavItem},
    session::{Section, Session},
};

fn icon_for(section: Section) -> &'static str {
    match section {
        Section::Home => "icon-terminal",
        Section::About => "icon-user",
        Section::Certifications => "icon-award",
        Section::Projects => "icon-code",
    }
}

#[component]
pub fn Nav(width: Signal<f64>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let nav = Memo::new(move |_| session.with(render::nav));

    view! {
        <nav class="relative z-10 p-6 border-b border-cyan-500/30">
            <div class="max-w-7xl mx-auto flex flex-wrap justify-center gap-4">
                <button
                    aria-label="Open navigation"
                    class="md:hidden bg-gray-800 p-2 rounded"
                    on:click=move |_| session.update(|s| s.nav.toggle_mobile_nav())
                >
                    <i class="icon-menu" />
                </button>
                <div class=move || {
                    if nav.with(|n| n.mobile_open) {
                        "flex flex-col md:flex-row md:gap-4"
                    } else {
                        "hidden md:flex md:flex-row md:gap-4"
                    }
                }>
                    {move || {
                        nav.get()
                            .items
                            .into_iter()
                            .map(|item| view! { <NavButton item width /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(item: NavItem, width: Signal<f64>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let section = item.section;
    let class = if item.active {
        "flex items-center space-x-2 px-4 py-2 rounded-lg transition-colors duration-200 relative bg-cyan-500/20 text-cyan-400 border border-cyan-500/50"
    } else {
        "flex items-center space-x-2 px-4 py-2 rounded-lg transition-colors duration-200 relative text-gray-400 hover:text-cyan-400 hover:bg-cyan-500/10"
    };
    view! {
        <button
            aria-label=format!("Navigate to {}", item.label)
            aria-current=item.active.then_some("page")
            class=class
            on:click=move |_| {
                let w = current_width(width);
                session.update(|s| s.navigate(section, w));
            }
        >
            <i class=icon_for(section) />
            <span class="font-mono text-sm">{item.label}</span>
            {item
                .active
                .then(|| {
                    view! {
                        <span class="absolute left-0 bottom-0 h-1 w-full bg-cyan-400 rounded-full"></span>
                    }
                })}
        </button>
    }
}
