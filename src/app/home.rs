use leptos::prelude::*;

use crate::{render::HomeView, session::Session};

#[component]
pub fn HomeSection(home: HomeView) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    // the static parts of `home` render once; only the headline and cursor follow the timers
    let headline = Memo::new(move |_| {
        session.with(|s| s.animation.typewriter.text().to_string())
    });
    let cursor_visible = Memo::new(move |_| session.with(|s| s.animation.cursor.visible()));

    view! {
        <div class="space-y-12">
            <div class="text-center space-y-6">
                <div class="relative">
                    <h1 class="text-4xl md:text-6xl font-bold bg-gradient-to-r from-cyan-400 to-green-400 bg-clip-text text-transparent">
                        {move || headline.get()}
                        <span class=move || {
                            if cursor_visible.get() { "opacity-100" } else { "opacity-0" }
                        }>"|"</span>
                    </h1>
                </div>
                <p class="text-xl text-gray-300 max-w-3xl mx-auto">{home.tagline}</p>
                {home
                    .badge
                    .map(|badge| {
                        view! {
                            <div class="flex justify-center mb-6">
                                <div class="bg-gray-800/50 border border-cyan-500/30 rounded-lg p-4">
                                    <iframe
                                        src=badge.url
                                        class="border-none rounded-lg"
                                        width=badge.width.to_string()
                                        height=badge.height.to_string()
                                        title=badge.title
                                        sandbox="allow-scripts allow-same-origin"
                                        attr:loading="lazy"
                                    ></iframe>
                                </div>
                            </div>
                        }
                    })}
            </div>
            <div class="grid md:grid-cols-4 gap-6">
                {home
                    .stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="bg-gray-800/50 border border-cyan-500/30 rounded-lg p-6 text-center hover:border-cyan-400 transition-colors duration-200">
                                <div class="text-cyan-400 mb-2 flex justify-center">
                                    <i class=stat.icon.class() />
                                </div>
                                <div class="text-2xl font-bold text-white mb-1">{stat.value}</div>
                                <div class="text-gray-400 text-sm">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
